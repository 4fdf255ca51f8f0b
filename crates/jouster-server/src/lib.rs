//! Jouster Server
//!
//! HTTP front end for text analysis: accepts text, asks a language model for
//! a summary, title, topics and sentiment, extracts keywords locally, and
//! stores the result for later topic search.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod service;

use config::{ServerConfig, API_KEY_ENV};
use handlers::{create_router, AppState};
use jouster_analyzer::AnalysisClient;
use jouster_keywords::KeywordExtractor;
use jouster_llm::{LlmError, OpenRouterProvider};
use jouster_store::{SqliteStore, StoreError};
use service::AnalysisService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Record store could not be opened
    #[error("Failed to open record store: {0}")]
    Store(#[from] StoreError),

    /// Provider client could not be built
    #[error("Failed to create OpenRouter client: {0}")]
    Provider(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build application state from configuration
///
/// Opens the record store and the OpenRouter client. A missing API key is
/// logged and tolerated; requests will then fail at the provider.
pub fn build_state(config: &ServerConfig) -> Result<AppState<SqliteStore>, ServerError> {
    let provider = OpenRouterProvider::new(config.openrouter.clone(), config.api_key.clone())?;
    if !provider.has_api_key() {
        warn!("{} is not set; analysis requests will be rejected by OpenRouter", API_KEY_ENV);
    }
    info!("Model: {}", provider.model());

    let analyzer = AnalysisClient::new(provider, config.analysis.clone());
    info!("Analysis provider: {}", analyzer.provider_name());
    let store = SqliteStore::from_database_url(&config.database_url)?;

    let service = AnalysisService::new(
        analyzer,
        KeywordExtractor::new(),
        config.keywords.top_n,
        Arc::new(store),
    );

    Ok(AppState {
        service: Arc::new(service),
    })
}

/// Start the HTTP server
///
/// Validates configuration, opens the store, and serves until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting Jouster");
    info!("Bind address: {}", config.bind_addr());
    info!("Database: {}", config.database_url);

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Jouster listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Jouster stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
