//! Jouster CLI
//!
//! Starts the HTTP server for text analysis and topic search.

use anyhow::Context;
use clap::Parser;
use jouster_server::{config::ServerConfig, start_server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Text analysis service backed by OpenRouter
#[derive(Debug, Parser)]
#[command(name = "jouster", version, about)]
struct Args {
    /// Load configuration from a TOML file
    #[arg(short, long, env = "JOUSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    bind_address: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(address) = args.bind_address {
        config.bind_address = address;
    }
    if let Some(port) = args.port {
        config.bind_port = port;
    }
    config.apply_env_overrides();

    start_server(config).await.context("Server failed")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
