//! Configuration file parsing for the server.
//!
//! Loads settings from an optional TOML file, then applies environment
//! overrides (`DATABASE_URL`, `OPENROUTER_API_KEY`).

use jouster_analyzer::AnalyzerConfig;
use jouster_keywords::KeywordConfig;
use jouster_llm::OpenRouterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the database
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable holding the OpenRouter API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range or empty
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Database location; see [`jouster_store::DatabaseLocation::from_url`]
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// OpenRouter endpoint settings
    #[serde(default)]
    pub openrouter: OpenRouterConfig,

    /// Sampling settings
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// Keyword extraction settings
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// OpenRouter API key; only ever read from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://jouster.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            database_url: default_database_url(),
            openrouter: OpenRouterConfig::default(),
            analysis: AnalyzerConfig::default(),
            keywords: KeywordConfig::default(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `DATABASE_URL` and `OPENROUTER_API_KEY` from the environment
    ///
    /// Blank values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_blank_var(DATABASE_URL_ENV) {
            self.database_url = url;
        }
        if let Some(key) = non_blank_var(API_KEY_ENV) {
            self.api_key = Some(key);
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url must not be empty".to_string()));
        }
        self.openrouter.validate().map_err(ConfigError::Invalid)?;
        self.analysis.validate().map_err(ConfigError::Invalid)?;
        self.keywords.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
