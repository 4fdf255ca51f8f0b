//! Configuration for keyword extraction

use jouster_domain::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};

/// Keyword extraction settings (`[keywords]` config section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Maximum number of keywords kept per text
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 {
            return Err("keywords.top_n must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = KeywordConfig::default();
        assert_eq!(config.top_n, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = KeywordConfig { top_n: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: KeywordConfig = toml::from_str("").unwrap();
        assert_eq!(config.top_n, 3);
    }
}
