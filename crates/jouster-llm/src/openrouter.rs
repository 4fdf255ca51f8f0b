//! OpenRouter Provider Implementation
//!
//! Integration with OpenRouter's OpenAI-compatible chat-completions API.
//!
//! # Features
//!
//! - Async HTTP communication with the chat-completions endpoint
//! - Configurable endpoint and model
//! - Optional request timeout (none by default; reqwest's defaults apply)
//! - Single attempt per call: failures surface immediately, no retries
//!
//! # Examples
//!
//! ```no_run
//! use jouster_llm::{CompletionRequest, LlmProvider, OpenRouterConfig, OpenRouterProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenRouterProvider::new(OpenRouterConfig::default(), Some("sk-or-...".into()))?;
//! let reply = provider.complete(CompletionRequest::user("Say hello")).await?;
//! # Ok(())
//! # }
//! ```

use crate::{ChatMessage, CompletionRequest, LlmError, LlmProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Default OpenRouter chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

const PROVIDER_NAME: &str = "OpenRouter";

/// OpenRouter settings (`[openrouter]` config section)
///
/// The API key is deliberately not part of this struct; it comes from the
/// environment and is passed to [`OpenRouterProvider::new`] separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// Chat-completions URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds; `None` keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl OpenRouterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("openrouter.endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("openrouter.model must not be empty".to_string());
        }
        if self.timeout_secs == Some(0) {
            return Err("openrouter.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// OpenRouter chat-completions provider
pub struct OpenRouterProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Response envelope from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider
    ///
    /// # Parameters
    ///
    /// - `config`: endpoint, model and timeout
    /// - `api_key`: bearer token; when `None` requests are sent unauthenticated
    ///   and the provider will reject them
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(config: OpenRouterConfig, api_key: Option<String>) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint,
            model: config.model,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    /// Model identifier in use
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API key was supplied
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one chat-completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable or the transport fails
    /// - The API answers with a non-2xx status
    /// - The envelope has no `choices` or no message content
    pub async fn chat(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut http_request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        debug!(
            "Sending chat completion to {} (model {}, {} messages)",
            self.endpoint,
            self.model,
            request.messages.len()
        );

        let response = http_request.send().await.map_err(|e| {
            error!("Network error calling {} API: {}", PROVIDER_NAME, e);
            LlmError::Communication(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read {} response body: {}", PROVIDER_NAME, e);
            LlmError::Communication(e.to_string())
        })?;

        if !status.is_success() {
            error!("{} API error: {} - {}", PROVIDER_NAME, status.as_u16(), text);
            return Err(LlmError::Status {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        parse_envelope(&text)
    }
}

/// Pull the first choice's message content out of a response body
fn parse_envelope(body: &str) -> Result<String, LlmError> {
    let envelope: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        error!("Error parsing {} response envelope: {} - {}", PROVIDER_NAME, e, body);
        LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
    })?;

    let first = envelope
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::EmptyResponse {
            provider: PROVIDER_NAME.to_string(),
        })?;

    first
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Missing message content".to_string()))
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.chat(&request).await
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OpenRouterProvider::new(OpenRouterConfig::default(), Some("key".into())).unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert!(provider.has_api_key());
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let provider = OpenRouterProvider::new(OpenRouterConfig::default(), Some("  ".into())).unwrap();
        assert!(!provider.has_api_key());
    }

    #[test]
    fn test_config_validation() {
        assert!(OpenRouterConfig::default().validate().is_ok());

        let mut config = OpenRouterConfig::default();
        config.model = String::new();
        assert!(config.validate().is_err());

        let mut config = OpenRouterConfig::default();
        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: OpenRouterConfig = toml::from_str("").unwrap();
        assert_eq!(config, OpenRouterConfig::default());
    }

    #[test]
    fn test_parse_envelope() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#;
        assert_eq!(parse_envelope(body).unwrap(), "hi");
    }

    #[test]
    fn test_parse_envelope_empty_choices() {
        let result = parse_envelope(r#"{"choices":[]}"#);
        assert!(matches!(result, Err(LlmError::EmptyResponse { .. })));

        let result = parse_envelope(r#"{"id":"x"}"#);
        assert!(matches!(result, Err(LlmError::EmptyResponse { .. })));
    }

    #[test]
    fn test_parse_envelope_missing_content() {
        let result = parse_envelope(r#"{"choices":[{"message":{"role":"assistant"}}]}"#);
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_envelope_not_json() {
        let result = parse_envelope("<html>gateway</html>");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = OpenRouterConfig {
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..OpenRouterConfig::default()
        };
        let provider = OpenRouterProvider::new(config, None).unwrap();

        let result = provider.complete(CompletionRequest::user("test")).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
