//! Core Analysis Client implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::parser::normalize_response;
use crate::prompt::PromptBuilder;
use jouster_domain::AnalysisResult;
use jouster_llm::{CompletionRequest, LlmProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Sends one text to a language-model provider and normalizes the reply
///
/// Holds no per-request state and is safe to share across tasks.
#[derive(Clone)]
pub struct AnalysisClient {
    provider: Arc<dyn LlmProvider>,
    config: AnalyzerConfig,
}

impl AnalysisClient {
    /// Create a new client over `provider`
    pub fn new(provider: impl LlmProvider + 'static, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Analyze `text` with exactly one provider call
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `text` is empty or whitespace only (no provider call is made)
    /// - The provider call fails
    /// - The reply contains a JSON span that cannot be decoded
    ///
    /// A reply with no JSON span at all yields the placeholder result.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let prompt = PromptBuilder::new(text).build();
        debug!("Prompt length: {} chars", prompt.len());

        let request = CompletionRequest::user(prompt)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let reply = self.provider.complete(request).await?;
        debug!("Reply length: {} chars", reply.len());

        let result = normalize_response(&reply)?;
        info!(
            "Analyzed {} chars via {} (sentiment: {}, placeholder: {})",
            text.len(),
            self.provider.name(),
            result.sentiment,
            result.is_placeholder()
        );
        Ok(result)
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}
