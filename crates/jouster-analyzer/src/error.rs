//! Error types for the Analysis Client

use jouster_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during text analysis
///
/// Every variant is terminal for the request: nothing is retried.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input was empty or whitespace only
    #[error("Input text cannot be empty")]
    EmptyInput,

    /// Provider call failed (transport, non-2xx status, unusable envelope)
    #[error(transparent)]
    Provider(#[from] LlmError),

    /// The JSON span in the reply could not be decoded
    #[error("Error parsing OpenRouter response.")]
    MalformedJson(#[source] serde_json::Error),
}
