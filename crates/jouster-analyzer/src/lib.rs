//! Jouster Analyzer
//!
//! Turns a block of text into a structured [`AnalysisResult`] with one
//! language-model call.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → LlmProvider → normalize_response → AnalysisResult
//! ```
//!
//! The reply is free-form: the first `{` through the last `}` is decoded,
//! missing fields take defaults and topics are fixed at three. A reply with
//! no JSON at all degrades to a placeholder result rather than failing.
//!
//! # Example Usage
//!
//! ```no_run
//! use jouster_analyzer::{AnalysisClient, AnalyzerConfig};
//! use jouster_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"summary": "s", "topics": ["a"], "sentiment": "neutral"}"#);
//! let client = AnalysisClient::new(llm, AnalyzerConfig::default());
//!
//! let result = client.analyze("Alice opened a bakery.").await?;
//! println!("{} / {:?}", result.summary, result.topics);
//! # Ok(())
//! # }
//! ```
//!
//! [`AnalysisResult`]: jouster_domain::AnalysisResult

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod parser;
mod prompt;


pub use client::AnalysisClient;
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use parser::{extract_json_span, normalize_response};
pub use prompt::PromptBuilder;
