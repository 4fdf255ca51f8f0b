//! Jouster Domain Layer
//!
//! Core data model for the Jouster text-analysis service. Every other crate
//! depends on the types and trait interfaces defined here.
//!
//! ## Key Concepts
//!
//! - **AnalysisResult**: transient output of the external analysis call
//! - **KeywordSet**: transient output of the local keyword extractor
//! - **AnalysisRecord**: the durable, store-owned outcome of one request
//! - **RecordStore**: the persistence boundary
//!
//! ## Architecture
//!
//! - No I/O, pure data and invariants only
//! - Infrastructure implementations live in other crates
//! - `chrono` is the single external dependency (record timestamps)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod keywords;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use analysis::{normalize_topics, AnalysisResult, Sentiment, TOPIC_COUNT};
pub use keywords::{KeywordSet, DEFAULT_TOP_N};
pub use record::{AnalysisRecord, NewRecord, RecordId};
pub use traits::RecordStore;
