//! Analysis records - the durable entity of the service

use crate::analysis::AnalysisResult;
use crate::keywords::KeywordSet;
use chrono::{DateTime, Utc};

/// Store-assigned record identifier
pub type RecordId = i64;

/// A record ready to be persisted
///
/// Built by the orchestrator from an [`AnalysisResult`] and a [`KeywordSet`].
/// The store assigns `id` and `created_date` on insert. The summary is not
/// part of the durable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Optional title
    pub title: Option<String>,
    /// Topics in provider order
    pub topics: Vec<String>,
    /// Sentiment label
    pub sentiment: Option<String>,
    /// Keywords in rank order
    pub keywords: Vec<String>,
}

impl NewRecord {
    /// Fold an analysis result and its keywords into a new record
    pub fn from_analysis(result: &AnalysisResult, keywords: &KeywordSet) -> Self {
        Self {
            title: result.title.clone(),
            topics: result.topics.to_vec(),
            sentiment: Some(result.sentiment.clone()),
            keywords: keywords.as_slice().to_vec(),
        }
    }
}

/// A persisted analysis record
///
/// Records are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// Unique, monotonically increasing identifier
    pub id: RecordId,
    /// Insertion time, assigned by the store
    pub created_date: DateTime<Utc>,
    /// Optional title
    pub title: Option<String>,
    /// Topics in original order
    pub topics: Vec<String>,
    /// Sentiment label
    pub sentiment: Option<String>,
    /// Keywords in rank order
    pub keywords: Vec<String>,
}
