//! Request orchestration: validation, analysis, keyword extraction, storage.
//!
//! Handlers stay thin; everything that decides an outcome lives here so it
//! can be exercised without HTTP.

use jouster_analyzer::{AnalysisClient, AnalysisError};
use jouster_domain::{AnalysisRecord, NewRecord, RecordStore};
use jouster_keywords::KeywordExtractor;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const EMPTY_TEXT: &str = "Input text must be a non-empty string";
const EMPTY_TOPIC: &str = "Topic parameter must be a non-empty string";

/// Which operation an unexpected failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /analyze`
    Analyze,
    /// `GET /search`
    Search,
    /// `GET /records`
    List,
    /// `GET /health`
    Health,
}

impl Operation {
    fn context(self) -> &'static str {
        match self {
            Operation::Analyze => "Error analyzing text",
            Operation::Search => "Error searching records",
            Operation::List => "Error listing records",
            Operation::Health => "Error reading record store",
        }
    }
}

/// Errors surfaced by [`AnalysisService`]
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input was rejected before any work was done
    #[error("{0}")]
    Validation(&'static str),

    /// The analysis provider failed or its reply was unusable
    #[error("OpenRouter error: {0}")]
    Analysis(#[source] AnalysisError),

    /// Anything else, typically the store
    #[error("{}: {message}", .operation.context())]
    Unexpected {
        /// Operation that failed
        operation: Operation,
        /// Underlying error message
        message: String,
    },
}

/// Outcome of a successful `analyze` call
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedRecord {
    /// The stored record
    pub record: AnalysisRecord,
    /// Summary from the analysis; not persisted
    pub summary: String,
}

/// Coordinates one request across the analyzer, keyword extractor and store
pub struct AnalysisService<S> {
    analyzer: AnalysisClient,
    keywords: KeywordExtractor,
    top_n: usize,
    store: Arc<S>,
}

impl<S> AnalysisService<S>
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    /// Create a new service
    pub fn new(analyzer: AnalysisClient, keywords: KeywordExtractor, top_n: usize, store: Arc<S>) -> Self {
        Self {
            analyzer,
            keywords,
            top_n,
            store,
        }
    }

    /// Analyze `text`, extract keywords, and persist the record
    ///
    /// Nothing is written unless analysis succeeds.
    pub async fn analyze(&self, text: &str) -> Result<AnalyzedRecord, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::Validation(EMPTY_TEXT));
        }

        let result = self.analyzer.analyze(text).await.map_err(|e| match e {
            AnalysisError::EmptyInput => ServiceError::Validation(EMPTY_TEXT),
            other => ServiceError::Analysis(other),
        })?;

        let keywords = self.keywords.extract(text, self.top_n);
        debug!("Extracted {} keywords", keywords.len());

        let new_record = NewRecord::from_analysis(&result, &keywords);
        let record = self
            .with_store(Operation::Analyze, move |store| store.insert(new_record))
            .await?;

        info!("Stored analysis record {}", record.id);
        Ok(AnalyzedRecord {
            record,
            summary: result.summary,
        })
    }

    /// Records with any topic containing `topic`, ignoring case
    ///
    /// A missing or blank topic is rejected. The needle is not trimmed.
    pub async fn search(&self, topic: Option<&str>) -> Result<Vec<AnalysisRecord>, ServiceError> {
        let needle = match topic {
            Some(topic) if !topic.trim().is_empty() => topic.to_string(),
            _ => return Err(ServiceError::Validation(EMPTY_TOPIC)),
        };

        self.with_store(Operation::Search, move |store| {
            store.find_by_topic_substring(&needle)
        })
        .await
    }

    /// Every record, oldest first
    pub async fn list_records(&self) -> Result<Vec<AnalysisRecord>, ServiceError> {
        self.with_store(Operation::List, |store| store.list_all()).await
    }

    /// Number of stored records
    pub async fn record_count(&self) -> Result<usize, ServiceError> {
        self.with_store(Operation::Health, |store| store.count()).await
    }

    /// Run a blocking store call off the async runtime
    async fn with_store<T, F>(&self, operation: Operation, f: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T, S::Error> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let unexpected = |message: String| ServiceError::Unexpected { operation, message };

        tokio::task::spawn_blocking(move || f(&*store).map_err(|e| e.to_string()))
            .await
            .map_err(|e| unexpected(e.to_string()))?
            .map_err(unexpected)
    }
}
