//! HTTP request handlers for the analysis service.
//!
//! Implements the analyze, search, records and health endpoints using axum.

use crate::service::{AnalysisService, AnalyzedRecord, ServiceError};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use jouster_domain::{AnalysisRecord, RecordId, RecordStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Shared application state
pub struct AppState<S> {
    /// Request orchestrator, shared by all handlers
    pub service: Arc<AnalysisService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze
    pub text: String,
}

/// Search query string
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Topic substring to match
    pub topic: Option<String>,
}

/// Response for a successful analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Record identifier
    pub id: RecordId,
    /// Insertion time
    pub created_date: DateTime<Utc>,
    /// One or two sentence summary
    pub summary: String,
    /// Optional title
    pub title: Option<String>,
    /// Exactly three topics
    pub topics: Vec<String>,
    /// Sentiment label
    pub sentiment: Option<String>,
    /// Extracted keywords, most frequent first
    pub keywords: Vec<String>,
}

impl From<AnalyzedRecord> for AnalyzeResponse {
    fn from(analyzed: AnalyzedRecord) -> Self {
        let record = analyzed.record;
        Self {
            id: record.id,
            created_date: record.created_date,
            summary: analyzed.summary,
            title: record.title,
            topics: record.topics,
            sentiment: record.sentiment,
            keywords: record.keywords,
        }
    }
}

/// A stored record as returned by search and listing
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Record identifier
    pub id: RecordId,
    /// Insertion time
    pub created_date: DateTime<Utc>,
    /// Optional title
    pub title: Option<String>,
    /// Topics in stored order
    pub topics: Vec<String>,
    /// Sentiment label
    pub sentiment: Option<String>,
    /// Keywords in rank order
    pub keywords: Vec<String>,
}

impl From<AnalysisRecord> for RecordResponse {
    fn from(record: AnalysisRecord) -> Self {
        Self {
            id: record.id,
            created_date: record.created_date,
            title: record.title,
            topics: record.topics,
            sentiment: record.sentiment,
            keywords: record.keywords,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Number of stored records, when the store is readable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Failure description, when it is not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
///
/// Every variant renders as an [`ErrorResponse`] body.
#[derive(Debug)]
pub enum AppError {
    /// Failure reported by the analysis service
    Service(ServiceError),
    /// Request body or query string could not be extracted
    Rejected {
        /// Status chosen by the extractor (400, 415 or 422)
        status: StatusCode,
        /// Extractor message, naming the offending field when there is one
        detail: String,
    },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Service(e) => {
                let status = match &e {
                    ServiceError::Validation(_) | ServiceError::Analysis(_) => StatusCode::BAD_REQUEST,
                    ServiceError::Unexpected { .. } => {
                        error!("{}", e);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, e.to_string())
            }
            AppError::Rejected { status, detail } => {
                debug!("Rejected request: {}", detail);
                (status, detail)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// POST /analyze - Analyze text and store the result
async fn analyze_text<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError>
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    let Json(request) = payload?;
    let analyzed = state.service.analyze(&request.text).await?;
    Ok(Json(analyzed.into()))
}

/// GET /search?topic= - Records with a matching topic
async fn search_records<S>(
    State(state): State<AppState<S>>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<RecordResponse>>, AppError>
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    let Query(params) = query?;
    let records = state.service.search(params.topic.as_deref()).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /records - Every stored record
async fn list_records<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<RecordResponse>>, AppError>
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    let records = state.service.list_records().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// GET /health - Store reachability
async fn health_check<S>(State(state): State<AppState<S>>) -> (StatusCode, Json<HealthResponse>)
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    match state.service.record_count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                records: Some(count),
                detail: None,
            }),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    records: None,
                    detail: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Create the axum router with all routes
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: RecordStore + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    Router::new()
        .route("/analyze", post(analyze_text::<S>))
        .route("/search", get(search_records::<S>))
        .route("/records", get(list_records::<S>))
        .route("/health", get(health_check::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
