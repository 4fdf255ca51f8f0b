//! Parse LLM output into an analysis result

use crate::error::AnalysisError;
use jouster_domain::{AnalysisResult, Sentiment};
use serde::Deserialize;
use tracing::{debug, error, warn};

/// Loosely-typed view of the object the model is asked to produce
///
/// Absent fields take defaults. Only `title` may be `null`; a `null` summary,
/// topic list or sentiment fails to decode.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default = "default_sentiment")]
    sentiment: String,
}

fn default_sentiment() -> String {
    Sentiment::Neutral.as_str().to_string()
}

impl From<RawAnalysis> for AnalysisResult {
    fn from(raw: RawAnalysis) -> Self {
        AnalysisResult::new(raw.summary, raw.title, raw.topics, raw.sentiment)
    }
}

/// Locate the candidate JSON object inside free-form model output
///
/// The span runs from the first `{` to the last `}` inclusive. Models often
/// wrap the object in prose or markdown fences, so nothing outside the span
/// is inspected. Returns `None` when either brace is missing or the last `}`
/// precedes the first `{`.
pub fn extract_json_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Turn raw model output into a normalized [`AnalysisResult`]
///
/// - No JSON span: the placeholder result is returned (not an error)
/// - Span that is not a decodable object: [`AnalysisError::MalformedJson`]
/// - A `null` summary, topic list or sentiment: [`AnalysisError::MalformedJson`]
/// - Otherwise missing fields take defaults and topics are cut or padded to three
pub fn normalize_response(reply: &str) -> Result<AnalysisResult, AnalysisError> {
    let Some(span) = extract_json_span(reply) else {
        warn!("No JSON object in model reply; returning placeholder analysis");
        return Ok(AnalysisResult::placeholder());
    };

    let raw: RawAnalysis = serde_json::from_str(span).map_err(|e| {
        error!("Error parsing model reply: {} - {}", e, span);
        AnalysisError::MalformedJson(e)
    })?;

    let result = AnalysisResult::from(raw);
    if result.sentiment_label().is_none() {
        debug!("Keeping unconventional sentiment label {:?}", result.sentiment);
    }
    Ok(result)
}
