//! Wire types for the summarisation service and the reading of its replies.
//!
//! The service speaks plain JSON: `{"video_id": ...}` goes out, and either
//! `{"summary": ..., "chunks": [...]}` or `{"error": ...}` comes back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Shown when the service reports a failure without an `error` field.
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Why a summarisation cycle ended without a summary.
///
/// `Display` is exactly the text placed in the result region.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// The service answered with a failure status and (maybe) a reason.
    #[error("{0}")]
    Service(String),
    /// The call failed, or its body was not a JSON object.
    #[error("Error: {0}")]
    TransportOrParse(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportOrParse(err.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::TransportOrParse(err.to_string())
    }
}

/// Body of the outbound POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub video_id: String,
}

impl SummarizeRequest {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
        }
    }
}

/// Status and body text of a reply, before any JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    pub status: u16,
    pub body: String,
}

impl ServiceReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A summary as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Final summary text, taken verbatim from the `summary` field
    pub text: String,
    /// Per-chunk summaries, when the service sends them
    pub chunks: Vec<String>,
}

/// Turn a raw reply into a summary or the error to display.
///
/// The body is parsed before the status is looked at, so a failure status with
/// a body that is not a JSON object surfaces as a parse error.
pub fn interpret(reply: &ServiceReply) -> Result<Summary, SummarizeError> {
    let body: Map<String, Value> = serde_json::from_str(&reply.body)?;

    if !reply.is_success() {
        return Err(SummarizeError::Service(failure_reason(body.get("error"))));
    }

    let chunks = match body.get("chunks") {
        Some(Value::Array(items)) => items.iter().map(|v| display_text(Some(v))).collect(),
        _ => Vec::new(),
    };

    Ok(Summary {
        text: display_text(body.get("summary")),
        chunks,
    })
}

fn failure_reason(error: Option<&Value>) -> String {
    match error {
        Some(value) if !is_falsy(value) => display_text(Some(value)),
        _ => FALLBACK_ERROR.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Render a JSON field as display text: strings as-is, absent or null as empty.
fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
