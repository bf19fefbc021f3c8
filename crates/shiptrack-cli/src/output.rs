//! JSON envelope printed for every lookup.
//!
//! ```json
//! {
//!   "meta": { "request_id": "...", "backend": "simulated", "generated_at": "...", "latency_ms": 0 },
//!   "query": { "tracking_id": "PKG123456789" },
//!   "data": { "packages": [ ... ] }
//! }
//! ```
//!
//! A failed lookup carries `error` instead of `data`.

use std::io::Write;

use serde::Serialize;
use shiptrack_core::{TrackingError, TrackingQuery, TrackingResult};

use crate::error::CliError;
use crate::metadata::Metadata;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub meta: Metadata,
    pub query: QueryEcho,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TrackingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Envelope {
    pub fn from_outcome(
        meta: Metadata,
        query: &TrackingQuery,
        outcome: Result<TrackingResult, TrackingError>,
    ) -> Self {
        let (data, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(ErrorBody::from(&error))),
        };
        Self {
            meta,
            query: QueryEcho::from(query),
            data,
            error,
        }
    }
}

/// The query exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryEcho {
    pub tracking_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
}

impl From<&TrackingQuery> for QueryEcho {
    fn from(query: &TrackingQuery) -> Self {
        Self {
            tracking_id: query.tracking_id.clone(),
            from_date: query.from_date.clone(),
            to_date: query.to_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub kind: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl From<&TrackingError> for ErrorBody {
    fn from(error: &TrackingError) -> Self {
        let kind = match error {
            TrackingError::Validation(inner) => inner.kind().as_str(),
            other => other.kind().as_str(),
        };
        Self {
            code: error.code(),
            kind,
            message: error.to_string(),
            retryable: error.retryable(),
        }
    }
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let rendered = to_json(value, pretty)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{rendered}")?;
    handle.flush()?;
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
