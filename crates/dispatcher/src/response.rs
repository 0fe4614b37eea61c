//! The invocation response envelope.
//!
//! Every invocation produces exactly one `{statusCode, body}` object.
//! Dispatch failures are encoded here rather than surfaced as invocation
//! errors, so the scheduler always sees a well-formed result.

use serde::Serialize;

use crate::error::DispatchError;
use crate::outcome::SyncReport;

/// Fixed message on the 400 body.
const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Fixed outer message on the 500 body; the cause goes in `details`.
const SYNC_FAILED: &str = "Scheduled sync failed";

/// Error body carried on 400 and 500 responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body of the response envelope: a summary on 200, an error otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Report(SyncReport),
    Error(ErrorBody),
}

/// The `{statusCode, body}` envelope returned to the invoker.
#[derive(Debug, Clone, Serialize)]
pub struct SyncResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: ResponseBody,
}

impl SyncResponse {
    /// Successful invocation summary (individual per-source failures are
    /// inside the report, not an overall failure).
    pub fn completed(report: SyncReport) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Report(report),
        }
    }

    /// Client error: required trigger fields were missing.
    pub fn bad_request() -> Self {
        Self {
            status_code: 400,
            body: ResponseBody::Error(ErrorBody {
                error: MISSING_PARAMETERS.to_string(),
                details: None,
            }),
        }
    }

    /// Server error: no summary could be produced.
    pub fn failed(details: String) -> Self {
        Self {
            status_code: 500,
            body: ResponseBody::Error(ErrorBody {
                error: SYNC_FAILED.to_string(),
                details: Some(details),
            }),
        }
    }
}

impl From<Result<SyncReport, DispatchError>> for SyncResponse {
    fn from(result: Result<SyncReport, DispatchError>) -> Self {
        match result {
            Ok(report) => SyncResponse::completed(report),
            Err(DispatchError::MissingParameters) => SyncResponse::bad_request(),
            // The 500 details carry the underlying error text, not the
            // dispatch-level wrapping.
            Err(DispatchError::Listing(e)) => SyncResponse::failed(e.to_string()),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────
