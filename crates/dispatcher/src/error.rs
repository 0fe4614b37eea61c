//! Dispatch error taxonomy.

use thiserror::Error;

use qsync_qbusiness::QBusinessError;

/// Errors that abort an invocation before a summary can be produced.
///
/// Per-source start-sync failures are not errors at this level: they are
/// recorded as failed outcomes and the invocation still reports success.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The trigger payload is missing `application_id` or `index_id`.
    /// Reported before any external call is made.
    #[error("missing required parameters: application_id and index_id")]
    MissingParameters,

    /// The listing call itself failed; no partial output is returned.
    #[error("failed to list data sources: {0}")]
    Listing(#[from] QBusinessError),
}
