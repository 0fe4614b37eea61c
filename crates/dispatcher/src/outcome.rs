//! Per-source outcomes and the invocation summary.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use qsync_qbusiness::DataSourceSummary;

/// Terminal state of one start-sync attempt. There is no retry within an
/// invocation, so the status never changes after the outcome is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Started,
    Failed,
}

/// Outcome of one start-sync attempt.
///
/// Started outcomes carry the execution id of the remote job; failed
/// outcomes carry the error's string representation. The unused field is
/// omitted from the serialized form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub data_source_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    pub status: SyncStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncOutcome {
    /// A sync job was started for `source`.
    pub fn started(source: &DataSourceSummary, execution_id: String) -> Self {
        Self {
            data_source_id: source.data_source_id.clone(),
            display_name: source.display_name.clone(),
            execution_id: Some(execution_id),
            status: SyncStatus::Started,
            error: None,
        }
    }

    /// Starting a sync job for `source` failed.
    pub fn failed(source: &DataSourceSummary, error: String) -> Self {
        Self {
            data_source_id: source.data_source_id.clone(),
            display_name: source.display_name.clone(),
            execution_id: None,
            status: SyncStatus::Failed,
            error: Some(error),
        }
    }
}

/// Invocation summary returned on success, serialized as the 200 body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Completion message embedding the UTC ISO-8601 timestamp.
    pub message: String,
    pub sync_jobs_started: usize,
    pub sync_jobs_failed: usize,
    /// One outcome per listed data source, in listing order.
    pub details: Vec<SyncOutcome>,
}

impl SyncReport {
    /// Build the summary from the collected outcomes.
    ///
    /// Counts are computed by filtering `details` on status, so
    /// `sync_jobs_started + sync_jobs_failed == details.len()` holds by
    /// construction.
    pub fn new(details: Vec<SyncOutcome>, completed_at: DateTime<Utc>) -> Self {
        let sync_jobs_started = details
            .iter()
            .filter(|o| o.status == SyncStatus::Started)
            .count();
        let sync_jobs_failed = details
            .iter()
            .filter(|o| o.status == SyncStatus::Failed)
            .count();

        Self {
            message: format!(
                "Scheduled sync completed at {}",
                completed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            sync_jobs_started,
            sync_jobs_failed,
            details,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────
