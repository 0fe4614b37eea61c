//! The per-source sync dispatch loop.
//!
//! Validates the trigger, lists the registered data sources once, then
//! walks the list starting one sync job per source. Individual start
//! failures are recorded and do not abort the remaining sources; only a
//! failed listing aborts the invocation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use qsync_qbusiness::QBusinessApi;

use crate::error::DispatchError;
use crate::outcome::{SyncOutcome, SyncReport};
use crate::trigger::TriggerEvent;

/// Starts a sync job for every data source of an application index.
///
/// Holds the API client as a passed-in object so tests can substitute a
/// fake implementing the same {list, start-sync} capability pair.
pub struct SyncDispatcher {
    client: Arc<dyn QBusinessApi>,
}

impl SyncDispatcher {
    /// Create a dispatcher around the given API client.
    pub fn new(client: Arc<dyn QBusinessApi>) -> Self {
        Self { client }
    }

    /// Run one scheduled invocation end to end.
    ///
    /// Returns the summary on success. An error means no summary could be
    /// produced: the trigger was invalid (no external call is made in that
    /// case) or the listing call failed.
    pub async fn dispatch(&self, trigger: &TriggerEvent) -> Result<SyncReport, DispatchError> {
        let (application_id, index_id) = match trigger.require() {
            Ok(ids) => ids,
            Err(e) => {
                error!("missing required parameters: application_id and index_id");
                return Err(e);
            }
        };

        info!(application_id, index_id, "scheduled sync triggered");

        let sources = self
            .client
            .list_data_sources(application_id, index_id)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to list data sources");
                DispatchError::Listing(e)
            })?;

        let mut outcomes = Vec::with_capacity(sources.len());

        for source in &sources {
            let result = self
                .client
                .start_sync_job(application_id, &source.data_source_id, index_id)
                .await;

            let outcome = match result {
                Ok(execution_id) => {
                    info!(
                        data_source_id = %source.data_source_id,
                        display_name = %source.display_name,
                        execution_id = %execution_id,
                        "started sync job"
                    );
                    SyncOutcome::started(source, execution_id)
                }
                Err(e) => {
                    error!(
                        data_source_id = %source.data_source_id,
                        display_name = %source.display_name,
                        error = %e,
                        "failed to start sync job"
                    );
                    SyncOutcome::failed(source, e.to_string())
                }
            };

            outcomes.push(outcome);
        }

        let report = SyncReport::new(outcomes, Utc::now());
        info!(
            started = report.sync_jobs_started,
            failed = report.sync_jobs_failed,
            "scheduled sync completed"
        );

        Ok(report)
    }
}

// ── Tests ────────────────────────────────────────────────────────
