//! Q Business API trait and shared types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::QBusinessError;

/// A data source registered to an application index.
///
/// Built from the listing call and read-only from this crate's point of
/// view; the service owns the connector inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceSummary {
    /// Connector identifier within the index.
    pub data_source_id: String,
    /// Human-readable connector name (`"Unknown"` when the service omits it).
    pub display_name: String,
}

/// Trait for the slice of the Q Business admin API this project consumes:
/// listing the data sources of an index and starting sync jobs for them.
///
/// The dispatcher takes this as a passed-in object so tests can substitute
/// a fake for the AWS-backed client. Service-side failures are opaque;
/// callers only log or report the error's string representation.
#[async_trait]
pub trait QBusinessApi: Send + Sync {
    /// List all data sources registered to `application_id`/`index_id`.
    ///
    /// One listing call; results come back in service order.
    async fn list_data_sources(
        &self,
        application_id: &str,
        index_id: &str,
    ) -> Result<Vec<DataSourceSummary>, QBusinessError>;

    /// Start a sync job for one data source and return its execution id.
    async fn start_sync_job(
        &self,
        application_id: &str,
        data_source_id: &str,
        index_id: &str,
    ) -> Result<String, QBusinessError>;
}

/// Mock Q Business API for exercising dispatch logic without AWS calls.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// What [`MockQBusinessApi::start_sync_job`] does for one data source.
    #[derive(Debug, Clone)]
    pub enum StartBehavior {
        /// Succeed with this execution id.
        Succeed(String),
        /// Fail with an SDK error carrying this message.
        Fail(String),
    }

    /// A mock API with a programmable listing result and per-data-source
    /// start-sync behaviors. Records call counts so tests can assert that
    /// validation failures make zero external calls.
    pub struct MockQBusinessApi {
        listing: Result<Vec<DataSourceSummary>, String>,
        start_behaviors: Mutex<HashMap<String, StartBehavior>>,
        list_calls: AtomicUsize,
        start_calls: AtomicUsize,
    }

    impl MockQBusinessApi {
        /// Mock that lists the given sources; start calls succeed with
        /// `"exec-<data_source_id>"` unless overridden.
        pub fn listing(sources: Vec<DataSourceSummary>) -> Self {
            Self {
                listing: Ok(sources),
                start_behaviors: Mutex::new(HashMap::new()),
                list_calls: AtomicUsize::new(0),
                start_calls: AtomicUsize::new(0),
            }
        }

        /// Mock whose listing call fails with an SDK error.
        pub fn listing_error(message: &str) -> Self {
            Self {
                listing: Err(message.to_string()),
                start_behaviors: Mutex::new(HashMap::new()),
                list_calls: AtomicUsize::new(0),
                start_calls: AtomicUsize::new(0),
            }
        }

        /// Override the start-sync behavior for one data source.
        pub fn set_start_behavior(&self, data_source_id: &str, behavior: StartBehavior) {
            self.start_behaviors
                .lock()
                .unwrap()
                .insert(data_source_id.to_string(), behavior);
        }

        /// How many times the listing call was made.
        pub fn list_call_count(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        /// How many times a start-sync call was made.
        pub fn start_call_count(&self) -> usize {
            self.start_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QBusinessApi for MockQBusinessApi {
        async fn list_data_sources(
            &self,
            _application_id: &str,
            _index_id: &str,
        ) -> Result<Vec<DataSourceSummary>, QBusinessError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.listing {
                Ok(sources) => Ok(sources.clone()),
                Err(message) => Err(QBusinessError::Sdk(message.clone())),
            }
        }

        async fn start_sync_job(
            &self,
            _application_id: &str,
            data_source_id: &str,
            _index_id: &str,
        ) -> Result<String, QBusinessError> {
            self.start_calls.fetch_add(1, Ordering::SeqCst);
            let behavior = self.start_behaviors.lock().unwrap().get(data_source_id).cloned();
            match behavior {
                Some(StartBehavior::Succeed(execution_id)) => Ok(execution_id),
                Some(StartBehavior::Fail(message)) => Err(QBusinessError::Sdk(message)),
                None => Ok(format!("exec-{data_source_id}")),
            }
        }
    }
}
