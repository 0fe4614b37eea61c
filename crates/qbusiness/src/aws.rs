//! AWS SDK implementation of the Q Business API.
//!
//! Wraps [`aws_sdk_qbusiness::Client`] behind [`QBusinessApi`], mapping SDK
//! errors to opaque strings and absent response fields to
//! [`QBusinessError::MalformedResponse`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_qbusiness::operation::start_data_source_sync_job::StartDataSourceSyncJobOutput;
use aws_sdk_qbusiness::types::DataSource;
use tracing::{debug, info};

use crate::client::{DataSourceSummary, QBusinessApi};
use crate::config::QBusinessConfig;
use crate::error::QBusinessError;

/// AWS-backed implementation of [`QBusinessApi`].
pub struct QBusinessClient {
    client: aws_sdk_qbusiness::Client,
}

impl QBusinessClient {
    /// Create a new client from the given configuration.
    ///
    /// The SDK config is loaded from the default provider chain with the
    /// region taken from `config`. Static credentials and the endpoint
    /// override are applied on top when present (local dev / explicit
    /// config); in a deployed function the provider chain supplies the
    /// execution role credentials.
    pub async fn new(config: &QBusinessConfig) -> Self {
        let region = aws_sdk_qbusiness::config::Region::new(config.region.clone());
        let aws_cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut builder = aws_sdk_qbusiness::config::Builder::from(&aws_cfg);

        if let Some((key_id, secret)) = config.static_credentials() {
            let creds = Credentials::new(
                key_id,
                secret,
                config.session_token.clone(),
                None,
                "qsync-static",
            );
            builder = builder.credentials_provider(creds);
        }

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        let client = aws_sdk_qbusiness::Client::from_conf(builder.build());

        info!(region = %config.region, "Q Business client initialised");

        Self { client }
    }

    /// Map one listing item into a [`DataSourceSummary`].
    ///
    /// An item without an id is a malformed response. The service may omit
    /// the display name; it is mirrored as a placeholder rather than
    /// failing the listing.
    fn summarize(ds: &DataSource) -> Result<DataSourceSummary, QBusinessError> {
        let data_source_id = ds
            .data_source_id()
            .ok_or_else(|| {
                QBusinessError::MalformedResponse(
                    "data source without an id in listing".into(),
                )
            })?
            .to_string();

        Ok(DataSourceSummary {
            data_source_id,
            display_name: ds.display_name().unwrap_or("Unknown").to_string(),
        })
    }

    /// Extract the execution id from a start-sync response.
    fn require_execution_id(
        output: &StartDataSourceSyncJobOutput,
    ) -> Result<String, QBusinessError> {
        output
            .execution_id()
            .map(|id| id.to_string())
            .ok_or_else(|| {
                QBusinessError::MalformedResponse("no execution id in response".into())
            })
    }
}

#[async_trait]
impl QBusinessApi for QBusinessClient {
    async fn list_data_sources(
        &self,
        application_id: &str,
        index_id: &str,
    ) -> Result<Vec<DataSourceSummary>, QBusinessError> {
        debug!(application_id, index_id, "listing data sources");

        let resp = self
            .client
            .list_data_sources()
            .application_id(application_id)
            .index_id(index_id)
            .send()
            .await
            .map_err(|e| QBusinessError::Sdk(e.to_string()))?;

        let sources = resp
            .data_sources()
            .iter()
            .map(Self::summarize)
            .collect::<Result<Vec<_>, QBusinessError>>()?;

        debug!(count = sources.len(), "listed data sources");
        Ok(sources)
    }

    async fn start_sync_job(
        &self,
        application_id: &str,
        data_source_id: &str,
        index_id: &str,
    ) -> Result<String, QBusinessError> {
        debug!(application_id, data_source_id, index_id, "starting sync job");

        let resp = self
            .client
            .start_data_source_sync_job()
            .application_id(application_id)
            .data_source_id(data_source_id)
            .index_id(index_id)
            .send()
            .await
            .map_err(|e| QBusinessError::Sdk(e.to_string()))?;

        Self::require_execution_id(&resp)
    }
}

// ---------------------------------------------------------------------------
// Tests: response mapping only, no AWS calls
// ---------------------------------------------------------------------------
