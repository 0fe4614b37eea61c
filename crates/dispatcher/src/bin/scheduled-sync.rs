//! scheduled-sync: Lambda entry point for the daily data source sync.
//!
//! Invoked by an EventBridge schedule (intended: daily at 2 PM EST) with
//! `{"application_id": ..., "index_id": ...}`. Lists the data sources
//! registered to that application/index, starts a sync job for each, and
//! returns a `{statusCode, body}` summary. The invocation itself never
//! fails: validation and listing errors come back as 400/500 envelopes.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::info;

use qsync_dispatcher::{SyncDispatcher, SyncResponse, TriggerEvent};
use qsync_qbusiness::{QBusinessClient, QBusinessConfig};

async fn handle(
    event: LambdaEvent<TriggerEvent>,
    dispatcher: &SyncDispatcher,
) -> Result<SyncResponse, Error> {
    let response = SyncResponse::from(dispatcher.dispatch(&event.payload).await);
    info!(status_code = response.status_code, "invocation finished");
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = QBusinessConfig::from_env();
    let client = Arc::new(QBusinessClient::new(&config).await);
    let dispatcher = SyncDispatcher::new(client);
    let dispatcher = &dispatcher;

    info!("scheduled-sync starting");
    lambda_runtime::run(service_fn(move |event: LambdaEvent<TriggerEvent>| {
        async move { handle(event, dispatcher).await }
    }))
    .await?;

    Ok(())
}
