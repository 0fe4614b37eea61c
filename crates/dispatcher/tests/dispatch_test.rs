//! End-to-end dispatch tests against a mock Q Business API.
//!
//! Exercises the full invocation path (trigger validation, listing,
//! per-source sync starts, response envelope) without AWS access.

use std::sync::Arc;

use qsync_dispatcher::{SyncDispatcher, SyncResponse, TriggerEvent};
use qsync_qbusiness::client::mock::{MockQBusinessApi, StartBehavior};
use qsync_qbusiness::DataSourceSummary;

fn source(id: &str, name: &str) -> DataSourceSummary {
    DataSourceSummary {
        data_source_id: id.to_string(),
        display_name: name.to_string(),
    }
}

fn trigger(application_id: &str, index_id: &str) -> TriggerEvent {
    TriggerEvent {
        application_id: Some(application_id.to_string()),
        index_id: Some(index_id.to_string()),
    }
}

async fn respond(api: &Arc<MockQBusinessApi>, trigger: &TriggerEvent) -> serde_json::Value {
    let dispatcher = SyncDispatcher::new(api.clone());
    let response = SyncResponse::from(dispatcher.dispatch(trigger).await);
    serde_json::to_value(response).unwrap()
}

// ── Success path ─────────────────────────────────────────────────────

#[tokio::test]
async fn partial_failure_scenario() {
    let api = Arc::new(MockQBusinessApi::listing(vec![
        source("ds-1", "Blood Bank A"),
        source("ds-2", "Blood Bank B"),
    ]));
    api.set_start_behavior("ds-1", StartBehavior::Succeed("exec-1".into()));
    api.set_start_behavior("ds-2", StartBehavior::Fail("timeout".into()));

    let json = respond(&api, &trigger("app-1", "idx-1")).await;

    assert_eq!(json["statusCode"], 200);
    let body = &json["body"];
    assert_eq!(body["syncJobsStarted"], 1);
    assert_eq!(body["syncJobsFailed"], 1);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Scheduled sync completed at "));

    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);

    assert_eq!(details[0]["dataSourceId"], "ds-1");
    assert_eq!(details[0]["displayName"], "Blood Bank A");
    assert_eq!(details[0]["executionId"], "exec-1");
    assert_eq!(details[0]["status"], "started");
    assert!(details[0].get("error").is_none());

    assert_eq!(details[1]["dataSourceId"], "ds-2");
    assert_eq!(details[1]["displayName"], "Blood Bank B");
    assert_eq!(details[1]["status"], "failed");
    assert!(details[1]["error"].as_str().unwrap().contains("timeout"));
    assert!(details[1].get("executionId").is_none());
}

#[tokio::test]
async fn details_match_listing_order_and_count() {
    let sources: Vec<DataSourceSummary> = (1..=5)
        .map(|i| source(&format!("ds-{i}"), &format!("Source {i}")))
        .collect();
    let api = Arc::new(MockQBusinessApi::listing(sources));
    api.set_start_behavior("ds-4", StartBehavior::Fail("denied".into()));

    let json = respond(&api, &trigger("app-1", "idx-1")).await;

    let body = &json["body"];
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 5);

    let ids: Vec<&str> = details
        .iter()
        .map(|d| d["dataSourceId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ds-1", "ds-2", "ds-3", "ds-4", "ds-5"]);

    let started = body["syncJobsStarted"].as_u64().unwrap();
    let failed = body["syncJobsFailed"].as_u64().unwrap();
    assert_eq!(started + failed, 5);
    assert_eq!(failed, 1);
    assert_eq!(api.start_call_count(), 5);
}

#[tokio::test]
async fn empty_listing_reports_zero_jobs() {
    let api = Arc::new(MockQBusinessApi::listing(Vec::new()));

    let json = respond(&api, &trigger("app-1", "idx-1")).await;

    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["body"]["syncJobsStarted"], 0);
    assert_eq!(json["body"]["syncJobsFailed"], 0);
    assert!(json["body"]["details"].as_array().unwrap().is_empty());
    assert_eq!(api.start_call_count(), 0);
}

// ── Client errors ────────────────────────────────────────────────────

#[tokio::test]
async fn empty_input_is_client_error_with_no_side_effects() {
    let api = Arc::new(MockQBusinessApi::listing(vec![source("ds-1", "A")]));
    let empty: TriggerEvent = serde_json::from_str("{}").unwrap();

    let json = respond(&api, &empty).await;

    assert_eq!(json["statusCode"], 400);
    assert_eq!(json["body"]["error"], "Missing required parameters");
    assert!(json["body"].get("details").is_none());
    assert_eq!(api.list_call_count(), 0);
    assert_eq!(api.start_call_count(), 0);
}

#[tokio::test]
async fn any_missing_id_is_a_client_error() {
    let payloads = [
        r#"{"application_id": "app-1"}"#,
        r#"{"index_id": "idx-1"}"#,
        r#"{"application_id": "", "index_id": "idx-1"}"#,
        r#"{"application_id": null, "index_id": "idx-1"}"#,
    ];

    for payload in payloads {
        let api = Arc::new(MockQBusinessApi::listing(vec![source("ds-1", "A")]));
        let event: TriggerEvent = serde_json::from_str(payload).unwrap();

        let json = respond(&api, &event).await;

        assert_eq!(json["statusCode"], 400, "payload: {payload}");
        assert_eq!(api.list_call_count(), 0, "payload: {payload}");
    }
}

// ── Server errors ────────────────────────────────────────────────────

#[tokio::test]
async fn listing_failure_is_server_error_without_partial_output() {
    let api = Arc::new(MockQBusinessApi::listing_error("unreachable"));

    let json = respond(&api, &trigger("app-1", "idx-1")).await;

    assert_eq!(json["statusCode"], 500);
    assert_eq!(json["body"]["error"], "Scheduled sync failed");
    // `details` is the error text here, never a partial outcome array.
    let details = json["body"]["details"].as_str().unwrap();
    assert!(details.contains("unreachable"));
    assert!(json["body"].get("syncJobsStarted").is_none());
    assert_eq!(api.start_call_count(), 0);
}
