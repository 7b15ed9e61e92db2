//! Integration tests for entry write and list operations

mod common;

use cloud_logging_sdk_wrapper::{LogEntry, LoggingError, MonitoredResource, Severity};
use common::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_write_entry_posts_service_shape() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:write"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let entry = LogEntry::text("deploy finished")
        .with_severity(Severity::Notice)
        .with_log_name(&client.log_path("deploys"))
        .with_resource(MonitoredResource::global());
    client.write_entry(entry).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = request_json(&requests[0]);
    let entries = body["entries"].as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["textPayload"], "deploy finished");
    assert_eq!(entries[0]["severity"], "NOTICE");
    assert_eq!(
        entries[0]["logName"],
        "projects/logging-test-project/logs/deploys"
    );
    assert_eq!(entries[0]["resource"]["type"], "global");
}

#[tokio::test]
async fn test_write_entries_sends_one_batch() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:write"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let log_name = client.log_path("batch");
    let entries: Vec<LogEntry> = (0..3)
        .map(|i| {
            LogEntry::json(json!({"step": i}))
                .with_severity(Severity::Info)
                .with_log_name(&log_name)
        })
        .collect();
    client.write_entries(&entries).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body = request_json(&requests[0]);
    let sent = body["entries"].as_array().unwrap();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2]["jsonPayload"]["step"], 2);
}

#[tokio::test]
async fn test_write_entry_rejection_maps_to_api_error() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:write"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            400,
            "INVALID_ARGUMENT",
            "Log entry must contain a payload",
        )))
        .mount(&server)
        .await;

    let error = client
        .write_entry(LogEntry::text("").with_log_name(&client.log_path("bad")))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        LoggingError::ApiError { status: 400, .. }
    ));
}

#[tokio::test]
async fn test_list_entries_scopes_filter_and_order() {
    let (server, client) = client_against_stub().await;
    let log_name = client.log_path("app");

    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .and(body_partial_json(json!({
            "resourceNames": ["projects/logging-test-project"],
            "filter": format!("logName=\"{}\"", log_name),
            "orderBy": "timestamp desc",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [entry_body(&log_name, "WARNING", "disk almost full")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client
        .list_entries(&format!("logName=\"{}\"", log_name), "timestamp desc")
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Warning);
    assert_eq!(entries[0].text_payload.as_deref(), Some("disk almost full"));
    assert!(entries[0].timestamp.is_some());
    assert!(entries[0].insert_id.is_some());
}

#[tokio::test]
async fn test_list_entries_omits_empty_filter_and_order() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entries": []})))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client.list_entries("", "").await.unwrap();
    assert!(entries.is_empty());

    let requests = server.received_requests().await.unwrap();
    let body = request_json(&requests[0]);
    assert!(body.get("filter").is_none());
    assert!(body.get("orderBy").is_none());
}

#[tokio::test]
async fn test_list_entries_follows_continuation_tokens() {
    let (server, client) = client_against_stub().await;
    let log_name = client.log_path("app");

    // Mount the continuation page first so the unconstrained first-page mock
    // does not swallow the tokened request
    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .and(body_partial_json(json!({"pageToken": "page-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [entry_body(&log_name, "INFO", "second page")],
        })))
        .expect(1)
        .named("second page")
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [entry_body(&log_name, "INFO", "first page")],
            "nextPageToken": "page-2",
        })))
        .expect(1)
        .named("first page")
        .mount(&server)
        .await;

    let entries = client.list_entries("", "").await.unwrap();

    let payloads: Vec<&str> = entries
        .iter()
        .filter_map(|e| e.text_payload.as_deref())
        .collect();
    assert_eq!(payloads, vec!["first page", "second page"]);
}

#[tokio::test]
async fn test_recent_write_becomes_visible_through_polling() {
    let (server, client) = client_against_stub().await;
    let log_name = client.log_path("app");

    Mock::given(method("POST"))
        .and(path("/v2/entries:write"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    // The first two listings see nothing, as a fresh write would
    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entries": []})))
        .up_to_n_times(2)
        .named("listing before propagation")
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [entry_body(&log_name, "INFO", "finally visible")],
        })))
        .named("listing after propagation")
        .mount(&server)
        .await;

    client
        .write_entry(
            LogEntry::text("finally visible")
                .with_severity(Severity::Info)
                .with_log_name(&log_name),
        )
        .await
        .unwrap();

    let poll_client = client.clone();
    let (result, attempts) = client
        .poll_config()
        .poll_until_tracked(move || {
            let client = poll_client.clone();
            async move {
                match client.list_entries("", "").await {
                    Ok(entries) => !entries.is_empty(),
                    Err(_) => false,
                }
            }
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(attempts, 3);
}

#[tokio::test]
async fn test_entry_never_visible_times_out() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entries": []})))
        .mount(&server)
        .await;

    let poll_client = client.clone();
    let result = client
        .poll_config()
        .poll_until(move || {
            let client = poll_client.clone();
            async move {
                match client.list_entries("", "").await {
                    Ok(entries) => !entries.is_empty(),
                    Err(_) => false,
                }
            }
        })
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, LoggingError::PollTimeout(_)));
    assert!(error.to_string().contains("after 5 attempts"));
}
