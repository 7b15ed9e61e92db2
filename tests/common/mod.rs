//! Common test utilities
//!
//! Shared infrastructure for the integration tests: a stub server standing
//! in for the logging and storage services, plus service-shaped response
//! fixtures. Each test binary compiles this module separately, so not every
//! helper is used by every binary.
#![allow(dead_code)]

use cloud_logging_sdk_wrapper::{LoggingClient, LoggingConfiguration};
use serde_json::json;
use wiremock::MockServer;

/// Project identifier used by the stub-server tests
pub const TEST_PROJECT: &str = "logging-test-project";
/// Initial sink destination bucket
pub const TEST_BUCKET: &str = "logging-test-bucket";
/// Bucket the sink destination is moved to
pub const TEST_BUCKET_ALT: &str = "logging-test-bucket-alt";

/// Create a test configuration with both endpoints pointed at the stub server
///
/// Polling is tightened to 5 attempts at 50ms so consistency tests finish
/// quickly.
pub fn test_config(server: &MockServer) -> LoggingConfiguration {
    LoggingConfiguration::new(
        TEST_PROJECT.to_string(),
        TEST_BUCKET.to_string(),
        TEST_BUCKET_ALT.to_string(),
    )
    .with_endpoints(server.uri(), server.uri())
    .with_poll_config(5, 50)
}

/// Start a stub server and a client wired to it
pub async fn client_against_stub() -> (MockServer, LoggingClient) {
    let server = MockServer::start().await;
    let client = LoggingClient::new(test_config(&server)).expect("test configuration is valid");
    (server, client)
}

/// Sink response body the way the service shapes it
pub fn sink_body(name: &str, destination: &str, filter: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "name": name,
        "destination": destination,
        "writerIdentity": format!("serviceAccount:{}@gcp-sa-logging.iam.gserviceaccount.com", name),
        "createTime": "2026-08-25T09:00:00Z",
    });
    if let Some(filter) = filter {
        body["filter"] = json!(filter);
    }
    body
}

/// Text entry response body the way the service shapes it
pub fn entry_body(log_name: &str, severity: &str, text: &str) -> serde_json::Value {
    json!({
        "logName": log_name,
        "resource": {"type": "global"},
        "textPayload": text,
        "severity": severity,
        "timestamp": "2026-08-25T09:00:00Z",
        "insertId": format!("id-{:08x}", text.len()),
    })
}

/// Error envelope the way the service shapes it
pub fn error_body(code: u16, status: &str, message: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status,
        }
    })
}

/// Decode the JSON body of a recorded stub-server request
pub fn request_json(request: &wiremock::Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("recorded request body is JSON")
}
