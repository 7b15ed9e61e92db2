//! Integration tests for error types and service-response mapping

mod common;

use cloud_logging_sdk_wrapper::{LoggingClient, LoggingConfiguration, LoggingError};
use common::*;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_error_is_not_found() {
    let missing = LoggingError::ApiError {
        status: 404,
        message: "Sink does not exist".to_string(),
    };
    assert!(missing.is_not_found());

    let conflict = LoggingError::ApiError {
        status: 409,
        message: "Sink already exists".to_string(),
    };
    assert!(!conflict.is_not_found());

    let poll = LoggingError::PollTimeout("test".to_string());
    assert!(!poll.is_not_found());
}

#[test]
fn test_error_is_auth_error() {
    let auth_error = LoggingError::AuthenticationError("token expired".to_string());
    assert!(auth_error.is_auth_error());

    let unauthorized = LoggingError::ApiError {
        status: 401,
        message: "Unauthorized".to_string(),
    };
    assert!(unauthorized.is_auth_error());

    let forbidden = LoggingError::ApiError {
        status: 403,
        message: "Forbidden".to_string(),
    };
    assert!(!forbidden.is_auth_error());

    let config_error = LoggingError::ConfigurationError("test".to_string());
    assert!(!config_error.is_auth_error());
}

#[test]
fn test_error_display() {
    let error = LoggingError::ConfigurationError("test error".to_string());
    let error_str = format!("{}", error);
    assert!(error_str.contains("Configuration error"));
    assert!(error_str.contains("test error"));
}

#[test]
fn test_api_error_display_carries_status() {
    let error = LoggingError::ApiError {
        status: 409,
        message: "Sink audit-sink already exists".to_string(),
    };

    assert_eq!(
        format!("{}", error),
        "API error (status 409): Sink audit-sink already exists"
    );
}

#[test]
fn test_poll_timeout_display() {
    let error = LoggingError::PollTimeout("condition not met after 5 attempts".to_string());

    assert_eq!(
        format!("{}", error),
        "Poll timeout: condition not met after 5 attempts"
    );
}

#[test]
fn test_error_clone() {
    let error = LoggingError::ConnectionError("test".to_string());
    let cloned = error.clone();
    assert!(matches!(cloned, LoggingError::ConnectionError(_)));
}

#[test]
fn test_all_error_variants() {
    let _config = LoggingError::ConfigurationError("config".to_string());
    let _auth = LoggingError::AuthenticationError("auth".to_string());
    let _conn = LoggingError::ConnectionError("conn".to_string());
    let _api = LoggingError::ApiError {
        status: 500,
        message: "api".to_string(),
    };
    let _serde = LoggingError::SerializationError("serde".to_string());
    let _poll = LoggingError::PollTimeout("poll".to_string());
    let _token = LoggingError::TokenRefreshError("token".to_string());
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_connection_error() {
    // Bind and drop a listener so the request hits a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = LoggingConfiguration::new(
        TEST_PROJECT.to_string(),
        TEST_BUCKET.to_string(),
        TEST_BUCKET_ALT.to_string(),
    )
    .with_endpoints(dead_endpoint.clone(), dead_endpoint);
    let client = LoggingClient::new(config).unwrap();

    let error = client.list_sinks().await.unwrap_err();

    assert!(matches!(error, LoggingError::ConnectionError(_)));
    assert!(error.to_string().contains("Request failed"));
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_serialization_error() {
    let (server, client) = client_against_stub().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/logging-test-project/sinks/audit-sink"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get_sink("audit-sink").await.unwrap_err();

    assert!(matches!(error, LoggingError::SerializationError(_)));
    assert!(error.to_string().contains("Failed to decode response body"));
}
