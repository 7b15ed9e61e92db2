//! HTTP response handling
//!
//! This module translates service responses into wrapper errors: the
//! service's JSON error envelope when present, the HTTP status line
//! otherwise. All operations funnel their responses through here.

use crate::error::LoggingError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

/// Service error envelope: `{"error": {"code": ..., "message": ..., "status": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<u16>,
    message: Option<String>,
    #[allow(dead_code)]
    status: Option<String>,
}

/// Translate a non-success response into a `LoggingError`
///
/// A 401 becomes `AuthenticationError`; everything else becomes `ApiError`
/// with the envelope message when the body carries one.
pub(crate) async fn error_from_response(response: reqwest::Response) -> LoggingError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                body.clone()
            }
        });

    warn!("Request failed with status {}: {}", status, message);

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return LoggingError::AuthenticationError(message);
    }

    LoggingError::ApiError {
        status: status.as_u16(),
        message,
    }
}

/// Decode a successful response body as JSON
///
/// # Errors
///
/// Returns the translated service error for non-success statuses, or
/// `SerializationError` if the body does not match the expected shape.
pub(crate) async fn read_json<T>(response: reqwest::Response) -> Result<T, LoggingError>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response.json::<T>().await.map_err(|e| {
        LoggingError::SerializationError(format!("Failed to decode response body: {}", e))
    })
}

/// Check a response for success, discarding the body
///
/// # Errors
///
/// Returns the translated service error for non-success statuses.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<(), LoggingError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
