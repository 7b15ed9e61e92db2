//! Error types for the Cloud Logging SDK Wrapper
//!
//! This module defines all error types used throughout the wrapper,
//! providing clear, actionable error messages for developers.

use thiserror::Error;

/// Error type for wrapper operations
///
/// All errors are descriptive and actionable, providing sufficient
/// information for developers to diagnose and resolve issues.
#[derive(Debug, Clone, Error)]
pub enum LoggingError {
    /// Invalid configuration error
    ///
    /// Occurs when configuration values are invalid or missing required fields.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Authentication failure error
    ///
    /// Occurs when the logging service rejects the request credentials
    /// (missing token, expired token, insufficient permissions).
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Network/connection error
    ///
    /// Occurs when the HTTP request cannot reach the service at all
    /// (DNS failure, refused connection, request timeout).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Service-side request failure
    ///
    /// Occurs when the service answers with a non-success status. Carries the
    /// HTTP status code and the message from the service's error envelope.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code returned by the service
        status: u16,
        /// Message from the service's error envelope, or the status line
        message: String,
    },

    /// Request/response body serialization failure
    ///
    /// Occurs when a request body cannot be encoded or a response body
    /// cannot be decoded as the expected JSON shape.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Bounded polling exhausted
    ///
    /// Occurs when a polled condition was still false after the configured
    /// number of attempts.
    #[error("Poll timeout: {0}")]
    PollTimeout(String),

    /// Token refresh failure
    ///
    /// Occurs when the OAuth2 token fetch fails.
    #[error("Token refresh error: {0}")]
    TokenRefreshError(String),
}

impl LoggingError {
    /// Check if the error is the service reporting a missing resource
    ///
    /// Returns true for an `ApiError` with HTTP status 404. Used by callers
    /// that probe for deleted sinks.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoggingError::ApiError { status: 404, .. })
    }

    /// Check if the error indicates rejected or expired credentials
    ///
    /// Returns true for `AuthenticationError` and for an `ApiError` with
    /// HTTP status 401.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            LoggingError::AuthenticationError(_) | LoggingError::ApiError { status: 401, .. }
        )
    }
}
