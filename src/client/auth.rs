//! Authentication and token refresh
//!
//! This module handles fetching bearer tokens for the logging and storage
//! services via the OAuth2 client credentials flow.

use crate::error::LoggingError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// OAuth2 token response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    pub(crate) token_type: Option<String>,
    pub(crate) expires_in: Option<u64>,
    pub(crate) scope: Option<String>,
}

/// Fetch a bearer token using the OAuth2 client credentials flow
///
/// # Arguments
///
/// * `http` - HTTP client to issue the token request with
/// * `token_url` - OAuth2 token endpoint URL
/// * `client_id` - OAuth2 client ID
/// * `client_secret` - OAuth2 client secret
///
/// # Returns
///
/// Returns a new access token, or error if the fetch fails.
///
/// # Errors
///
/// Returns `TokenRefreshError` if the token request fails or the response
/// cannot be parsed.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, LoggingError> {
    info!("Fetching access token from {}", token_url);

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret),
    ];

    let response = http
        .post(token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| {
            LoggingError::TokenRefreshError(format!("Failed to send token request: {}", e))
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        warn!("Token fetch failed with status {}: {}", status, error_text);

        return Err(LoggingError::TokenRefreshError(format!(
            "Token fetch failed with status {}: {}",
            status, error_text
        )));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        LoggingError::TokenRefreshError(format!("Failed to parse token response: {}", e))
    })?;

    debug!(
        "Token fetch successful, expires_in: {:?}",
        token_response.expires_in
    );

    Ok(token_response.access_token)
}

#[cfg(test)]
mod tests {
    use crate::error::LoggingError;

    #[test]
    fn test_auth_error_classification() {
        let auth_error = LoggingError::AuthenticationError("token expired".to_string());
        assert!(auth_error.is_auth_error());

        let unauthorized = LoggingError::ApiError {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(unauthorized.is_auth_error());

        let config_error = LoggingError::ConfigurationError("test".to_string());
        assert!(!config_error.is_auth_error());
    }
}
