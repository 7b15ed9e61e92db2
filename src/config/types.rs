//! Configuration types for the Cloud Logging SDK Wrapper
//!
//! This module defines the configuration structures and validation logic.

use crate::error::LoggingError;
use secrecy::Secret;

/// Default logging service endpoint
pub const DEFAULT_LOGGING_ENDPOINT: &str = "https://logging.googleapis.com";

/// Default storage service endpoint (sink destinations and bucket ACLs)
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";

/// Complete configuration for initializing the client
///
/// Represents all configuration needed to initialize a `LoggingClient`
/// instance: the target project, the two sink-destination buckets, endpoint
/// overrides, credentials, and polling settings.
///
/// The endpoint overrides are the test seam: integration tests point both
/// endpoints at a local stub server so every call is redirected to a test
/// project and test buckets.
#[derive(Debug, Clone)]
pub struct LoggingConfiguration {
    /// Project identifier owning the logs and sinks (required)
    pub project_id: String,
    /// Storage bucket used as the initial sink destination (required)
    pub bucket_name: String,
    /// Second storage bucket, used when a sink destination is updated (required)
    pub alternate_bucket_name: String,
    /// Logging service endpoint URL (default: [`DEFAULT_LOGGING_ENDPOINT`])
    pub logging_endpoint: String,
    /// Storage service endpoint URL (default: [`DEFAULT_STORAGE_ENDPOINT`])
    pub storage_endpoint: String,
    /// OAuth2 token endpoint URL (required when client credentials are set)
    pub token_url: Option<String>,
    /// OAuth2 client ID (optional)
    pub client_id: Option<Secret<String>>,
    /// OAuth2 client secret (optional)
    pub client_secret: Option<Secret<String>>,
    /// Pre-issued bearer token, used instead of the OAuth2 flow (optional)
    pub access_token: Option<Secret<String>>,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
    /// Maximum polling attempts when waiting for eventual consistency (default: 10)
    pub poll_max_attempts: u32,
    /// Fixed delay in milliseconds between polling attempts (default: 1000)
    pub poll_delay_ms: u64,
}

impl LoggingConfiguration {
    /// Create a new configuration with defaults
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project identifier owning the logs and sinks
    /// * `bucket_name` - Initial sink-destination bucket
    /// * `alternate_bucket_name` - Bucket used when a sink destination is updated
    ///
    /// # Example
    ///
    /// ```
    /// use cloud_logging_sdk_wrapper::LoggingConfiguration;
    ///
    /// let config = LoggingConfiguration::new(
    ///     "my-project".to_string(),
    ///     "my-bucket".to_string(),
    ///     "my-other-bucket".to_string(),
    /// );
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(project_id: String, bucket_name: String, alternate_bucket_name: String) -> Self {
        Self {
            project_id,
            bucket_name,
            alternate_bucket_name,
            logging_endpoint: DEFAULT_LOGGING_ENDPOINT.to_string(),
            storage_endpoint: DEFAULT_STORAGE_ENDPOINT.to_string(),
            token_url: None,
            client_id: None,
            client_secret: None,
            access_token: None,
            request_timeout_secs: 30,
            poll_max_attempts: 10,
            poll_delay_ms: 1000,
        }
    }

    /// Override the logging and storage endpoints
    ///
    /// # Arguments
    ///
    /// * `logging_endpoint` - Logging service base URL
    /// * `storage_endpoint` - Storage service base URL
    pub fn with_endpoints(mut self, logging_endpoint: String, storage_endpoint: String) -> Self {
        self.logging_endpoint = logging_endpoint;
        self.storage_endpoint = storage_endpoint;
        self
    }

    /// Set OAuth2 client credentials
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth2 client ID
    /// * `client_secret` - OAuth2 client secret
    pub fn with_credentials(mut self, client_id: String, client_secret: String) -> Self {
        self.client_id = Some(Secret::new(client_id));
        self.client_secret = Some(Secret::new(client_secret));
        self
    }

    /// Set the OAuth2 token endpoint URL
    ///
    /// # Arguments
    ///
    /// * `url` - Token endpoint URL
    pub fn with_token_url(mut self, url: String) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Set a pre-issued bearer token
    ///
    /// When present, the client sends this token and never runs the OAuth2
    /// flow.
    ///
    /// # Arguments
    ///
    /// * `token` - Bearer token value
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(Secret::new(token));
        self
    }

    /// Set the per-request timeout
    ///
    /// # Arguments
    ///
    /// * `secs` - Timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set polling configuration
    ///
    /// # Arguments
    ///
    /// * `max_attempts` - Maximum polling attempts
    /// * `delay_ms` - Fixed delay in milliseconds between attempts
    pub fn with_poll_config(mut self, max_attempts: u32, delay_ms: u64) -> Self {
        self.poll_max_attempts = max_attempts;
        self.poll_delay_ms = delay_ms;
        self
    }

    /// Validate configuration
    ///
    /// Checks that all required fields are present and valid.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if configuration is valid, or `Err(LoggingError)` if invalid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if:
    /// - `project_id`, `bucket_name`, or `alternate_bucket_name` is empty
    /// - the two bucket names are identical
    /// - an endpoint is not a URL starting with `https://` or `http://`
    /// - `request_timeout_secs` or `poll_max_attempts` is 0
    /// - only one of `client_id`/`client_secret` is set, or both are set
    ///   without a `token_url`
    pub fn validate(&self) -> Result<(), LoggingError> {
        if self.project_id.trim().is_empty() {
            return Err(LoggingError::ConfigurationError(
                "project_id must not be empty".to_string(),
            ));
        }

        if self.bucket_name.trim().is_empty() {
            return Err(LoggingError::ConfigurationError(
                "bucket_name must not be empty".to_string(),
            ));
        }

        if self.alternate_bucket_name.trim().is_empty() {
            return Err(LoggingError::ConfigurationError(
                "alternate_bucket_name must not be empty".to_string(),
            ));
        }

        if self.bucket_name == self.alternate_bucket_name {
            return Err(LoggingError::ConfigurationError(
                "bucket_name and alternate_bucket_name must differ".to_string(),
            ));
        }

        // Validate endpoint URLs
        for (field, endpoint) in [
            ("logging_endpoint", &self.logging_endpoint),
            ("storage_endpoint", &self.storage_endpoint),
        ] {
            if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
                return Err(LoggingError::ConfigurationError(format!(
                    "{} must start with 'https://' or 'http://', got: '{}'",
                    field, endpoint
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(LoggingError::ConfigurationError(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }

        if self.poll_max_attempts == 0 {
            return Err(LoggingError::ConfigurationError(
                "poll_max_attempts must be > 0".to_string(),
            ));
        }

        // Validate credential pairing
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(LoggingError::ConfigurationError(
                "client_id and client_secret must be provided together".to_string(),
            ));
        }

        if self.client_id.is_some() && self.token_url.is_none() {
            return Err(LoggingError::ConfigurationError(
                "token_url is required when client credentials are set".to_string(),
            ));
        }

        Ok(())
    }
}
