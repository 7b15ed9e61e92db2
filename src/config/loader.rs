//! Configuration loader for the Cloud Logging SDK Wrapper
//!
//! This module handles loading configuration from YAML files and environment variables.

use crate::config::LoggingConfiguration;
use crate::error::LoggingError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// YAML configuration structure (for deserialization)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    pub project_id: Option<String>,
    pub bucket_name: Option<String>,
    pub alternate_bucket_name: Option<String>,
    pub endpoints: Option<EndpointsYaml>,
    pub credentials: Option<CredentialsYaml>,
    pub request_timeout_secs: Option<u64>,
    pub poll: Option<PollYaml>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsYaml {
    pub logging: Option<String>,
    pub storage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsYaml {
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub token_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollYaml {
    pub max_attempts: Option<u32>,
    pub delay_ms: Option<u64>,
}

/// Load configuration from YAML file
///
/// # Arguments
///
/// * `path` - Path to YAML configuration file
///
/// # Returns
///
/// Returns `LoggingConfiguration` if successful, or `LoggingError` if loading fails.
pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<LoggingConfiguration, LoggingError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        LoggingError::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    let yaml: ConfigYaml = serde_yaml::from_str(&content)
        .map_err(|e| LoggingError::ConfigurationError(format!("Failed to parse YAML: {}", e)))?;

    let mut config = LoggingConfiguration::new(
        yaml.project_id
            .ok_or_else(|| LoggingError::ConfigurationError("project_id is required".to_string()))?,
        yaml.bucket_name.ok_or_else(|| {
            LoggingError::ConfigurationError("bucket_name is required".to_string())
        })?,
        yaml.alternate_bucket_name.ok_or_else(|| {
            LoggingError::ConfigurationError("alternate_bucket_name is required".to_string())
        })?,
    );

    if let Some(endpoints) = yaml.endpoints {
        if let Some(logging) = endpoints.logging {
            config.logging_endpoint = logging;
        }
        if let Some(storage) = endpoints.storage {
            config.storage_endpoint = storage;
        }
    }

    if let Some(credentials) = yaml.credentials {
        if let Some(token) = credentials.access_token {
            config = config.with_access_token(token);
        }
        if let Some(client_id) = credentials.client_id {
            if let Some(client_secret) = credentials.client_secret {
                config = config.with_credentials(client_id, client_secret);
            }
        }
        if let Some(token_url) = credentials.token_url {
            config = config.with_token_url(token_url);
        }
    }

    if let Some(secs) = yaml.request_timeout_secs {
        config = config.with_request_timeout_secs(secs);
    }

    if let Some(poll) = yaml.poll {
        if let (Some(max_attempts), Some(delay_ms)) = (poll.max_attempts, poll.delay_ms) {
            config = config.with_poll_config(max_attempts, delay_ms);
        }
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Reads configuration from environment variables with the following prefixes:
/// - `LOGGING_` for project, bucket, endpoint, and credential settings
/// - `STORAGE_` for the storage endpoint
/// - `POLL_` for polling settings
///
/// Required variables: `LOGGING_PROJECT_ID`, `LOGGING_BUCKET_NAME`,
/// `LOGGING_ALTERNATE_BUCKET_NAME`.
///
/// # Returns
///
/// Returns `LoggingConfiguration` if successful, or `LoggingError` if loading fails.
pub fn load_from_env() -> Result<LoggingConfiguration, LoggingError> {
    let project_id = std::env::var("LOGGING_PROJECT_ID").map_err(|_| {
        LoggingError::ConfigurationError(
            "LOGGING_PROJECT_ID environment variable is required".to_string(),
        )
    })?;

    let bucket_name = std::env::var("LOGGING_BUCKET_NAME").map_err(|_| {
        LoggingError::ConfigurationError(
            "LOGGING_BUCKET_NAME environment variable is required".to_string(),
        )
    })?;

    let alternate_bucket_name = std::env::var("LOGGING_ALTERNATE_BUCKET_NAME").map_err(|_| {
        LoggingError::ConfigurationError(
            "LOGGING_ALTERNATE_BUCKET_NAME environment variable is required".to_string(),
        )
    })?;

    let mut config = LoggingConfiguration::new(project_id, bucket_name, alternate_bucket_name);

    if let Ok(endpoint) = std::env::var("LOGGING_ENDPOINT") {
        config.logging_endpoint = endpoint;
    }

    if let Ok(endpoint) = std::env::var("STORAGE_ENDPOINT") {
        config.storage_endpoint = endpoint;
    }

    if let Ok(token) = std::env::var("LOGGING_ACCESS_TOKEN") {
        config = config.with_access_token(token);
    }

    if let (Ok(client_id), Ok(client_secret)) = (
        std::env::var("LOGGING_CLIENT_ID"),
        std::env::var("LOGGING_CLIENT_SECRET"),
    ) {
        config = config.with_credentials(client_id, client_secret);
    }

    if let Ok(token_url) = std::env::var("LOGGING_TOKEN_URL") {
        config = config.with_token_url(token_url);
    }

    if let Ok(secs) = std::env::var("LOGGING_REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = secs.parse::<u64>() {
            config = config.with_request_timeout_secs(secs);
        }
    }

    if let (Ok(max_attempts), Ok(delay_ms)) = (
        std::env::var("POLL_MAX_ATTEMPTS"),
        std::env::var("POLL_DELAY_MS"),
    ) {
        if let (Ok(max_attempts), Ok(delay_ms)) =
            (max_attempts.parse::<u32>(), delay_ms.parse::<u64>())
        {
            config = config.with_poll_config(max_attempts, delay_ms);
        }
    }

    config.validate()?;
    Ok(config)
}
