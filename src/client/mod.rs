//! Main client implementation for the logging and storage services
//!
//! This module provides the core [`LoggingClient`] that handles request
//! construction, authentication, and error translation. The individual
//! operations live in sibling modules and attach to `LoggingClient` through
//! their own `impl` blocks: sink CRUD in [`sinks`], entry write/list in
//! [`entries`], bucket ACL grants in [`storage`], and the bounded polling
//! helper in [`poll`].

pub(crate) mod auth;
pub mod entries;
pub(crate) mod http;
pub mod logger;
pub mod poll;
pub mod resource;
pub mod sinks;
pub mod storage;

use crate::config::LoggingConfiguration;
use crate::error::LoggingError;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

pub use entries::{LogEntry, Severity};
pub use logger::Logger;
pub use poll::PollConfig;
pub use resource::MonitoredResource;
pub use sinks::{storage_destination, LogSink};
pub use storage::{BucketAccessControl, LOG_DELIVERY_GROUP};

/// Client for the logging service and the storage ACL endpoint
///
/// Thread-safe client that handles authentication, request construction,
/// and translation of service errors into [`LoggingError`]. Cloning is
/// cheap; clones share the HTTP connection pool and the token cache.
///
/// # Example
///
/// ```no_run
/// use cloud_logging_sdk_wrapper::{LoggingClient, LoggingConfiguration};
///
/// # async fn example() -> Result<(), cloud_logging_sdk_wrapper::LoggingError> {
/// let config = LoggingConfiguration::new(
///     "my-project".to_string(),
///     "bucket-a".to_string(),
///     "bucket-b".to_string(),
/// );
/// let client = LoggingClient::new(config)?;
///
/// for sink in client.list_sinks().await? {
///     println!("{} -> {}", sink.name, sink.destination);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LoggingClient {
    /// Configuration (immutable)
    config: Arc<LoggingConfiguration>,
    /// Shared HTTP client with the configured request timeout
    http: reqwest::Client,
    /// Polling defaults for eventually consistent reads
    poll: PollConfig,
    /// Cached OAuth access token (thread-safe)
    token: Arc<Mutex<Option<String>>>,
}

impl LoggingClient {
    /// Create a new client with the provided configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for initializing the client
    ///
    /// # Returns
    ///
    /// Returns `Ok(LoggingClient)` if initialization succeeds, or
    /// `Err(LoggingError)` if configuration validation fails or the HTTP
    /// client cannot be built.
    pub fn new(config: LoggingConfiguration) -> Result<Self, LoggingError> {
        info!("Initializing LoggingClient");

        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                LoggingError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        let poll = PollConfig::new(
            config.poll_max_attempts,
            Duration::from_millis(config.poll_delay_ms),
        );

        info!("Logging endpoint: {}", config.logging_endpoint);
        info!("Storage endpoint: {}", config.storage_endpoint);

        Ok(Self {
            config: Arc::new(config),
            http,
            poll,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &LoggingConfiguration {
        &self.config
    }

    /// Polling defaults taken from the configuration
    ///
    /// Use this to wait for eventually consistent reads, e.g. re-listing
    /// entries until a recent write becomes visible.
    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Resource name of the configured project: `projects/{project}`
    pub fn project_path(&self) -> String {
        format!("projects/{}", self.config.project_id)
    }

    /// Full log name for a log ID: `projects/{project}/logs/{log_id}`
    pub fn log_path(&self, log_id: &str) -> String {
        format!("projects/{}/logs/{}", self.config.project_id, log_id)
    }

    /// Join a request path onto an endpoint, tolerating a trailing slash
    fn join_endpoint(endpoint: &str, path: &str) -> Result<Url, LoggingError> {
        let joined = if endpoint.ends_with('/') {
            format!("{}{}", endpoint, path)
        } else {
            format!("{}/{}", endpoint, path)
        };

        Url::parse(&joined).map_err(|e| {
            LoggingError::ConfigurationError(format!("Invalid request URL '{}': {}", joined, e))
        })
    }

    /// Resolve the bearer token for outgoing requests
    ///
    /// Prefers a pre-issued access token from the configuration, then a
    /// cached OAuth token, then fetches a fresh one with the configured
    /// client credentials. Returns `None` when no credentials are
    /// configured, which is the normal mode against a local stub server.
    async fn bearer_token(&self) -> Result<Option<String>, LoggingError> {
        if let Some(token) = &self.config.access_token {
            return Ok(Some(token.expose_secret().clone()));
        }

        let (Some(client_id), Some(client_secret), Some(token_url)) = (
            self.config.client_id.as_ref(),
            self.config.client_secret.as_ref(),
            self.config.token_url.as_ref(),
        ) else {
            return Ok(None);
        };

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(Some(token.clone()));
        }

        debug!("No cached access token, fetching a new one");
        let token = auth::fetch_access_token(
            &self.http,
            token_url,
            client_id.expose_secret(),
            client_secret.expose_secret(),
        )
        .await?;
        *cached = Some(token.clone());
        Ok(Some(token))
    }

    /// Attach authentication and dispatch a request
    ///
    /// A 401 response drops the cached token so the next request
    /// re-authenticates; translating the response status into an error is
    /// left to the caller.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, LoggingError> {
        let request = match self.bearer_token().await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LoggingError::ConnectionError(format!("Request timed out: {}", e))
            } else {
                LoggingError::ConnectionError(format!("Request failed: {}", e))
            }
        })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let mut cached = self.token.lock().await;
            cached.take();
        }

        Ok(response)
    }

    pub(crate) async fn get_logging(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, LoggingError> {
        let mut url = Self::join_endpoint(&self.config.logging_endpoint, path)?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        self.send(self.http.get(url)).await
    }

    pub(crate) async fn post_logging<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LoggingError>
    where
        B: Serialize + ?Sized,
    {
        let url = Self::join_endpoint(&self.config.logging_endpoint, path)?;
        self.send(self.http.post(url).json(body)).await
    }

    pub(crate) async fn put_logging<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LoggingError>
    where
        B: Serialize + ?Sized,
    {
        let url = Self::join_endpoint(&self.config.logging_endpoint, path)?;
        self.send(self.http.put(url).json(body)).await
    }

    pub(crate) async fn delete_logging(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, LoggingError> {
        let url = Self::join_endpoint(&self.config.logging_endpoint, path)?;
        self.send(self.http.delete(url)).await
    }

    pub(crate) async fn post_storage<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LoggingError>
    where
        B: Serialize + ?Sized,
    {
        let url = Self::join_endpoint(&self.config.storage_endpoint, path)?;
        self.send(self.http.post(url).json(body)).await
    }
}
