//! Log sinks: wire model and CRUD operations
//!
//! A sink continuously exports matching log entries to a destination, here
//! always a storage bucket addressed as `storage.googleapis.com/{bucket}`.
//! Sinks are scoped to the configured project; every operation resolves
//! names under `projects/{project}/sinks`.

use crate::client::http;
use crate::client::LoggingClient;
use crate::error::LoggingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A log sink as returned by the service
///
/// `writer_identity`, `create_time`, and `update_time` are assigned by the
/// service and absent on sinks built locally for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSink {
    /// Sink name, unique within the project
    pub name: String,
    /// Export destination, e.g. `storage.googleapis.com/my-bucket`
    pub destination: String,
    /// Filter selecting the entries the sink exports (absent exports all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Service identity that writes exported entries to the destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer_identity: Option<String>,
    /// Creation time, assigned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update time, assigned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Sink fields the client is allowed to set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SinkPayload<'a> {
    name: &'a str,
    destination: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSinksResponse {
    #[serde(default)]
    sinks: Vec<LogSink>,
    next_page_token: Option<String>,
}

/// Format a storage bucket as a sink destination
///
/// # Example
///
/// ```
/// use cloud_logging_sdk_wrapper::storage_destination;
///
/// assert_eq!(
///     storage_destination("my-bucket"),
///     "storage.googleapis.com/my-bucket"
/// );
/// ```
pub fn storage_destination(bucket: &str) -> String {
    format!("storage.googleapis.com/{}", bucket)
}

impl LoggingClient {
    /// Create a log sink
    ///
    /// # Arguments
    ///
    /// * `name` - Sink name, unique within the project
    /// * `destination` - Export destination, see [`storage_destination`]
    /// * `filter` - Optional filter selecting the entries to export
    ///
    /// # Returns
    ///
    /// Returns the created sink, including its service-assigned writer
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns an API error with status 409 if a sink with this name
    /// already exists.
    pub async fn create_sink(
        &self,
        name: &str,
        destination: &str,
        filter: Option<&str>,
    ) -> Result<LogSink, LoggingError> {
        info!("Creating sink '{}' -> {}", name, destination);

        let body = SinkPayload {
            name,
            destination,
            filter,
        };
        let path = format!("v2/projects/{}/sinks", self.config().project_id);
        let response = self.post_logging(&path, &body).await?;
        http::read_json(response).await
    }

    /// Fetch a log sink by name
    ///
    /// # Errors
    ///
    /// Returns an API error with status 404 if the sink does not exist;
    /// [`LoggingError::is_not_found`] recognizes that case.
    pub async fn get_sink(&self, name: &str) -> Result<LogSink, LoggingError> {
        let path = format!("v2/projects/{}/sinks/{}", self.config().project_id, name);
        let response = self.get_logging(&path, &[]).await?;
        http::read_json(response).await
    }

    /// Update a sink's destination
    ///
    /// Reads the current sink first so the existing filter survives the
    /// update, then replaces the sink in full.
    ///
    /// # Returns
    ///
    /// Returns the updated sink as stored by the service.
    pub async fn update_sink(
        &self,
        name: &str,
        destination: &str,
    ) -> Result<LogSink, LoggingError> {
        info!("Updating sink '{}' -> {}", name, destination);

        let current = self.get_sink(name).await?;
        let body = SinkPayload {
            name,
            destination,
            filter: current.filter.as_deref(),
        };
        let path = format!("v2/projects/{}/sinks/{}", self.config().project_id, name);
        let response = self.put_logging(&path, &body).await?;
        http::read_json(response).await
    }

    /// Delete a log sink
    ///
    /// # Errors
    ///
    /// Returns an API error with status 404 if the sink does not exist.
    pub async fn delete_sink(&self, name: &str) -> Result<(), LoggingError> {
        info!("Deleting sink '{}'", name);

        let path = format!("v2/projects/{}/sinks/{}", self.config().project_id, name);
        let response = self.delete_logging(&path).await?;
        http::expect_success(response).await
    }

    /// List all sinks in the configured project
    ///
    /// # Returns
    ///
    /// Returns every sink, following continuation tokens until the listing
    /// is exhausted.
    pub async fn list_sinks(&self) -> Result<Vec<LogSink>, LoggingError> {
        let path = format!("v2/projects/{}/sinks", self.config().project_id);
        let mut sinks = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let query: Vec<(&str, &str)> = match &page_token {
                Some(token) => vec![("pageToken", token.as_str())],
                None => Vec::new(),
            };
            let response = self.get_logging(&path, &query).await?;
            let page: ListSinksResponse = http::read_json(response).await?;
            sinks.extend(page.sinks);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Listed {} sinks", sinks.len());
        Ok(sinks)
    }
}
