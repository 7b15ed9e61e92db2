//! Log entries: wire model and the write/list operations
//!
//! A log entry is a timestamped record with exactly one payload (text or
//! structured JSON), a severity, and the monitored resource it originated
//! from. Both operations are direct pass-throughs to the service's
//! `entries:write` and `entries:list` calls.

use crate::client::http;
use crate::client::resource::MonitoredResource;
use crate::client::LoggingClient;
use crate::error::LoggingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Log entry severity
///
/// Levels are ordered from least to most severe. The wire format uses the
/// service's SCREAMING_SNAKE_CASE names; `Display` renders lowercase.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No severity assigned
    #[default]
    Default,
    /// Debug or trace information
    Debug,
    /// Routine information
    Info,
    /// Normal but significant events
    Notice,
    /// Warning conditions
    Warning,
    /// Error conditions
    Error,
    /// Critical conditions
    Critical,
    /// A person must take action immediately
    Alert,
    /// One or more systems are unusable
    Emergency,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Notice => write!(f, "notice"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
            Self::Alert => write!(f, "alert"),
            Self::Emergency => write!(f, "emergency"),
        }
    }
}

/// A single log entry
///
/// Entries built locally usually set a payload, a severity, a resource, and
/// a log name; the service fills in the rest (timestamp, insert ID) on
/// write, and entries read back via [`LoggingClient::list_entries`] carry
/// those service-assigned fields.
///
/// # Example
///
/// ```
/// use cloud_logging_sdk_wrapper::{LogEntry, MonitoredResource, Severity};
///
/// let entry = LogEntry::text("job finished")
///     .with_severity(Severity::Info)
///     .with_resource(MonitoredResource::global())
///     .with_log_name("projects/my-project/logs/my-log");
/// assert_eq!(entry.text_payload.as_deref(), Some("job finished"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Full log name: `projects/{project}/logs/{log_id}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
    /// Resource the entry originated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<MonitoredResource>,
    /// Unstructured text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_payload: Option<String>,
    /// Structured JSON payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_payload: Option<serde_json::Value>,
    /// Entry severity
    #[serde(default)]
    pub severity: Severity,
    /// Event time (assigned by the service when absent on write)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// User-defined entry labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Unique entry identifier (assigned by the service when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<String>,
}

impl LogEntry {
    /// Create an entry with a text payload
    pub fn text(payload: &str) -> Self {
        Self {
            text_payload: Some(payload.to_string()),
            ..Self::default()
        }
    }

    /// Create an entry with a structured JSON payload
    pub fn json(payload: serde_json::Value) -> Self {
        Self {
            json_payload: Some(payload),
            ..Self::default()
        }
    }

    /// Set the entry severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the originating resource
    pub fn with_resource(mut self, resource: MonitoredResource) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Set the full log name
    pub fn with_log_name(mut self, log_name: &str) -> Self {
        self.log_name = Some(log_name.to_string());
        self
    }

    /// Set the event time
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Add a user-defined label
    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the unique entry identifier
    pub fn with_insert_id(mut self, insert_id: &str) -> Self {
        self.insert_id = Some(insert_id.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WriteEntriesRequest<'a> {
    entries: &'a [LogEntry],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntriesRequest<'a> {
    resource_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEntriesResponse {
    #[serde(default)]
    entries: Vec<LogEntry>,
    next_page_token: Option<String>,
}

impl LoggingClient {
    /// Write a single log entry
    ///
    /// # Errors
    ///
    /// Returns the translated service error if the write is rejected.
    pub async fn write_entry(&self, entry: LogEntry) -> Result<(), LoggingError> {
        self.write_entries(std::slice::from_ref(&entry)).await
    }

    /// Write a batch of log entries
    ///
    /// # Arguments
    ///
    /// * `entries` - Entries to write; each carries its own log name,
    ///   resource, and severity
    ///
    /// # Errors
    ///
    /// Returns the translated service error if the write is rejected.
    pub async fn write_entries(&self, entries: &[LogEntry]) -> Result<(), LoggingError> {
        debug!("Writing {} log entries", entries.len());

        let body = WriteEntriesRequest { entries };
        let response = self.post_logging("v2/entries:write", &body).await?;
        http::expect_success(response).await
    }

    /// List log entries for the configured project
    ///
    /// A recent write may not be visible yet; callers that need to observe
    /// one should re-list through [`PollConfig`](crate::PollConfig).
    ///
    /// # Arguments
    ///
    /// * `filter` - Entry filter expression (empty string for no filter)
    /// * `order` - Ordering expression, e.g. `timestamp desc` (empty string
    ///   for service default)
    ///
    /// # Returns
    ///
    /// Returns all matching entries, following continuation tokens until the
    /// listing is exhausted.
    pub async fn list_entries(
        &self,
        filter: &str,
        order: &str,
    ) -> Result<Vec<LogEntry>, LoggingError> {
        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let body = ListEntriesRequest {
                resource_names: vec![self.project_path()],
                filter: (!filter.is_empty()).then_some(filter),
                order_by: (!order.is_empty()).then_some(order),
                page_token: page_token.take(),
            };

            let response = self.post_logging("v2/entries:list", &body).await?;
            let page: ListEntriesResponse = http::read_json(response).await?;
            entries.extend(page.entries);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Listed {} log entries", entries.len());
        Ok(entries)
    }
}
