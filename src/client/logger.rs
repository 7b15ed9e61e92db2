//! Named logger bound to one log and one monitored resource
//!
//! A [`Logger`] is a convenience handle over [`LoggingClient::write_entry`]:
//! it remembers the full log name and the resource, so call sites only
//! supply a message and (implicitly, via the method) a severity.

use crate::client::entries::{LogEntry, Severity};
use crate::client::resource::MonitoredResource;
use crate::client::LoggingClient;
use crate::error::LoggingError;

/// Writes entries to a single named log
///
/// Created through [`LoggingClient::logger`]. Every entry written through a
/// `Logger` targets its bound log name and resource, overriding whatever the
/// entry carried.
///
/// # Example
///
/// ```no_run
/// # use cloud_logging_sdk_wrapper::{LoggingClient, LoggingConfiguration};
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LoggingConfiguration::new(
///     "my-project".to_string(),
///     "bucket-a".to_string(),
///     "bucket-b".to_string(),
/// );
/// let client = LoggingClient::new(config)?;
///
/// let logger = client.logger("app-events");
/// logger.info("service started").await?;
/// logger.error("upstream unreachable").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    client: LoggingClient,
    log_name: String,
    resource: MonitoredResource,
}

impl Logger {
    pub(crate) fn new(client: LoggingClient, log_id: &str) -> Self {
        let log_name = client.log_path(log_id);
        Self {
            client,
            log_name,
            resource: MonitoredResource::global(),
        }
    }

    /// Replace the bound resource (defaults to the `global` resource)
    pub fn with_resource(mut self, resource: MonitoredResource) -> Self {
        self.resource = resource;
        self
    }

    /// Full name of the bound log: `projects/{project}/logs/{log_id}`
    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// The bound monitored resource
    pub fn resource(&self) -> &MonitoredResource {
        &self.resource
    }

    /// Write an entry to the bound log
    ///
    /// The entry's log name and resource are replaced with the logger's
    /// bound values; all other fields pass through unchanged.
    pub async fn write(&self, entry: LogEntry) -> Result<(), LoggingError> {
        let entry = entry
            .with_log_name(&self.log_name)
            .with_resource(self.resource.clone());
        self.client.write_entry(entry).await
    }

    async fn write_text(&self, severity: Severity, message: &str) -> Result<(), LoggingError> {
        self.write(LogEntry::text(message).with_severity(severity))
            .await
    }

    /// Write a text entry at `DEBUG` severity
    pub async fn debug(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Debug, message).await
    }

    /// Write a text entry at `INFO` severity
    pub async fn info(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Info, message).await
    }

    /// Write a text entry at `NOTICE` severity
    pub async fn notice(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Notice, message).await
    }

    /// Write a text entry at `WARNING` severity
    pub async fn warning(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Warning, message).await
    }

    /// Write a text entry at `ERROR` severity
    pub async fn error(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Error, message).await
    }

    /// Write a text entry at `CRITICAL` severity
    pub async fn critical(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Critical, message).await
    }

    /// Write a text entry at `ALERT` severity
    pub async fn alert(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Alert, message).await
    }

    /// Write a text entry at `EMERGENCY` severity
    pub async fn emergency(&self, message: &str) -> Result<(), LoggingError> {
        self.write_text(Severity::Emergency, message).await
    }
}

impl LoggingClient {
    /// Create a logger bound to `projects/{project}/logs/{log_id}`
    ///
    /// The logger starts with the `global` monitored resource; use
    /// [`Logger::with_resource`] to bind a different one.
    pub fn logger(&self, log_id: &str) -> Logger {
        Logger::new(self.clone(), log_id)
    }
}
