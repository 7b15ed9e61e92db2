//! Cloud Logging SDK Wrapper
//!
//! Rust client wrapper for a cloud logging service and the storage ACL
//! endpoint backing its export sinks. Provides a typed API for managing log
//! sinks, writing and listing log entries, granting the log delivery group
//! access to destination buckets, and waiting out the service's eventual
//! consistency with bounded polling.
//!
//! # Features
//!
//! - Sink lifecycle: create, get, update, delete, and list export sinks
//! - Entry operations: write text or structured entries, list with filters
//! - Named loggers bound to one log and monitored resource
//! - Bucket ACL grants for the service's log delivery group
//! - Bounded fixed-delay polling for eventually consistent reads
//! - Endpoint overrides so tests can run against a local stub server
//! - OAuth2 client-credentials authentication with token caching
//!
//! # Example
//!
//! ```no_run
//! use cloud_logging_sdk_wrapper::{storage_destination, LoggingClient, LoggingConfiguration};
//!
//! # async fn example() -> Result<(), cloud_logging_sdk_wrapper::LoggingError> {
//! # let config = LoggingConfiguration::new(
//! #     "my-project".to_string(),
//! #     "bucket-a".to_string(),
//! #     "bucket-b".to_string(),
//! # );
//! let client = LoggingClient::new(config)?;
//!
//! client.authorize_sink_destination("bucket-a").await?;
//! let sink = client
//!     .create_sink("my-sink", &storage_destination("bucket-a"), None)
//!     .await?;
//!
//! let logger = client.logger("app-events");
//! logger.info("sink created").await?;
//!
//! client.delete_sink(&sink.name).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{
    storage_destination, BucketAccessControl, LogEntry, LogSink, Logger, LoggingClient,
    MonitoredResource, PollConfig, Severity, LOG_DELIVERY_GROUP,
};
pub use config::{LoggingConfiguration, DEFAULT_LOGGING_ENDPOINT, DEFAULT_STORAGE_ENDPOINT};
pub use error::LoggingError;
