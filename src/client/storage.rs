//! Storage bucket access control
//!
//! A bucket can only receive exported log entries once the service's log
//! delivery group holds the `OWNER` role on it. This module grants that
//! role through the storage API's bucket ACL endpoint.

use crate::client::http;
use crate::client::LoggingClient;
use crate::error::LoggingError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Well-known group the service delivers exported entries as
pub const LOG_DELIVERY_GROUP: &str = "group-cloud-logs@google.com";

const OWNER_ROLE: &str = "OWNER";

/// An access control entry on a storage bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAccessControl {
    /// Entity holding the permission, e.g. `group-cloud-logs@google.com`
    pub entity: String,
    /// Access the entity holds: `OWNER`, `WRITER`, or `READER`
    pub role: String,
    /// Bucket the entry applies to, filled in by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AclPayload<'a> {
    entity: &'a str,
    role: &'a str,
}

impl LoggingClient {
    /// Grant an entity the `OWNER` role on a bucket
    ///
    /// # Arguments
    ///
    /// * `bucket` - Bucket name, without any `storage.googleapis.com/` prefix
    /// * `entity` - ACL entity string, e.g. `group-example@example.com`
    ///
    /// # Returns
    ///
    /// Returns the access control entry as stored by the service.
    pub async fn add_bucket_owner(
        &self,
        bucket: &str,
        entity: &str,
    ) -> Result<BucketAccessControl, LoggingError> {
        info!("Granting OWNER on bucket '{}' to {}", bucket, entity);

        let body = AclPayload {
            entity,
            role: OWNER_ROLE,
        };
        let path = format!("storage/v1/b/{}/acl", bucket);
        let response = self.post_storage(&path, &body).await?;
        http::read_json(response).await
    }

    /// Authorize a bucket to receive exported log entries
    ///
    /// Grants [`LOG_DELIVERY_GROUP`] the `OWNER` role on the bucket. Must
    /// succeed before the bucket is used as a sink destination, or exports
    /// to it are silently dropped.
    pub async fn authorize_sink_destination(
        &self,
        bucket: &str,
    ) -> Result<BucketAccessControl, LoggingError> {
        self.add_bucket_owner(bucket, LOG_DELIVERY_GROUP).await
    }
}
