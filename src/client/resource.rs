//! Monitored resource descriptors
//!
//! A monitored resource identifies the origin of a log entry: a resource
//! type plus a map of type-specific labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A typed, labeled descriptor identifying the origin of a log entry
///
/// # Example
///
/// ```
/// use cloud_logging_sdk_wrapper::MonitoredResource;
///
/// let resource = MonitoredResource::new("gae_app")
///     .with_label("module_id", "default");
/// assert_eq!(resource.resource_type, "gae_app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredResource {
    /// Resource type identifier (e.g. `global`, `gae_app`)
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Type-specific labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl MonitoredResource {
    /// Create a resource descriptor of the given type with no labels
    pub fn new(resource_type: &str) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            labels: HashMap::new(),
        }
    }

    /// The `global` resource, used for entries not tied to a specific service
    pub fn global() -> Self {
        Self::new("global")
    }

    /// Add a label to the descriptor
    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }
}
