//! Configuration module for the Cloud Logging SDK Wrapper
//!
//! This module handles configuration loading, validation, and management.

pub mod loader;
pub mod types;

pub use types::{LoggingConfiguration, DEFAULT_LOGGING_ENDPOINT, DEFAULT_STORAGE_ENDPOINT};
