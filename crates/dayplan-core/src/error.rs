//! Core error types for dayplan-core.
//!
//! Planning itself never fails on well-formed input: tasks that do not fit
//! are reported through [`SchedulePlan::unscheduled_tasks`]. The errors here
//! cover malformed input, configuration and calendar sources.
//!
//! [`SchedulePlan::unscheduled_tasks`]: crate::schedule::SchedulePlan

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Calendar source errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Task list could not be read
    #[error("Failed to read tasks from {path}: {source}")]
    ReadTasks {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Task list is not a valid JSON task array
    #[error("Failed to parse tasks in {path}: {source}")]
    ParseTasks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition failures detected before any placement happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task duration is zero or negative
    #[error("Invalid duration for task '{task_id}': {minutes} minutes (must be positive)")]
    InvalidDuration { task_id: String, minutes: i64 },

    /// Event ends before it starts
    #[error("Invalid time range for event '{event_id}': end ({end}) is before start ({start})")]
    InvalidEventRange {
        event_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Two tasks share an identifier
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),

    /// Working window is empty or inverted
    #[error("Invalid work window: end ({end}) must be after start ({start})")]
    InvalidWorkWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to render configuration as TOML
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised by a [`CalendarSource`](crate::calendar::CalendarSource).
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Events file could not be read
    #[error("Failed to read events from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Events file is not a valid JSON event list
    #[error("Failed to parse events in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Source kind needs settings that were not provided
    #[error("Calendar source '{kind}' is not configured: {message}")]
    NotConfigured { kind: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SerializeFailed(err.to_string())
    }
}

/// Result type alias for CoreError, used by the CLI commands
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
