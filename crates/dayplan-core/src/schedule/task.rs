//! Task input type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{CoreError, Result};

/// Priority of a task.
///
/// Ordering follows the ranking used for placement: `High` sorts before
/// `Medium`, which sorts before `Low`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Numeric rank: high=3, medium=2, low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work to be placed into the day.
///
/// The scheduler only reads tasks; blocks are built from copies of their
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "new_task_id")]
    pub id: String,
    pub title: String,
    /// Planned length in minutes. Must be positive.
    #[serde(alias = "duration")]
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub completed: bool,
}

fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Task {
    /// Create a pending task with a fresh identifier and no explicit priority.
    pub fn new(title: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            id: new_task_id(),
            title: title.into(),
            duration_minutes,
            priority: None,
            completed: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Mark the task as done.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Priority with the missing case treated as `Medium`.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Read a JSON array of tasks from `path`.
    pub fn load_all(path: &Path) -> Result<Vec<Task>> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ReadTasks {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CoreError::ParseTasks {
            path: path.to_path_buf(),
            source,
        })
    }
}
