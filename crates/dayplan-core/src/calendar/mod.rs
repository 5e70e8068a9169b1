//! Calendar events and the sources that supply them.
//!
//! A [`CalendarSource`] is built from an explicit [`CalendarConfig`]; there
//! is no process-wide calendar state. Network-backed providers live outside
//! this crate and only need to implement the trait.

mod file;
mod sample;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, ValidationError};

pub use file::JsonFileCalendar;
pub use sample::SampleCalendar;

/// An immovable interval on the day's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(alias = "start")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    /// Create a new calendar event
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject events that end before they start. Zero-length events are allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_time < self.start_time {
            return Err(ValidationError::InvalidEventRange {
                event_id: self.id.clone(),
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Check if the event starts on the given (UTC wall-clock) date.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_time.date_naive() == date
    }
}

/// Anything that can list the fixed events of a day.
pub trait CalendarSource {
    /// Short identifier (e.g. "sample", "file").
    fn name(&self) -> &str;

    /// Events starting on `date`, in any order.
    fn events_for(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, CalendarError>;
}

/// A source with no events.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyCalendar;

impl CalendarSource for EmptyCalendar {
    fn name(&self) -> &str {
        "none"
    }

    fn events_for(&self, _date: NaiveDate) -> Result<Vec<CalendarEvent>, CalendarError> {
        Ok(Vec::new())
    }
}

/// Which source to build.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    None,
    Sample,
    File,
}

impl CalendarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sample => "sample",
            Self::File => "file",
        }
    }
}

/// Settings handed to [`CalendarConfig::build_source`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarConfig {
    #[serde(default)]
    pub kind: CalendarKind,
    /// Events file, required for `kind = "file"`.
    pub path: Option<PathBuf>,
}

impl CalendarConfig {
    pub fn sample() -> Self {
        Self {
            kind: CalendarKind::Sample,
            path: None,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: CalendarKind::File,
            path: Some(path.into()),
        }
    }

    /// Construct the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotConfigured`] when `kind = "file"` has no path.
    pub fn build_source(&self) -> Result<Box<dyn CalendarSource>, CalendarError> {
        match self.kind {
            CalendarKind::None => Ok(Box::new(EmptyCalendar)),
            CalendarKind::Sample => Ok(Box::new(SampleCalendar)),
            CalendarKind::File => {
                let path = self.path.clone().ok_or_else(|| CalendarError::NotConfigured {
                    kind: self.kind.as_str().to_string(),
                    message: "no events file path set".to_string(),
                })?;
                Ok(Box::new(JsonFileCalendar::new(path)))
            }
        }
    }
}
