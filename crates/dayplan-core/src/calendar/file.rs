//! Events read from a JSON file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{CalendarEvent, CalendarSource};
use crate::error::CalendarError;

/// Reads a JSON array of [`CalendarEvent`] and returns the ones starting on
/// the requested date. The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCalendar {
    path: PathBuf,
}

impl JsonFileCalendar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every event in the file, regardless of date.
    pub fn load_all(&self) -> Result<Vec<CalendarEvent>, CalendarError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CalendarError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CalendarError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl CalendarSource for JsonFileCalendar {
    fn name(&self) -> &str {
        "file"
    }

    fn events_for(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, CalendarError> {
        let events: Vec<CalendarEvent> = self
            .load_all()?
            .into_iter()
            .filter(|e| e.starts_on(date))
            .collect();

        tracing::debug!(
            source = "file",
            path = %self.path.display(),
            %date,
            count = events.len(),
            "listed calendar events"
        );
        Ok(events)
    }
}
