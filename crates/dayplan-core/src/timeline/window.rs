//! The working-day window that placement is confined to.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default start of the working day (HH:MM).
pub const DEFAULT_WORK_START: &str = "08:00";
/// Default end of the working day (HH:MM).
pub const DEFAULT_WORK_END: &str = "18:00";

/// Half-open `[start, end)` interval of one day.
///
/// Instants are wall-clock times stored as UTC; no timezone conversion is
/// applied anywhere in planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkWindow {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWorkWindow`] unless `end > start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvalidWorkWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window on `date` between two `HH:MM` wall times.
    pub fn for_date(date: NaiveDate, start: &str, end: &str) -> Result<Self, ValidationError> {
        let start = date.and_time(parse_hhmm("start", start)?).and_utc();
        let end = date.and_time(parse_hhmm("end", end)?).and_utc();
        Self::new(start, end)
    }

    /// 08:00 to 18:00 on `date`.
    pub fn standard(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::default()).and_utc() + Duration::hours(8);
        Self {
            start,
            end: start + Duration::hours(10),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Inclusive at both ends: an event starting exactly at `end` still
    /// belongs to the day.
    pub fn admits_start(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn contains_interval(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Parse a `HH:MM` wall time.
pub fn parse_hhmm(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| ValidationError::InvalidValue {
        field: field.to_string(),
        message: format!("expected HH:MM, got '{value}' ({e})"),
    })
}
