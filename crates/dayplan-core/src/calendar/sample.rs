//! Built-in demo calendar.

use chrono::{DateTime, NaiveDate, Utc};

use super::{CalendarEvent, CalendarSource};
use crate::error::CalendarError;

/// Three fixed meetings on whatever day is asked for. Useful for trying the
/// planner without a real calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCalendar;

fn wall_clock(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(hour, minute, 0)?.and_utc())
}

impl CalendarSource for SampleCalendar {
    fn name(&self) -> &str {
        "sample"
    }

    fn events_for(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, CalendarError> {
        let specs = [
            ("sample-1", "Team Standup", (9, 0), (9, 30), "Daily team sync meeting"),
            ("sample-2", "Client Call", (14, 0), (15, 0), "Project review with client"),
            ("sample-3", "Code Review", (16, 30), (17, 0), "Review pending PRs"),
        ];

        let events: Vec<CalendarEvent> = specs
            .iter()
            .filter_map(|(id, title, (sh, sm), (eh, em), description)| {
                let start = wall_clock(date, *sh, *sm)?;
                let end = wall_clock(date, *eh, *em)?;
                Some(CalendarEvent::new(*id, *title, start, end).with_description(*description))
            })
            .collect();

        tracing::debug!(source = "sample", %date, count = events.len(), "listed calendar events");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn sample_events_land_on_requested_day() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let events = SampleCalendar.events_for(date).unwrap();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.starts_on(date)));
        assert_eq!(events[0].title, "Team Standup");
        assert_eq!(events[0].start_time.hour(), 9);
        assert_eq!(events[2].end_time.hour(), 17);
        assert!(events.iter().all(|e| e.description.is_some()));
    }
}
