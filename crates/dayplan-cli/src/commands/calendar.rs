use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dayplan_core::error::Result;
use dayplan_core::{CalendarConfig, CalendarError, CalendarEvent, Config};

/// Where to read fixed events from. Falls back to the configured source.
#[derive(Args, Debug, Default)]
pub struct CalendarArgs {
    /// JSON file with an array of calendar events
    #[arg(long, conflicts_with = "sample_calendar")]
    pub events: Option<PathBuf>,
    /// Use the built-in sample meetings
    #[arg(long)]
    pub sample_calendar: bool,
}

impl CalendarArgs {
    pub fn resolve(&self, config: &Config) -> CalendarConfig {
        match (&self.events, self.sample_calendar) {
            (Some(path), _) => CalendarConfig::file(path),
            (None, true) => CalendarConfig::sample(),
            (None, false) => config.calendar.clone(),
        }
    }

    /// Events starting on `date`, sorted by start time.
    pub fn load_events(
        &self,
        config: &Config,
        date: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let source = self.resolve(config).build_source()?;
        let mut events = source.events_for(date)?;
        events.sort_by_key(|e| e.start_time);
        tracing::debug!(source = source.name(), count = events.len(), "loaded events");
        Ok(events)
    }
}

#[derive(Subcommand)]
pub enum CalendarAction {
    /// List the day's events
    List {
        #[command(flatten)]
        calendar: CalendarArgs,
        /// Day to list (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: CalendarAction) -> Result<()> {
    match action {
        CalendarAction::List { calendar, date } => {
            let config = Config::load_or_default();
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let events = calendar.load_events(&config, date)?;
            if events.is_empty() {
                println!("No events on {date}");
            }
            for event in &events {
                println!(
                    "{} - {}  {}",
                    event.start_time.format("%H:%M"),
                    event.end_time.format("%H:%M"),
                    event.title
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::CalendarKind;

    #[test]
    fn explicit_file_wins_over_config() {
        let mut config = Config::default();
        config.calendar = CalendarConfig::sample();
        let args = CalendarArgs {
            events: Some(PathBuf::from("events.json")),
            sample_calendar: false,
        };
        let resolved = args.resolve(&config);
        assert_eq!(resolved.kind, CalendarKind::File);
        assert_eq!(resolved.path, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn falls_back_to_configured_source() {
        let mut config = Config::default();
        config.calendar = CalendarConfig::sample();
        assert_eq!(CalendarArgs::default().resolve(&config).kind, CalendarKind::Sample);
        assert_eq!(
            CalendarArgs::default().resolve(&Config::default()).kind,
            CalendarKind::None
        );
    }
}
