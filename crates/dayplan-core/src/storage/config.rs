//! TOML-based planner configuration.
//!
//! Stores:
//! - Default working-day window
//! - Break insertion policy
//! - Which calendar source to read events from
//!
//! Configuration is stored at `~/.config/dayplan/config.toml`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::calendar::CalendarConfig;
use crate::error::{ConfigError, ValidationError};
use crate::scheduler::{BreakConfig, Scheduler};
use crate::timeline::{parse_hhmm, WorkWindow, DEFAULT_WORK_END, DEFAULT_WORK_START};

/// Upper bound for every `breaks.*` minute setting: one day.
const MAX_BREAK_MINUTES: i64 = 24 * 60;

/// Working-day window as `HH:MM` wall times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_work_start")]
    pub start: String,
    #[serde(default = "default_work_end")]
    pub end: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayplan/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub breaks: BreakConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_work_start() -> String {
    DEFAULT_WORK_START.into()
}
fn default_work_end() -> String {
    DEFAULT_WORK_END.into()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start: default_work_start(),
            end: default_work_end(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<i64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Path of the config file inside [`data_dir`].
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults first if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            return Self::load_from(&path);
        }
        let cfg = Self::default();
        cfg.save_to(&path)?;
        Ok(cfg)
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = self.to_toml().map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// The whole configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    /// or leaves the configuration invalid. `self` is unchanged on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a value by key and save to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Check that the window times parse and break minutes lie within a day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let start = parse_hhmm("window.start", &self.window.start).map_err(config_value_error)?;
        let end = parse_hhmm("window.end", &self.window.end).map_err(config_value_error)?;
        if end <= start {
            return Err(ConfigError::InvalidValue {
                key: "window.end".into(),
                message: format!("{} is not after {}", self.window.end, self.window.start),
            });
        }

        let breaks = [
            ("breaks.session_threshold_minutes", self.breaks.session_threshold_minutes),
            ("breaks.min_gap_minutes", self.breaks.min_gap_minutes),
            ("breaks.duration_minutes", self.breaks.duration_minutes),
        ];
        if let Some((key, minutes)) = breaks
            .iter()
            .find(|(_, m)| !(0..=MAX_BREAK_MINUTES).contains(m))
        {
            return Err(ConfigError::InvalidValue {
                key: (*key).into(),
                message: format!("{minutes} must be between 0 and {MAX_BREAK_MINUTES}"),
            });
        }
        Ok(())
    }

    /// The configured window on `date`.
    pub fn work_window(&self, date: NaiveDate) -> Result<WorkWindow, ValidationError> {
        WorkWindow::for_date(date, &self.window.start, &self.window.end)
    }

    /// Scheduler using the configured break policy.
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::with_config(self.breaks)
    }
}

fn config_value_error(err: ValidationError) -> ConfigError {
    match err {
        ValidationError::InvalidValue { field, message } => {
            ConfigError::InvalidValue { key: field, message }
        }
        other => ConfigError::ParseFailed(other.to_string()),
    }
}
