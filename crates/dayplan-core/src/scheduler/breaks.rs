//! Break insertion after long task sessions.
//!
//! Breaks are advisory filler: they only ever occupy free time directly
//! after a task and never move or shrink a neighbouring block.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::schedule::{BlockKind, TimeBlock};
use crate::timeline::TimeGap;

/// Configuration for break insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakConfig {
    /// Enable break insertion
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Task sessions strictly longer than this earn a break (minutes)
    #[serde(default = "default_session_threshold")]
    pub session_threshold_minutes: i64,
    /// Minimum free time after the session (minutes)
    #[serde(default = "default_min_gap")]
    pub min_gap_minutes: i64,
    /// Break length before clamping to the gap (minutes)
    #[serde(default = "default_break_duration")]
    pub duration_minutes: i64,
}

fn default_true() -> bool {
    true
}
fn default_session_threshold() -> i64 {
    60
}
fn default_min_gap() -> i64 {
    15
}
fn default_break_duration() -> i64 {
    15
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            session_threshold_minutes: default_session_threshold(),
            min_gap_minutes: default_min_gap(),
            duration_minutes: default_break_duration(),
        }
    }
}

impl BreakConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Single forward pass that adds a break after each qualifying task block.
#[derive(Debug, Clone, Default)]
pub struct BreakInjector {
    config: BreakConfig,
}

impl BreakInjector {
    /// Create with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: BreakConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BreakConfig {
        &self.config
    }

    /// Break that would follow `current`, given its successor `next`.
    ///
    /// Only task blocks qualify, and only when the session is longer than
    /// the threshold and the gap to `next` is at least the minimum.
    pub fn break_between(&self, current: &TimeBlock, next: &TimeBlock) -> Option<TimeBlock> {
        if !self.config.enabled || current.kind != BlockKind::Task {
            return None;
        }

        // thresholds too large for a time span can never be met
        let threshold = Duration::try_minutes(self.config.session_threshold_minutes)?;
        let min_gap = Duration::try_minutes(self.config.min_gap_minutes)?;
        let long_session = current.duration() > threshold;
        let room = TimeGap::after(current, next).can_fit(min_gap);
        if !long_session || !room {
            return None;
        }

        // an unrepresentable break length still stops at the successor
        let end = Duration::try_minutes(self.config.duration_minutes)
            .and_then(|length| current.end_time.checked_add_signed(length))
            .map_or(next.start_time, |end| end.min(next.start_time));
        // a zero-length gap can pass a zero minimum; never emit an empty break
        if end <= current.end_time {
            return None;
        }
        Some(TimeBlock::break_after(current, end))
    }

    /// Walk adjacent pairs and insert breaks. The last block never gets one.
    pub fn inject(&self, blocks: Vec<TimeBlock>) -> Vec<TimeBlock> {
        if !self.config.enabled {
            return blocks;
        }

        let mut enhanced = Vec::with_capacity(blocks.len() * 2);
        for (i, current) in blocks.iter().enumerate() {
            enhanced.push(current.clone());
            let Some(next) = blocks.get(i + 1) else {
                continue;
            };
            if let Some(rest) = self.break_between(current, next) {
                tracing::debug!(
                    after = %current.id,
                    start = %rest.start_time,
                    end = %rest.end_time,
                    "inserted break"
                );
                enhanced.push(rest);
            }
        }
        enhanced
    }
}
