//! Gap arithmetic between blocks.
//!
//! A gap is the free interval between two temporally adjacent blocks, or
//! between a day boundary and the nearest block.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::WorkWindow;
use crate::schedule::TimeBlock;

/// A free interval on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGap {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeGap {
    /// Gap from `start_time` to `end_time`. Negative when the two
    /// neighbours overlap; such a gap fits nothing.
    pub fn between(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Gap separating two adjacent blocks
    pub fn after(current: &TimeBlock, next: &TimeBlock) -> Self {
        Self::between(current.end_time, next.start_time)
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Check if this gap can hold an interval of `length`
    pub fn can_fit(&self, length: Duration) -> bool {
        self.duration() >= length
    }
}

/// Free gaps of at least `min_minutes` inside `window`, around `blocks`
/// (which must be sorted by start time).
pub fn free_gaps(blocks: &[TimeBlock], window: &WorkWindow, min_minutes: i64) -> Vec<TimeGap> {
    let min = Duration::minutes(min_minutes.max(1));
    let mut gaps = Vec::new();
    let mut last_end = window.start;

    for block in blocks {
        if block.end_time <= last_end {
            continue;
        }
        if block.start_time >= window.end {
            break;
        }
        if block.start_time > last_end {
            let gap = TimeGap::between(last_end, block.start_time.min(window.end));
            if gap.can_fit(min) {
                gaps.push(gap);
            }
        }
        last_end = block.end_time.min(window.end);
    }

    if last_end < window.end {
        let gap = TimeGap::between(last_end, window.end);
        if gap.can_fit(min) {
            gaps.push(gap);
        }
    }

    gaps
}
