//! Schedule types: tasks going in, blocks and plans coming out.

mod task;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarEvent;

pub use task::{Priority, Task};

/// Kind of time block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Placed task
    Task,
    /// Fixed calendar event, never moved or resized
    Event,
    /// Advisory rest after a long task session
    Break,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
            Self::Break => "break",
        }
    }
}

/// A scheduled interval on the day's timeline.
///
/// `task_id` is set only for task blocks and `event_id` only for event
/// blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub kind: BlockKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl TimeBlock {
    /// Block for `task` starting at `start` and lasting its full duration.
    pub fn for_task(task: &Task, start: DateTime<Utc>) -> Self {
        Self {
            id: format!("task-{}", task.id),
            start_time: start,
            end_time: start + Duration::minutes(task.duration_minutes),
            kind: BlockKind::Task,
            title: task.title.clone(),
            task_id: Some(task.id.clone()),
            event_id: None,
        }
    }

    /// Fixed block carrying the event's interval verbatim.
    pub fn for_event(event: &CalendarEvent) -> Self {
        Self {
            id: format!("event-{}", event.id),
            start_time: event.start_time,
            end_time: event.end_time,
            kind: BlockKind::Event,
            title: event.title.clone(),
            task_id: None,
            event_id: Some(event.id.clone()),
        }
    }

    /// Break following `session`, ending at `end`.
    pub fn break_after(session: &TimeBlock, end: DateTime<Utc>) -> Self {
        Self {
            id: format!("break-{}", session.id),
            start_time: session.end_time,
            end_time: end,
            kind: BlockKind::Break,
            title: "Break".to_string(),
            task_id: None,
            event_id: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Get duration in whole minutes (truncated)
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Check if this block overlaps with a time range
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}

/// Result of one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Blocks ordered by start time.
    pub blocks: Vec<TimeBlock>,
    /// Sum of all block durations, rounded to the nearest minute.
    pub total_duration_minutes: i64,
    /// Pending tasks that found no gap, in input order.
    pub unscheduled_tasks: Vec<Task>,
}

impl SchedulePlan {
    pub fn blocks_of_kind(&self, kind: BlockKind) -> impl Iterator<Item = &TimeBlock> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }

    /// True when every pending task received a block.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled_tasks.is_empty()
    }
}
