//! Input checks and ordering ahead of placement.

use std::collections::HashSet;

use crate::calendar::CalendarEvent;
use crate::error::ValidationError;
use crate::schedule::{Task, TimeBlock};
use crate::timeline::WorkWindow;

/// Reject input the placement engine cannot reason about.
///
/// Every task is checked, completed or not: durations must be positive and
/// identifiers unique. Every event must end no earlier than it starts.
pub fn validate_inputs(tasks: &[Task], events: &[CalendarEvent]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.duration_minutes <= 0 {
            return Err(ValidationError::InvalidDuration {
                task_id: task.id.clone(),
                minutes: task.duration_minutes,
            });
        }
        if !seen.insert(task.id.as_str()) {
            return Err(ValidationError::DuplicateTaskId(task.id.clone()));
        }
    }

    events.iter().try_for_each(CalendarEvent::validate)
}

/// Pending tasks in placement order: priority rank descending, then
/// shorter first. The sort is stable, so equal tasks keep input order.
pub fn placement_order(tasks: &[Task]) -> Vec<&Task> {
    let mut pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    pending.sort_by(|a, b| {
        b.effective_priority()
            .rank()
            .cmp(&a.effective_priority().rank())
            .then(a.duration_minutes.cmp(&b.duration_minutes))
    });
    pending
}

/// One fixed block per event starting inside the window, sorted by start.
pub fn fixed_blocks(events: &[CalendarEvent], window: &WorkWindow) -> Vec<TimeBlock> {
    let mut blocks: Vec<TimeBlock> = events
        .iter()
        .filter(|e| window.admits_start(e.start_time))
        .map(TimeBlock::for_event)
        .collect();
    blocks.sort_by_key(|b| b.start_time);
    blocks
}
