//! Greedy day planner.
//!
//! Places tasks into the free intervals of a day that already holds fixed
//! calendar events:
//! - Drops completed tasks and orders the rest by priority, then duration
//! - Fills gaps first-fit around the fixed events inside the work window
//! - Adds breaks after long task sessions where the next gap allows it
//! - Sorts the result and reports what could not be placed
//!
//! Planning is a pure function of its inputs; nothing is kept between calls.

mod breaks;
mod normalize;
mod placement;

use std::collections::HashSet;

use crate::calendar::CalendarEvent;
use crate::error::ValidationError;
use crate::schedule::{SchedulePlan, Task, TimeBlock};
use crate::timeline::WorkWindow;

pub use breaks::{BreakConfig, BreakInjector};
pub use normalize::{fixed_blocks, placement_order, validate_inputs};
pub use placement::{place_task, Placement};

/// Day planner with a configurable break policy
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    breaks: BreakInjector,
}

impl Scheduler {
    /// Create a new scheduler with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom break config
    pub fn with_config(config: BreakConfig) -> Self {
        Self {
            breaks: BreakInjector::with_config(config),
        }
    }

    pub fn break_config(&self) -> &BreakConfig {
        self.breaks.config()
    }

    /// Build the plan for one day.
    ///
    /// # Arguments
    /// * `tasks` - Candidate tasks; completed ones are ignored
    /// * `events` - Fixed events; only those starting inside `window` are used
    /// * `window` - Working-day bounds for placement
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for non-positive durations, duplicate
    /// task ids or events ending before they start. Tasks that merely do
    /// not fit are reported in [`SchedulePlan::unscheduled_tasks`].
    pub fn compute_plan(
        &self,
        tasks: &[Task],
        events: &[CalendarEvent],
        window: &WorkWindow,
    ) -> Result<SchedulePlan, ValidationError> {
        validate_inputs(tasks, events)?;

        let order = placement_order(tasks);
        let mut blocks = fixed_blocks(events, window);
        let mut scheduled: HashSet<&str> = HashSet::with_capacity(order.len());

        for &task in &order {
            match place_task(&mut blocks, task, window) {
                Some(placement) => {
                    tracing::debug!(task = %task.id, ?placement, "placed task");
                    scheduled.insert(task.id.as_str());
                }
                None => {
                    tracing::debug!(task = %task.id, minutes = task.duration_minutes, "no gap fits task");
                }
            }
        }

        let mut blocks = self.breaks.inject(blocks);
        blocks.sort_by_key(|b| b.start_time);

        let unscheduled_tasks: Vec<Task> = tasks
            .iter()
            .filter(|t| !t.completed && !scheduled.contains(t.id.as_str()))
            .cloned()
            .collect();
        let total_duration_minutes = total_minutes(&blocks);

        tracing::info!(
            blocks = blocks.len(),
            total_minutes = total_duration_minutes,
            unscheduled = unscheduled_tasks.len(),
            "computed plan"
        );

        Ok(SchedulePlan {
            blocks,
            total_duration_minutes,
            unscheduled_tasks,
        })
    }
}

/// Plan a day with the default break policy.
pub fn compute_plan(
    tasks: &[Task],
    events: &[CalendarEvent],
    window: &WorkWindow,
) -> Result<SchedulePlan, ValidationError> {
    Scheduler::new().compute_plan(tasks, events, window)
}

/// Sum of block durations, accumulated in milliseconds and rounded to the
/// nearest minute.
fn total_minutes(blocks: &[TimeBlock]) -> i64 {
    let millis: i64 = blocks.iter().map(|b| b.duration().num_milliseconds()).sum();
    (millis as f64 / 60_000.0).round() as i64
}
