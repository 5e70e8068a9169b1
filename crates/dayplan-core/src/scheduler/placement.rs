//! First-fit placement of a single task into the ordered block list.
//!
//! Candidate gaps are tried in a fixed precedence and the first that fits
//! wins:
//! 1. before the first block, starting at the window start
//! 2. between two adjacent blocks, starting at the earlier block's end
//! 3. after the last block, if the task still ends by the window end
//! 4. on an empty day, at the window start
//!
//! The cursor for step 1 is always the window start; it does not advance
//! between tasks. Tasks pack one after another only because each placed
//! block joins the list before the next task is tried.

use chrono::Duration;

use crate::schedule::{Task, TimeBlock};
use crate::timeline::{TimeGap, WorkWindow};

/// Which candidate gap received a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    BeforeFirst,
    /// Inserted right after the block at this index.
    Between { after: usize },
    AfterLast,
    EmptyDay,
}

/// Try to place `task`, inserting its block into `blocks` on success.
///
/// `blocks` must already be ordered by start time; the insertion keeps it so.
/// Returns `None` when no candidate fits, leaving `blocks` untouched. A
/// duration too large to represent as a time span fits nowhere.
pub fn place_task(blocks: &mut Vec<TimeBlock>, task: &Task, window: &WorkWindow) -> Option<Placement> {
    let length = Duration::try_minutes(task.duration_minutes)?;
    let cursor = window.start;

    if let Some(first) = blocks.first() {
        if TimeGap::between(cursor, first.start_time).can_fit(length) {
            blocks.insert(0, TimeBlock::for_task(task, cursor));
            return Some(Placement::BeforeFirst);
        }
    }

    if let Some(i) = blocks
        .windows(2)
        .position(|pair| TimeGap::after(&pair[0], &pair[1]).can_fit(length))
    {
        let start = blocks[i].end_time;
        blocks.insert(i + 1, TimeBlock::for_task(task, start));
        return Some(Placement::Between { after: i });
    }

    let (start, placement) = match blocks.last() {
        Some(last) => (last.end_time, Placement::AfterLast),
        None => (cursor, Placement::EmptyDay),
    };
    if start.checked_add_signed(length)? > window.end {
        return None;
    }
    blocks.push(TimeBlock::for_task(task, start));
    Some(placement)
}
