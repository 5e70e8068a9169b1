//! Timeline primitives: the working window and the gaps inside it.

mod gap;
mod window;

pub use gap::{free_gaps, TimeGap};
pub use window::{parse_hhmm, WorkWindow, DEFAULT_WORK_END, DEFAULT_WORK_START};
