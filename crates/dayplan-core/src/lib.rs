//! # Dayplan Core Library
//!
//! Places a list of tasks into the free intervals of a working day that
//! already contains fixed calendar events, producing an ordered plan with
//! breaks after long sessions. The `dayplan` CLI is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Scheduler**: normalize inputs, place tasks first-fit, inject breaks,
//!   summarize. A pure, synchronous function of its inputs.
//! - **Timeline**: the working-day window and gap arithmetic
//! - **Calendar**: event type and the [`CalendarSource`] seam for supplying
//!   events from outside
//! - **Storage**: TOML configuration for window, break policy and calendar
//!
//! ## Key Components
//!
//! - [`compute_plan`] / [`Scheduler`]: build a [`SchedulePlan`]
//! - [`WorkWindow`]: bounds for placement
//! - [`Config`]: persisted defaults

pub mod calendar;
pub mod error;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod timeline;

pub use calendar::{CalendarConfig, CalendarEvent, CalendarKind, CalendarSource};
pub use error::{CalendarError, ConfigError, CoreError, ValidationError};
pub use schedule::{BlockKind, Priority, SchedulePlan, Task, TimeBlock};
pub use scheduler::{compute_plan, BreakConfig, Scheduler};
pub use storage::Config;
pub use timeline::{TimeGap, WorkWindow};
