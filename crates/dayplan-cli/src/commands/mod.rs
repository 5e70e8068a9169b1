pub mod calendar;
pub mod config;
pub mod plan;
