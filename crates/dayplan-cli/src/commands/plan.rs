//! `dayplan plan`: read tasks, gather events, print the day.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use dayplan_core::error::Result;
use dayplan_core::scheduler::validate_inputs;
use dayplan_core::timeline::free_gaps;
use dayplan_core::{BreakConfig, Config, SchedulePlan, Scheduler, Task, WorkWindow};

use super::calendar::CalendarArgs;

#[derive(Args)]
pub struct PlanArgs {
    /// JSON file with an array of tasks
    #[arg(long)]
    tasks: PathBuf,
    #[command(flatten)]
    calendar: CalendarArgs,
    /// Day to plan (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Start of the working day (HH:MM, default from config)
    #[arg(long)]
    start: Option<String>,
    /// End of the working day (HH:MM, default from config)
    #[arg(long)]
    end: Option<String>,
    /// Do not insert breaks
    #[arg(long)]
    no_breaks: bool,
    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let config = Config::load_or_default();
    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let window = WorkWindow::for_date(
        date,
        args.start.as_deref().unwrap_or(&config.window.start),
        args.end.as_deref().unwrap_or(&config.window.end),
    )?;

    let tasks = Task::load_all(&args.tasks)?;
    // completed tasks are checked too, even when nothing is left to plan
    validate_inputs(&tasks, &[])?;
    if tasks.iter().all(|t| t.completed) {
        println!("No pending tasks to plan.");
        return Ok(());
    }
    let events = args.calendar.load_events(&config, date)?;

    let scheduler = if args.no_breaks {
        Scheduler::with_config(BreakConfig::disabled())
    } else {
        config.scheduler()
    };
    let plan = scheduler.compute_plan(&tasks, &events, &window)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_text(&plan, &window));
    }
    Ok(())
}

/// Human-readable schedule: one line per block, then totals and leftovers.
pub fn render_text(plan: &SchedulePlan, window: &WorkWindow) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Schedule for {} ({} - {}): {} blocks",
        window.date(),
        window.start.format("%H:%M"),
        window.end.format("%H:%M"),
        plan.blocks.len()
    );

    for block in &plan.blocks {
        let _ = writeln!(
            out,
            "{} - {}  {:>3}m  [{}] {}",
            block.start_time.format("%H:%M"),
            block.end_time.format("%H:%M"),
            block.duration_minutes(),
            block.kind.as_str(),
            block.title
        );
    }

    let free: i64 = free_gaps(&plan.blocks, window, 1)
        .iter()
        .map(|g| g.duration_minutes())
        .sum();
    let _ = writeln!(out, "Total scheduled: {}m, free: {}m", plan.total_duration_minutes, free);

    if !plan.unscheduled_tasks.is_empty() {
        let _ = writeln!(out, "Unscheduled Tasks ({})", plan.unscheduled_tasks.len());
        for task in &plan.unscheduled_tasks {
            let _ = writeln!(out, "  - {} ({}m)", task.title, task.duration_minutes);
        }
    }
    out
}
