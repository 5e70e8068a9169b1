//! Integration tests for day planning.
//!
//! Walks through whole-day scenarios: empty days, tasks around meetings,
//! break insertion and tasks that cannot fit.

use chrono::{DateTime, NaiveDate, Utc};
use dayplan_core::calendar::SampleCalendar;
use dayplan_core::{
    compute_plan, BlockKind, BreakConfig, CalendarEvent, CalendarSource, Priority, Scheduler, Task,
    ValidationError, WorkWindow,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 16).unwrap()
}

fn window() -> WorkWindow {
    WorkWindow::standard(date())
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    date().and_hms_opt(hour, minute, 0).unwrap().and_utc()
}

#[test]
fn test_single_task_on_empty_day() {
    let tasks = vec![Task::new("Write summary", 30).with_id("t1").with_priority(Priority::High)];

    let plan = compute_plan(&tasks, &[], &window()).unwrap();

    assert_eq!(plan.blocks.len(), 1);
    let block = &plan.blocks[0];
    assert_eq!(block.kind, BlockKind::Task);
    assert_eq!(block.start_time, at(8, 0));
    assert_eq!(block.end_time, at(8, 30));
    assert_eq!(block.task_id.as_deref(), Some("t1"));
    assert!(plan.unscheduled_tasks.is_empty());
    assert_eq!(plan.total_duration_minutes, 30);
}

#[test]
fn test_task_fits_before_first_event() {
    let tasks = vec![Task::new("Prep", 45).with_id("prep").with_priority(Priority::High)];
    let events = vec![CalendarEvent::new("standup", "Standup", at(9, 0), at(9, 30))];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    assert_eq!(plan.blocks.len(), 2);
    assert_eq!(plan.blocks[0].task_id.as_deref(), Some("prep"));
    assert_eq!(plan.blocks[0].start_time, at(8, 0));
    assert_eq!(plan.blocks[0].end_time, at(8, 45));
    assert_eq!(plan.blocks[1].event_id.as_deref(), Some("standup"));
    assert_eq!(plan.blocks[1].start_time, at(9, 0));
    assert_eq!(plan.blocks[1].end_time, at(9, 30));
}

#[test]
fn test_break_follows_long_session_when_gap_allows() {
    // The successor is what makes room measurable; a trailing event gives it one.
    let tasks = vec![Task::new("Deep work", 90).with_id("deep")];
    let events = vec![CalendarEvent::new("wrap", "Wrap-up", at(17, 30), at(18, 0))];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    let kinds: Vec<BlockKind> = plan.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Task, BlockKind::Break, BlockKind::Event]);
    let rest = &plan.blocks[1];
    assert_eq!(rest.start_time, at(9, 30));
    assert_eq!(rest.end_time, at(9, 45));
    assert_eq!(rest.title, "Break");
    assert_eq!(rest.id, "break-task-deep");
    assert_eq!(plan.total_duration_minutes, 90 + 15 + 30);
}

#[test]
fn test_lone_task_without_successor_gets_no_break() {
    // 90 minutes on an empty day: the gap to the end of the window is never
    // measured, so the session ends the plan without a break.
    let tasks = vec![Task::new("Deep work", 90).with_id("deep")];
    let plan = compute_plan(&tasks, &[], &window()).unwrap();
    assert_eq!(plan.blocks.len(), 1);
    assert_eq!(plan.blocks_of_kind(BlockKind::Break).count(), 0);
    assert_eq!(plan.blocks[0].end_time, at(9, 30));
}

#[test]
fn test_oversized_duration_is_unscheduled() {
    let tasks = vec![
        Task::new("Forever", 200_000_000_000).with_id("forever"),
        Task::new("Max", i64::MAX).with_id("max"),
        Task::new("Normal", 30).with_id("normal"),
    ];
    let events = vec![CalendarEvent::new("m", "Meeting", at(13, 0), at(14, 0))];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    let unscheduled: Vec<&str> = plan.unscheduled_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(unscheduled, vec!["forever", "max"]);
    assert_eq!(plan.blocks_of_kind(BlockKind::Task).count(), 1);
    assert_eq!(plan.total_duration_minutes, 90);
}

#[test]
fn test_oversized_break_config_stays_within_gap() {
    let scheduler = Scheduler::with_config(BreakConfig {
        duration_minutes: i64::MAX,
        ..BreakConfig::default()
    });
    let tasks = vec![Task::new("Deep work", 90).with_id("deep")];
    let events = vec![CalendarEvent::new("wrap", "Wrap-up", at(17, 30), at(18, 0))];

    let plan = scheduler.compute_plan(&tasks, &events, &window()).unwrap();

    let rest = plan.blocks_of_kind(BlockKind::Break).next().unwrap();
    assert_eq!(rest.start_time, at(9, 30));
    assert_eq!(rest.end_time, at(17, 30));
}

#[test]
fn test_task_longer_than_free_time_is_unscheduled() {
    let tasks = vec![Task::new("Whole day", 600).with_id("big")];
    let events = vec![CalendarEvent::new("m", "Meeting", at(13, 0), at(14, 0))];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    assert_eq!(plan.unscheduled_tasks.len(), 1);
    assert_eq!(plan.unscheduled_tasks[0].id, "big");
    assert_eq!(plan.blocks_of_kind(BlockKind::Task).count(), 0);
    assert_eq!(plan.blocks.len(), 1);
}

#[test]
fn test_sample_calendar_day() {
    let events = SampleCalendar.events_for(date()).unwrap();
    let tasks = vec![
        Task::new("Inbox", 20).with_id("inbox").with_priority(Priority::Low),
        Task::new("Design doc", 120).with_id("design").with_priority(Priority::High),
        Task::new("Bug triage", 45).with_id("triage").with_priority(Priority::High),
        Task::new("Expenses", 30).with_id("expenses"),
        Task::new("Done already", 30).with_id("done").completed(),
    ];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    let timeline: Vec<(&str, DateTime<Utc>, DateTime<Utc>)> = plan
        .blocks
        .iter()
        .map(|b| (b.id.as_str(), b.start_time, b.end_time))
        .collect();
    // Expenses lands right after the design doc, so the design session has
    // no free time left for a break.
    assert_eq!(
        timeline,
        vec![
            ("task-triage", at(8, 0), at(8, 45)),
            ("event-sample-1", at(9, 0), at(9, 30)),
            ("task-design", at(9, 30), at(11, 30)),
            ("task-expenses", at(11, 30), at(12, 0)),
            ("task-inbox", at(12, 0), at(12, 20)),
            ("event-sample-2", at(14, 0), at(15, 0)),
            ("event-sample-3", at(16, 30), at(17, 0)),
        ]
    );
    assert!(plan.unscheduled_tasks.is_empty());
    assert_eq!(plan.total_duration_minutes, 335);
}

#[test]
fn test_high_priority_forecloses_gap() {
    // The long high-priority task takes the only large gap even though the
    // medium tasks would have used it better.
    let events = vec![
        CalendarEvent::new("a", "A", at(8, 0), at(10, 0)),
        CalendarEvent::new("b", "B", at(12, 0), at(18, 0)),
    ];
    let tasks = vec![
        Task::new("small 1", 60).with_id("s1"),
        Task::new("small 2", 60).with_id("s2"),
        Task::new("big", 90).with_id("big").with_priority(Priority::High),
    ];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    let placed: Vec<&str> = plan
        .blocks_of_kind(BlockKind::Task)
        .filter_map(|b| b.task_id.as_deref())
        .collect();
    assert_eq!(placed, vec!["big"]);
    let unscheduled: Vec<&str> = plan.unscheduled_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(unscheduled, vec!["s1", "s2"]);
}

#[test]
fn test_events_outside_window_are_left_out() {
    let events = vec![
        CalendarEvent::new("early", "Gym", at(6, 30), at(7, 30)),
        CalendarEvent::new("edge", "Late call", at(18, 0), at(18, 30)),
        CalendarEvent::new("late", "Dinner", at(19, 0), at(20, 0)),
    ];

    let plan = compute_plan(&[], &events, &window()).unwrap();

    let ids: Vec<&str> = plan.blocks.iter().filter_map(|b| b.event_id.as_deref()).collect();
    assert_eq!(ids, vec!["edge"]);
}

#[test]
fn test_event_ending_after_window_blocks_tail() {
    let events = vec![CalendarEvent::new("offsite", "Offsite", at(8, 0), at(19, 0))];
    let tasks = vec![Task::new("Anything", 5).with_id("x")];

    let plan = compute_plan(&tasks, &events, &window()).unwrap();

    assert_eq!(plan.unscheduled_tasks.len(), 1);
    assert_eq!(plan.blocks[0].end_time, at(19, 0));
}

#[test]
fn test_custom_window_and_disabled_breaks() {
    let window = WorkWindow::for_date(date(), "09:00", "12:00").unwrap();
    let scheduler = Scheduler::with_config(BreakConfig::disabled());
    let tasks = vec![
        Task::new("Long", 120).with_id("long"),
        Task::new("Short", 30).with_id("short"),
        Task::new("Medium", 45).with_id("medium"),
    ];
    let events = vec![CalendarEvent::new("m", "Meeting", at(11, 30), at(12, 0))];

    let plan = scheduler.compute_plan(&tasks, &events, &window).unwrap();

    assert_eq!(plan.blocks_of_kind(BlockKind::Break).count(), 0);
    assert_eq!(plan.blocks[0].task_id.as_deref(), Some("short"));
    assert_eq!(plan.blocks[0].start_time, at(9, 0));
    assert_eq!(plan.blocks[1].task_id.as_deref(), Some("medium"));
    assert_eq!(plan.blocks[1].start_time, at(9, 30));
    assert_eq!(plan.blocks[1].end_time, at(10, 15));
    // 75 minutes remain before the meeting and nothing after it
    assert_eq!(plan.unscheduled_tasks.len(), 1);
    assert_eq!(plan.unscheduled_tasks[0].id, "long");
}

#[test]
fn test_invalid_input_is_rejected() {
    let tasks = vec![Task::new("Nothing", 0).with_id("zero")];
    assert!(matches!(
        compute_plan(&tasks, &[], &window()),
        Err(ValidationError::InvalidDuration { .. })
    ));

    let events = vec![CalendarEvent::new("bad", "Backwards", at(10, 0), at(9, 0))];
    assert!(matches!(
        compute_plan(&[], &events, &window()),
        Err(ValidationError::InvalidEventRange { .. })
    ));

    let tasks = vec![Task::new("a", 10).with_id("same"), Task::new("b", 20).with_id("same")];
    assert_eq!(
        compute_plan(&tasks, &[], &window()).unwrap_err(),
        ValidationError::DuplicateTaskId("same".to_string())
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let tasks = vec![Task::new("Write", 30).with_id("w")];
    let plan = compute_plan(&tasks, &[], &window()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["total_duration_minutes"], 30);
    assert_eq!(json["blocks"][0]["kind"], "task");
    assert_eq!(json["blocks"][0]["task_id"], "w");
    assert!(json["blocks"][0].get("event_id").is_none());
}
