//! Integration tests for the composed dashboard and the recompute ticker.

use std::time::Duration as StdDuration;

use chrono::{Duration, TimeZone, Utc};
use studyhub_core::notes::default_semesters;
use studyhub_core::{
    Clock, Config, Dashboard, Event, Grade, ManualClock, Priority, View,
};

fn dashboard(clock: &ManualClock) -> Dashboard<ManualClock> {
    Dashboard::with_clock(clock.clone(), default_semesters(), View::Home)
}

#[test]
fn views_do_not_share_state() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap());
    let mut dash = dashboard(&clock);

    dash.gpa.add_subject("Math", 4, Grade::A);
    dash.notes.toggle(1);
    dash.shell.set_active_view(View::Deadlines);

    assert_eq!(dash.active_view(), View::Deadlines);
    assert!(dash.deadlines.assignments().is_empty());
    assert_eq!(dash.gpa.subjects().len(), 1);
    assert!(dash.notes.is_expanded(1));
}

#[test]
fn from_config_honours_default_view_and_semesters() {
    let mut config = Config::default();
    config.set("shell.default_view", "notes").unwrap();
    config.notes.semesters.truncate(2);

    let dash = Dashboard::from_config(&config);
    assert_eq!(dash.active_view(), View::Notes);
    assert_eq!(dash.notes.semesters().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn ticker_drives_recompute() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap());
    let mut dash = dashboard(&clock);
    let start = clock.now();
    dash.deadlines
        .add_assignment("Physics", "Lab report", start + Duration::days(8));
    assert_eq!(dash.deadlines.assignments()[0].priority(), Priority::Normal);

    dash.deadlines.start_ticker(StdDuration::from_secs(3600));
    for _ in 0..24 {
        clock.advance(Duration::hours(1));
        let event = dash.deadlines.next_tick().await;
        assert!(matches!(event, Some(Event::DeadlinesRecomputed { count: 1, .. })));
    }

    assert_eq!(dash.deadlines.assignments()[0].days_left(), 7);
    assert_eq!(dash.deadlines.assignments()[0].priority(), Priority::Upcoming);

    dash.deadlines.stop_ticker();
    assert!(dash.deadlines.next_tick().await.is_none());
}

#[test]
fn every_view_stamps_events_with_the_shared_clock() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap());
    let mut dash = dashboard(&clock);
    clock.advance(Duration::minutes(90));
    let expected = clock.now();

    let stamps = [
        dash.shell.set_active_view(View::Gpa),
        dash.gpa.add_subject("Math", 4, Grade::A).unwrap(),
        dash.notes.toggle(3).unwrap(),
        dash.deadlines
            .add_assignment("Math", "Quiz", expected + Duration::days(1))
            .unwrap(),
    ];
    for event in stamps {
        let at = match event {
            Event::ViewChanged { at, .. }
            | Event::SubjectAdded { at, .. }
            | Event::SemesterToggled { at, .. }
            | Event::AssignmentAdded { at, .. } => at,
            other => panic!("unexpected event {other:?}"),
        };
        assert_eq!(at, expected);
    }
}
