use crate::{NewSprint, Sprint, SprintStatus};

use chrono::{DateTime, Duration, TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

fn two_week_sprint() -> Sprint {
    let input = NewSprint {
        name: "S1".to_string(),
        start_date: jan(1),
        end_date: jan(14),
        status: None,
    };
    Sprint::planned(Uuid::new_v4(), input, jan(1))
}

#[test]
fn given_supplied_status_when_planned_then_status_is_forced_to_planned() {
    let project_id = Uuid::new_v4();
    let input = NewSprint {
        name: "S1".to_string(),
        start_date: jan(1),
        end_date: jan(14),
        status: Some(SprintStatus::Completed),
    };

    let sprint = Sprint::planned(project_id, input, jan(1));

    assert_that!(sprint.status, eq(SprintStatus::Planned));
    assert_that!(sprint.project_id, eq(project_id));
    assert_that!(sprint.name, eq("S1"));
}

#[test]
fn given_instant_inside_window_when_checked_then_contained() {
    let sprint = two_week_sprint();
    assert!(sprint.window_contains(jan(7)));
}

#[test]
fn given_window_bounds_when_checked_then_both_inclusive() {
    let sprint = two_week_sprint();
    assert!(sprint.window_contains(jan(1)));
    assert!(sprint.window_contains(jan(14)));
}

#[test]
fn given_instant_outside_window_when_checked_then_not_contained() {
    let sprint = two_week_sprint();
    assert!(!sprint.window_contains(jan(1) - Duration::milliseconds(1)));
    assert!(!sprint.window_contains(jan(14) + Duration::milliseconds(1)));
}

#[test]
fn given_sub_millisecond_timestamps_when_planned_then_cut_to_milliseconds() {
    let input = NewSprint {
        name: "S1".to_string(),
        start_date: jan(1) + Duration::microseconds(1_250),
        end_date: jan(14) + Duration::microseconds(900),
        status: None,
    };

    let sprint = Sprint::planned(Uuid::new_v4(), input, jan(1) + Duration::nanoseconds(7));

    assert_that!(sprint.start_date, eq(jan(1) + Duration::milliseconds(1)));
    assert_that!(sprint.end_date, eq(jan(14)));
    assert_that!(sprint.created_at, eq(jan(1)));
}
