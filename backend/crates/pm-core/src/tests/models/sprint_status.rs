use crate::{CoreError, SprintStatus};

use std::str::FromStr;

#[test]
fn test_sprint_status_as_str() {
    assert_eq!(SprintStatus::Planned.as_str(), "PLANNED");
    assert_eq!(SprintStatus::Active.as_str(), "ACTIVE");
    assert_eq!(SprintStatus::Completed.as_str(), "COMPLETED");
}

#[test]
fn test_sprint_status_from_str() {
    assert_eq!(
        SprintStatus::from_str("PLANNED").unwrap(),
        SprintStatus::Planned
    );
    assert_eq!(
        SprintStatus::from_str("ACTIVE").unwrap(),
        SprintStatus::Active
    );
    assert_eq!(
        SprintStatus::from_str("COMPLETED").unwrap(),
        SprintStatus::Completed
    );
}

#[test]
fn given_unknown_status_when_parsed_then_invalid_sprint_status_error() {
    let result = SprintStatus::from_str("CANCELLED");

    assert!(matches!(
        result,
        Err(CoreError::InvalidSprintStatus { ref value, .. }) if value == "CANCELLED"
    ));
}

#[test]
fn given_lowercase_status_when_parsed_then_rejected() {
    assert!(SprintStatus::from_str("active").is_err());
}

#[test]
fn test_sprint_status_serializes_as_upper_case() {
    let json = serde_json::to_string(&SprintStatus::Completed).unwrap();
    assert_eq!(json, "\"COMPLETED\"");
}
