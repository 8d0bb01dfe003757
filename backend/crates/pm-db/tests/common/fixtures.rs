use pm_core::{Project, Sprint, SprintStatus};

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

pub const TEST_ORG_ID: &str = "org_2test";

/// Creates a test Project owned by `TEST_ORG_ID`
pub fn create_test_project() -> Project {
    Project {
        id: Uuid::new_v4(),
        organization_id: TEST_ORG_ID.to_string(),
        name: "Test Project".to_string(),
        key: "TEST".to_string(),
        description: Some("Test project description".to_string()),
        created_at: Utc::now(),
    }
}

/// Creates a two-week PLANNED sprint starting 2024-01-01
pub fn create_test_sprint(project_id: Uuid) -> Sprint {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Sprint {
        id: Uuid::new_v4(),
        project_id,
        name: "Test Sprint".to_string(),
        start_date: start,
        end_date: start + Duration::days(13),
        status: SprintStatus::Planned,
        created_at: Utc.with_ymd_and_hms(2023, 12, 20, 12, 0, 0).unwrap(),
    }
}
