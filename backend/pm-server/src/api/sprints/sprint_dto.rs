use pm_core::Sprint;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Sprint DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct SprintDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: String,
}

fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id.to_string(),
            project_id: s.project_id.to_string(),
            name: s.name,
            start_date: rfc3339(s.start_date),
            end_date: rfc3339(s.end_date),
            status: s.status.as_str().to_string(),
            created_at: rfc3339(s.created_at),
        }
    }
}
