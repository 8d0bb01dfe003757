use serde::Deserialize;

/// Request body for creating a sprint
#[derive(Debug, Deserialize)]
pub struct CreateSprintRequest {
    pub name: String,

    /// RFC 3339 timestamp
    pub start_date: String,

    /// RFC 3339 timestamp
    pub end_date: String,

    /// Accepted and ignored; new sprints are always PLANNED
    #[serde(default)]
    pub status: Option<String>,
}
