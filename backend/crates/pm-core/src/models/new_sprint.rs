use crate::SprintStatus;

use chrono::{DateTime, Utc};

/// Caller-supplied fields for a new sprint
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Accepted for compatibility with older clients and ignored
    pub status: Option<SprintStatus>,
}
