//! Project entity - owns sprints and belongs to exactly one organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// Identity-provider organization id. Never changes after creation and
    /// is the only thing sprint authorization is decided on.
    pub organization_id: String,
    pub name: String,
    /// Short identifier, unique within the organization (e.g. "WEB")
    pub key: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(organization_id: String, name: String, key: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name,
            key,
            description: None,
            created_at: Utc::now(),
        }
    }
}
