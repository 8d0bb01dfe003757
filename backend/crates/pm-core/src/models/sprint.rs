use crate::{NewSprint, SprintStatus};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,
    /// Owning project, fixed at creation
    pub project_id: Uuid,

    pub name: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub status: SprintStatus,

    pub created_at: DateTime<Utc>,
}

impl Sprint {
    /// Build a sprint from creation input. The status is always `Planned`;
    /// whatever the caller put in `input.status` is discarded. Timestamps are
    /// cut to the millisecond precision they are stored at.
    pub fn planned(project_id: Uuid, input: NewSprint, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name: input.name,
            start_date: input.start_date.trunc_subsecs(3),
            end_date: input.end_date.trunc_subsecs(3),
            status: SprintStatus::Planned,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    /// True when `now` falls inside `[start_date, end_date]`, bounds included
    pub fn window_contains(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }
}
