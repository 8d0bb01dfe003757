use crate::{SprintDto, SprintStatusUpdate};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateSprintStatusResponse {
    pub success: bool,
    pub sprint: SprintDto,
}

impl From<SprintStatusUpdate> for UpdateSprintStatusResponse {
    fn from(update: SprintStatusUpdate) -> Self {
        Self {
            success: update.success,
            sprint: update.sprint.into(),
        }
    }
}
