use serde::Deserialize;

/// Request body for changing a sprint's status
#[derive(Debug, Deserialize)]
pub struct UpdateSprintStatusRequest {
    /// PLANNED, ACTIVE or COMPLETED
    pub status: String,
}
