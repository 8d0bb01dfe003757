use pm_core::Sprint;

/// Outcome of a successful status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintStatusUpdate {
    pub success: bool,
    pub sprint: Sprint,
}
