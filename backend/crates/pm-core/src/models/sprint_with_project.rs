use crate::{Project, Sprint};

/// A sprint loaded together with its owning project
#[derive(Debug, Clone)]
pub struct SprintWithProject {
    pub sprint: Sprint,
    pub project: Project,
}
