pub mod authorization;
pub mod context;
pub mod error;
pub mod sprint;
pub mod sprint_status_update;
