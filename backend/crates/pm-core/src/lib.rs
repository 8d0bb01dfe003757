pub mod clock;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result as CoreResult};
pub use models::membership_record::MembershipRecord;
pub use models::new_sprint::NewSprint;
pub use models::project::Project;
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::sprint_with_project::SprintWithProject;
