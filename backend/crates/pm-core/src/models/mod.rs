pub mod membership_record;
pub mod new_sprint;
pub mod project;
pub mod sprint;
pub mod sprint_status;
pub mod sprint_with_project;
