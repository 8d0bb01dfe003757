mod membership_record;
mod project;
mod sprint;
mod sprint_status;
