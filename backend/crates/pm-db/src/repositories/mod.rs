pub mod project_repository;
pub mod sprint_repository;

mod row;
