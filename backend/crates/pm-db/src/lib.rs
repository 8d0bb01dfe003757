pub mod error;
pub mod migrations;
pub mod repositories;

pub use error::{DbError, Result};
pub use migrations::{MIGRATOR, run_migrations};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sprint_repository::SprintRepository;
