pub mod access_gate;
pub mod api;
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod health;
pub mod identity;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    sprints::{
        create_sprint_request::CreateSprintRequest,
        sprint_dto::SprintDto,
        sprint_response::SprintResponse,
        sprints::{create_sprint, update_sprint_status},
        update_sprint_status_request::UpdateSprintStatusRequest,
        update_sprint_status_response::UpdateSprintStatusResponse,
    },
};
pub use app_state::AppState;
pub use handlers::{
    context::HandlerContext,
    error::{HandlerError, Result as HandlerResult},
    sprint::{handle_create_sprint, handle_update_sprint_status, validate_status_transition},
    sprint_status_update::SprintStatusUpdate,
};

pub use crate::routes::build_router;
