pub mod create_sprint_request;
pub mod sprint_dto;
pub mod sprint_response;
pub mod sprints;
pub mod update_sprint_status_request;
pub mod update_sprint_status_response;
