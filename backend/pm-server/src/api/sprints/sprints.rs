//! Sprint REST API handlers
//!
//! Thin HTTP wrappers: parse and validate the request, then delegate to the
//! sprint handlers which own authorization and transition rules.

use crate::{
    ApiError, ApiResult, AppState, Caller, CreateSprintRequest, SprintResponse,
    UpdateSprintStatusRequest, UpdateSprintStatusResponse, handle_create_sprint,
    handle_update_sprint_status,
};

use pm_core::{NewSprint, SprintStatus};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/projects/{project_id}/sprints
///
/// Create a sprint. Requires an admin role in the project's organization.
pub async fn create_sprint(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(project_id): Path<String>,
    Json(req): Json<CreateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    let project_id = parse_uuid(&project_id, "project_id")?;

    // Informational only, new sprints always start PLANNED
    let status = req
        .status
        .as_deref()
        .and_then(|s| SprintStatus::from_str(s).ok());

    let input = NewSprint {
        name: req.name,
        start_date: parse_timestamp(&req.start_date, "start_date")?,
        end_date: parse_timestamp(&req.end_date, "end_date")?,
        status,
    };

    let ctx = state.handler_context();
    let sprint = handle_create_sprint(&ctx, caller.as_ref(), project_id, input).await?;

    Ok(Json(SprintResponse {
        sprint: sprint.into(),
    }))
}

/// PUT /api/v1/sprints/{sprint_id}/status
///
/// Change a sprint's status, subject to the transition rules.
pub async fn update_sprint_status(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(sprint_id): Path<String>,
    Json(req): Json<UpdateSprintStatusRequest>,
) -> ApiResult<Json<UpdateSprintStatusResponse>> {
    let sprint_id = parse_uuid(&sprint_id, "sprint_id")?;
    let new_status = parse_status(&req.status)?;

    let ctx = state.handler_context();
    let update = handle_update_sprint_status(&ctx, caller.as_ref(), sprint_id, new_status).await?;

    Ok(Json(update.into()))
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_uuid(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| ApiError::validation(format!("Invalid {}: '{}'", field, value), field))
}

fn parse_status(value: &str) -> ApiResult<SprintStatus> {
    SprintStatus::from_str(value).map_err(|_| {
        ApiError::validation(
            format!(
                "Invalid status: '{}'. Valid values: PLANNED, ACTIVE, COMPLETED",
                value
            ),
            "status",
        )
    })
}

fn parse_timestamp(value: &str, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| {
            ApiError::validation(
                format!("Invalid {}: '{}' is not an RFC 3339 timestamp", field, value),
                field,
            )
        })
}
