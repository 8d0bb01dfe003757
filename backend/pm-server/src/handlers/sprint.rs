use crate::handlers::authorization::{require_caller, require_org_admin};
use crate::{HandlerContext, HandlerError, HandlerResult, SprintStatusUpdate};

use pm_auth::CallerIdentity;
use pm_core::{NewSprint, Sprint, SprintStatus, SprintWithProject};
use pm_db::{ProjectRepository, SprintRepository};

use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

const CREATE_DENIED: &str = "Only Admin can create a sprint";
const UPDATE_DENIED: &str = "Only Admin can make this change";

/// Create a sprint in `project_id`. The new sprint always starts PLANNED.
pub async fn handle_create_sprint(
    ctx: &HandlerContext,
    caller: Option<&CallerIdentity>,
    project_id: Uuid,
    input: NewSprint,
) -> HandlerResult<Sprint> {
    let caller = require_caller(caller)?;

    let project = ProjectRepository::new(ctx.pool.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| HandlerError::not_found("Project not found"))?;

    require_org_admin(ctx, caller, &project.organization_id, CREATE_DENIED).await?;

    if let Some(requested) = input.status
        && requested != SprintStatus::Planned
    {
        debug!(
            "Ignoring requested status {} for new sprint in project {}",
            requested, project.id
        );
    }

    let sprint = Sprint::planned(project.id, input, ctx.clock.now());
    SprintRepository::new(ctx.pool.clone())
        .create(&sprint)
        .await?;

    info!(
        "User {} created sprint {} ({}) in project {}",
        caller.user_id, sprint.id, sprint.name, project.id
    );

    Ok(sprint)
}

/// Move a sprint to `new_status` after membership, role and transition checks
pub async fn handle_update_sprint_status(
    ctx: &HandlerContext,
    caller: Option<&CallerIdentity>,
    sprint_id: Uuid,
    new_status: SprintStatus,
) -> HandlerResult<SprintStatusUpdate> {
    let caller = require_caller(caller)?;

    let repo = SprintRepository::new(ctx.pool.clone());
    let SprintWithProject { sprint, project } = repo
        .find_by_id_with_project(sprint_id)
        .await?
        .ok_or_else(|| HandlerError::not_found("Sprint not found"))?;

    require_org_admin(ctx, caller, &project.organization_id, UPDATE_DENIED).await?;

    validate_status_transition(&sprint, new_status, ctx.clock.now(), ctx.allow_reactivation)?;

    // The row can disappear between the read above and this write
    let updated = repo
        .update_status(sprint.id, new_status)
        .await?
        .ok_or_else(|| HandlerError::not_found("Sprint not found"))?;

    info!(
        "User {} moved sprint {} from {} to {}",
        caller.user_id, updated.id, sprint.status, updated.status
    );

    Ok(SprintStatusUpdate {
        success: true,
        sprint: updated,
    })
}

/// Transition rules:
/// - ACTIVE requires `now` inside the sprint window
/// - COMPLETED requires the sprint to be ACTIVE
/// - PLANNED is unrestricted
#[track_caller]
pub fn validate_status_transition(
    sprint: &Sprint,
    new_status: SprintStatus,
    now: DateTime<Utc>,
    allow_reactivation: bool,
) -> HandlerResult<()> {
    match new_status {
        SprintStatus::Active => {
            if !allow_reactivation && sprint.status == SprintStatus::Completed {
                return Err(HandlerError::invalid_transition(
                    "Cannot reactivate a completed sprint",
                ));
            }
            if !sprint.window_contains(now) {
                return Err(HandlerError::out_of_date_range(
                    "Cannot start sprint outside of its date range",
                ));
            }
            Ok(())
        }
        SprintStatus::Completed => {
            if sprint.status != SprintStatus::Active {
                return Err(HandlerError::invalid_transition(
                    "Can only complete an active sprint",
                ));
            }
            Ok(())
        }
        SprintStatus::Planned => Ok(()),
    }
}
