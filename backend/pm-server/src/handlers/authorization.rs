use crate::{HandlerContext, HandlerError, HandlerResult};

use pm_auth::CallerIdentity;
use pm_core::MembershipRecord;

use log::{debug, warn};

/// Fail with `Unauthorized` when there is no resolved caller
#[track_caller]
pub fn require_caller(caller: Option<&CallerIdentity>) -> HandlerResult<&CallerIdentity> {
    caller.ok_or_else(HandlerError::unauthorized)
}

/// Check that the caller belongs to `organization_id` with an admin role.
///
/// Returns the caller's membership. `denial` is the message used when the
/// caller is a member without an admin role.
pub async fn require_org_admin(
    ctx: &HandlerContext,
    caller: &CallerIdentity,
    organization_id: &str,
    denial: &str,
) -> HandlerResult<MembershipRecord> {
    let membership = ctx
        .directory
        .find_membership(organization_id, &caller.user_id)
        .await
        .map_err(|e| {
            warn!(
                "Membership lookup for organization {} failed: {}",
                organization_id, e
            );
            HandlerError::from(e)
        })?
        .ok_or_else(|| {
            debug!(
                "User {} is not a member of organization {}",
                caller.user_id, organization_id
            );
            HandlerError::not_a_member()
        })?;

    let role = membership.normalized_role();
    if !ctx.admin_roles.permits(&role) {
        debug!(
            "User {} has role '{}' in organization {}, admin required",
            caller.user_id, role, organization_id
        );
        return Err(HandlerError::forbidden(denial));
    }

    Ok(membership)
}
