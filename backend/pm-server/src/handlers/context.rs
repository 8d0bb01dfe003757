use pm_auth::{AdminRoles, MembershipDirectory};
use pm_core::Clock;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Resources passed to every sprint handler
#[derive(Clone)]
pub struct HandlerContext {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Organization membership lookup
    pub directory: Arc<dyn MembershipDirectory>,
    /// Source of "now" for date-window checks
    pub clock: Arc<dyn Clock>,
    /// Roles that may create sprints and change their status
    pub admin_roles: AdminRoles,
    /// Whether COMPLETED -> ACTIVE is allowed
    pub allow_reactivation: bool,
}
