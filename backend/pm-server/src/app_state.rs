use crate::HandlerContext;

use pm_auth::{AdminRoles, JwtValidator, MembershipDirectory};
use pm_core::Clock;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for the HTTP layer
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub directory: Arc<dyn MembershipDirectory>,
    pub clock: Arc<dyn Clock>,
    pub admin_roles: AdminRoles,
    pub allow_reactivation: bool,
    /// Where unauthenticated page requests are sent
    pub sign_in_url: String,
    /// Cookie read for the session token when no bearer header is present
    pub session_cookie: String,
}

impl AppState {
    /// Resources the sprint handlers need for one call
    pub fn handler_context(&self) -> HandlerContext {
        HandlerContext {
            pool: self.pool.clone(),
            directory: Arc::clone(&self.directory),
            clock: Arc::clone(&self.clock),
            admin_roles: self.admin_roles.clone(),
            allow_reactivation: self.allow_reactivation,
        }
    }
}
