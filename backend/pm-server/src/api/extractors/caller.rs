//! Axum extractor for the authenticated caller

use crate::{ApiError, AppState, identity::resolve_identity};

use pm_auth::CallerIdentity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The caller behind a request, `None` when no valid session token was sent.
///
/// Reuses the identity resolved by the access gate when it ran, otherwise
/// verifies the token itself.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<CallerIdentity>);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(caller) = parts.extensions.get::<Caller>() {
                return Ok(caller.clone());
            }

            Ok(Caller(resolve_identity(
                &parts.headers,
                &state.session_cookie,
                &state.jwt_validator,
            )))
        }
    }
}
