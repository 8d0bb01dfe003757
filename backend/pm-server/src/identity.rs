//! Session token lookup shared by the access gate and the caller extractor.

use pm_auth::{CallerIdentity, JwtValidator};

use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;
use log::{debug, warn};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolve the caller from the bearer header, falling back to the session
/// cookie. Anything missing or failing verification yields `None`.
pub fn resolve_identity(
    headers: &HeaderMap,
    session_cookie: &str,
    validator: &JwtValidator,
) -> Option<CallerIdentity> {
    let token = bearer_token(headers).or_else(|| cookie_token(headers, session_cookie))?;

    match validator.validate(&token) {
        Ok(claims) => {
            let identity = CallerIdentity::from_claims(claims);
            debug!(
                "Resolved caller {} (organization: {:?})",
                identity.user_id, identity.organization_id
            );
            Some(identity)
        }
        Err(e) => {
            warn!("Session token rejected: {}", e);
            None
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
        _ => {
            warn!("Invalid authorization scheme: expected 'Bearer'");
            None
        }
    }
}

fn cookie_token(headers: &HeaderMap, session_cookie: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(session_cookie)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
