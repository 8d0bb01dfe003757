//! Routing policy applied in front of every page and API request.
//!
//! Pure decision logic: it looks at the request path and the caller's
//! session and never touches storage.

use crate::CallerIdentity;

/// Where org-less users are sent
pub const ONBOARDING_PATH: &str = "/onboarding";

/// Path prefixes that require a signed-in user. Matching is by prefix, so
/// `/project` covers `/project/42` and `/project/42/board`.
pub const PROTECTED_PREFIXES: [&str; 5] =
    ["/onboarding", "/organisation", "/project", "/issue", "/sprint"];

/// Exact paths a signed-in user may visit before joining an organization
pub const ALLOWED_WITHOUT_ORGANIZATION: [&str; 3] = ["/", ONBOARDING_PATH, "/project/create"];

const ORGANIZATION_PREFIX: &str = "/organisation/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through unmodified
    Continue,
    /// Send the caller to the identity provider's sign-in flow
    RedirectToSignIn,
    /// Send the caller to [`ONBOARDING_PATH`]
    RedirectToOnboarding,
}

pub fn evaluate_access(path: &str, identity: Option<&CallerIdentity>) -> GateDecision {
    match identity {
        None if is_protected(path) => GateDecision::RedirectToSignIn,
        None => GateDecision::Continue,
        Some(caller)
            if !caller.has_active_organization()
                && !ALLOWED_WITHOUT_ORGANIZATION.contains(&path)
                && !is_organization_by_slug(path) =>
        {
            GateDecision::RedirectToOnboarding
        }
        Some(_) => GateDecision::Continue,
    }
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// `/organisation/<slug>` optionally followed by `/...`
pub fn is_organization_by_slug(path: &str) -> bool {
    path.strip_prefix(ORGANIZATION_PREFIX)
        .and_then(|rest| rest.split('/').next())
        .is_some_and(|slug| !slug.is_empty())
}
