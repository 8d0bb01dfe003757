//! Edge middleware: redirects anonymous users away from protected pages and
//! org-less users to onboarding before any handler runs.

use crate::{AppState, Caller, identity::resolve_identity};

use pm_auth::{GateDecision, ONBOARDING_PATH, evaluate_access, gate_applies};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use log::debug;
use url::form_urlencoded;

const REDIRECT_PARAM: &str = "redirect_url";

pub async fn access_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !gate_applies(&path) {
        return next.run(request).await;
    }

    let identity = resolve_identity(
        request.headers(),
        &state.session_cookie,
        &state.jwt_validator,
    );

    match evaluate_access(&path, identity.as_ref()) {
        GateDecision::Continue => {
            // Handlers read the resolved caller instead of verifying the token again
            request.extensions_mut().insert(Caller(identity));
            next.run(request).await
        }
        GateDecision::RedirectToSignIn => {
            let original = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or(path.as_str());
            debug!("Anonymous request to {}, redirecting to sign-in", original);
            Redirect::temporary(&sign_in_location(&state.sign_in_url, original)).into_response()
        }
        GateDecision::RedirectToOnboarding => {
            debug!("Caller without organization on {}, redirecting to onboarding", path);
            Redirect::temporary(ONBOARDING_PATH).into_response()
        }
    }
}

/// Sign-in URL carrying the originally requested location
pub fn sign_in_location(sign_in_url: &str, original: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_PARAM, original)
        .finish();
    let separator = if sign_in_url.contains('?') { '&' } else { '?' };
    format!("{sign_in_url}{separator}{query}")
}
