use crate::{AppState, access_gate::access_gate, create_sprint, health, update_sprint_status};

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Sprint API
        .route("/api/v1/projects/{project_id}/sprints", post(create_sprint))
        .route("/api/v1/sprints/{sprint_id}/status", put(update_sprint_status))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Pages are served elsewhere; the gate still decides redirects for them
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
