use crate::middleware::{cors::cors_layer, request_logging::log_request};
use crate::{ApiError, AppState, diagnostics, health, list_projects, submit_contact};

use axum::{
    Router,
    http::Uri,
    middleware,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors);

    Router::new()
        // Liveness
        .route("/", get(health::root))
        .route("/api/hello", get(health::hello))
        // Diagnostics
        .route("/test", get(diagnostics))
        // Portfolio
        .route("/api/projects", get(list_projects))
        // Contact form
        .route("/api/contact", post(submit_contact))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
