//! Route definitions for the Roomcast HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    // Client routes answer their own preflight, so they sit outside the CORS layer.
    Router::new()
        .merge(trigger_routes())
        .route("/health", get(handlers::health::health))
        .layer(cors)
        .merge(client_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Document-change event endpoints
fn trigger_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/triggers/messages/created",
            post(handlers::triggers::message_created),
        )
        .route(
            "/triggers/tasks/created",
            post(handlers::triggers::task_created),
        )
        .route(
            "/triggers/tasks/updated",
            post(handlers::triggers::task_updated),
        )
        .route(
            "/triggers/tasks/deleted",
            post(handlers::triggers::task_deleted),
        )
}

/// Static-page support endpoints
fn client_routes() -> Router<AppState> {
    Router::new().route(
        "/client-config",
        get(handlers::client_config::client_config)
            .options(handlers::client_config::client_config_options),
    )
}
