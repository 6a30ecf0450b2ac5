//! Public web-client configuration handler.
//!
//! The static pages fetch this from any origin, so both methods carry
//! their own CORS headers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::dto::response::ClientConfigResponse;
use crate::state::AppState;

const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// GET /client-config
pub async fn client_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CACHE_CONTROL, "public, max-age=300"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        ],
        Json(ClientConfigResponse::from(&state.config.client)),
    )
}

/// OPTIONS /client-config
pub async fn client_config_options() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
