pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_parse_resume;
use crate::render::handlers::{handle_compile, handle_latex};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Import
        .route(
            "/api/parse-resume",
            post(handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Export
        .route("/api/latex", post(handle_latex))
        .route("/api/compile", post(handle_compile))
        .with_state(state)
}
