pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/resume/actions", post(handlers::handle_apply_action))
        .route("/api/v1/resume/reset", post(handlers::handle_reset))
        .route("/api/v1/resume/submit", post(handlers::handle_submit))
        .with_state(state)
}
