use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, index_handler, report_handler};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/report", get(report_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
