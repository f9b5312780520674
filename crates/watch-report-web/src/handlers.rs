use axum::{
    extract::State,
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use tracing::debug;

use crate::html;
use crate::state::AppState;

pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    match state.report() {
        Some(report) => Html(html::render_report(report)),
        None => Html(html::render_missing()),
    }
}

pub async fn report_handler(State(state): State<AppState>) -> Response {
    match state.report() {
        Some(report) => Json(report).into_response(),
        None => {
            debug!("Report requested before one was loaded");
            Json(json!({ "error": "No report available" })).into_response()
        }
    }
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
