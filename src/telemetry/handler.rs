//! Prometheus scrape handler.

use crate::api::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// GET /prometheus - registry gauges and API counters in text exposition format.
///
/// Always 200, even before anything has been recorded.
pub async fn prometheus_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.telemetry.update_component_gauges();

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.telemetry.render_metrics(),
    )
}
