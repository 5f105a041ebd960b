//! System rollup handlers.

use crate::aggregator::{ProbeMessage, SystemMetrics, SystemStatus};
use crate::api::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /status - overall operational verdict with online/total counts.
pub async fn system_status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(state.aggregator.system_status())
}

/// GET /metrics - throughput, response time and reported constants.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<SystemMetrics> {
    Json(state.aggregator.metrics())
}

/// GET /websocket-test - readiness placeholder.
pub async fn websocket_probe(State(state): State<Arc<AppState>>) -> Json<ProbeMessage> {
    Json(state.aggregator.websocket_probe())
}
