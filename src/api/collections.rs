//! Handlers for the collections that live beside the registry.

use crate::aggregator::{AiServiceList, AlertList, MigrationStatus};
use crate::api::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /ai-services
pub async fn ai_services(State(state): State<Arc<AppState>>) -> Json<AiServiceList> {
    Json(state.aggregator.list_ai_services())
}

/// GET /migration-status
pub async fn migration_status(State(state): State<Arc<AppState>>) -> Json<MigrationStatus> {
    Json(state.aggregator.migration_status())
}

/// GET /alerts
pub async fn alerts(State(state): State<Arc<AppState>>) -> Json<AlertList> {
    Json(state.aggregator.list_alerts())
}
