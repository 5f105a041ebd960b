//! Component registry handlers.

use crate::aggregator::{AggregatorError, HealthUpdateRequest};
use crate::api::types::{ComponentResponse, ComponentsResponse, HealthUpdateResponse};
use crate::api::{ApiError, AppState};
use crate::logging::error_kind;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

/// GET /components - full registry in insertion order.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ComponentsResponse> {
    Json(state.aggregator.list_components().into())
}

/// GET /components/{id}
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ComponentResponse>, ApiError> {
    state
        .aggregator
        .get_component(&id)
        .map(|detail| Json(detail.into()))
        .map_err(|err| reject(&state, err))
}

/// POST /components/{id}/health - partial status/health update.
pub async fn update_health(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<HealthUpdateRequest>, JsonRejection>,
) -> Result<Json<HealthUpdateResponse>, ApiError> {
    if state.aggregator.registry().get_component(&id).is_none() {
        return Err(reject(&state, AggregatorError::NotFound(id)));
    }

    let Json(request) = body.map_err(|rejection| {
        state.telemetry.record_api_error("invalid_input");
        ApiError::from(rejection)
    })?;

    let result = state
        .aggregator
        .update_component_health(&id, &request)
        .map_err(|err| reject(&state, err))?;

    state.telemetry.record_health_update(&id);
    Ok(Json(result.into()))
}

/// Count and log an aggregator failure before it becomes a response.
pub(crate) fn reject(state: &AppState, err: AggregatorError) -> ApiError {
    let kind = error_kind(&err);
    tracing::debug!(error_kind = kind, error = %err, "Request rejected");
    state.telemetry.record_api_error(kind);
    err.into()
}
