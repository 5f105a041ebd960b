//! Simulated command execution handler.

use crate::aggregator::{CommandRequest, CommandResult};
use crate::api::components::reject;
use crate::api::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// POST /execute-command
///
/// Echoes the command back as if it had run. Nothing is dispatched.
pub async fn execute(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        state.telemetry.record_api_error("invalid_input");
        ApiError::from(rejection)
    })?;

    let result = state
        .aggregator
        .execute_command(&request)
        .map_err(|err| reject(&state, err))?;

    state.telemetry.record_command(&result.component_id);
    Ok(Json(result))
}
