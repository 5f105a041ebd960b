//! # Status API
//!
//! JSON endpoints over the status aggregator.
//!
//! ## Endpoints
//!
//! - `GET /status` - Operational verdict with online/total component counts
//! - `GET /components` - Full component registry
//! - `GET /components/:id` - One component
//! - `POST /components/:id/health` - Partial status/health update
//! - `GET /metrics` - Throughput and response-time rollup
//! - `GET /ai-services` - AI provider integrations
//! - `GET /migration-status` - Migration records and overall progress
//! - `GET /alerts` - Alert feed
//! - `POST /execute-command` - Simulated command execution
//! - `GET /websocket-test` - Readiness placeholder
//! - `GET /prometheus` - Prometheus exposition
//!
//! Every route allows cross-origin requests. Errors are `{"error": "..."}`,
//! including bodies over `server.max_body_bytes` (413).
//!
//! ## Example
//!
//! ```no_run
//! use command_center::aggregator::StatusAggregator;
//! use command_center::api::{create_router, AppState};
//! use command_center::clock::SystemClock;
//! use command_center::config::CommandCenterConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(CommandCenterConfig::default());
//! let aggregator = Arc::new(StatusAggregator::from_config(&config, Arc::new(SystemClock))?);
//! let state = Arc::new(AppState::new(aggregator, config));
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod collections;
mod commands;
mod components;
mod error;
mod status;
pub mod types;

pub use error::ApiError;
pub use types::*;

use crate::aggregator::StatusAggregator;
use crate::config::CommandCenterConfig;
use crate::telemetry::TelemetryCollector;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub aggregator: Arc<StatusAggregator>,
    pub config: Arc<CommandCenterConfig>,
    pub telemetry: Arc<TelemetryCollector>,
    /// Server startup time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(aggregator: Arc<StatusAggregator>, config: Arc<CommandCenterConfig>) -> Self {
        let start_time = Instant::now();

        // Only the first AppState in a process can own the global recorder.
        let prometheus_handle = crate::telemetry::setup_metrics().unwrap_or_else(|e| {
            tracing::debug!("Metrics recorder already installed, using detached handle: {}", e);
            crate::telemetry::PrometheusBuilder::new()
                .build_recorder()
                .handle()
        });

        let telemetry = Arc::new(TelemetryCollector::new(
            Arc::clone(aggregator.registry()),
            start_time,
            prometheus_handle,
        ));

        Self {
            aggregator,
            config,
            telemetry,
            start_time,
        }
    }
}

/// Create the API router with every endpoint, CORS, tracing and body limit.
///
/// Routes are nested under `server.base_path` when one is configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let base_path = state.config.server.base_path.clone();

    let routes = Router::new()
        .route("/status", get(status::system_status))
        .route("/components", get(components::list))
        .route("/components/:id", get(components::get))
        .route("/components/:id/health", post(components::update_health))
        .route("/metrics", get(status::metrics))
        .route("/ai-services", get(collections::ai_services))
        .route("/migration-status", get(collections::migration_status))
        .route("/alerts", get(collections::alerts))
        .route("/execute-command", post(commands::execute))
        .route("/websocket-test", get(status::websocket_probe))
        .route(
            "/prometheus",
            get(crate::telemetry::handler::prometheus_handler),
        );

    let router = match base_path {
        Some(base) => Router::new().nest(&base, routes),
        None => routes,
    };

    router
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(crate::logging::make_request_span::<axum::body::Body>),
        )
        .with_state(state)
}
