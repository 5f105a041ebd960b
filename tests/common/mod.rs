//! Shared test utilities for command center integration tests.
//!
//! Builds routers over a manually driven clock so that timestamps and
//! recency strings are deterministic.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use chrono::{DateTime, TimeZone, Utc};
use command_center::aggregator::StatusAggregator;
use command_center::api::{create_router, AppState};
use command_center::clock::ManualClock;
use command_center::config::CommandCenterConfig;
use command_center::registry::{Component, ComponentStatus, Registry};
use std::sync::Arc;

/// Fixed "now" used by every test app.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Router plus handles to the clock and aggregator behind it.
pub struct TestApp {
    pub router: axum::Router,
    pub clock: Arc<ManualClock>,
    pub aggregator: Arc<StatusAggregator>,
}

/// Router over the built-in demo seed.
pub fn make_demo_app() -> TestApp {
    make_app_with_config(CommandCenterConfig::default())
}

/// Router over whatever the config seeds.
pub fn make_app_with_config(config: CommandCenterConfig) -> TestApp {
    let clock = Arc::new(ManualClock::new(test_now()));
    let aggregator = Arc::new(StatusAggregator::from_config(&config, clock.clone()).unwrap());
    let state = Arc::new(AppState::new(Arc::clone(&aggregator), Arc::new(config)));

    TestApp {
        router: create_router(state),
        clock,
        aggregator,
    }
}

/// Router over an explicit component list and the demo services/migrations.
pub fn make_app_with_components(components: Vec<Component>) -> TestApp {
    let config = CommandCenterConfig::default();
    let clock = Arc::new(ManualClock::new(test_now()));
    let registry = Arc::new(Registry::from_components(components).unwrap());
    let aggregator = Arc::new(StatusAggregator::new(
        registry,
        command_center::aggregator::seed::demo_ai_services(),
        command_center::aggregator::seed::demo_migrations(),
        config.aggregator.clone(),
        clock.clone(),
    ));
    let state = Arc::new(AppState::new(Arc::clone(&aggregator), Arc::new(config)));

    TestApp {
        router: create_router(state),
        clock,
        aggregator,
    }
}

/// Simple online component with the given id.
pub fn online(id: &str) -> Component {
    Component::new(id, id, "chat", test_now())
        .with_status(ComponentStatus::Online)
        .with_health(100)
}

/// Simple offline component with the given id.
pub fn offline(id: &str) -> Component {
    Component::new(id, id, "chat", test_now()).with_status(ComponentStatus::Offline)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
