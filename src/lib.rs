//! Command Center - status and deployment dashboard API
//!
//! This library keeps a registry of application components and serves
//! read-mostly rollups over it (system verdict, throughput, AI services,
//! migrations, alerts) as a small JSON API.

pub mod aggregator;
pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod logging;
pub mod registry;
pub mod store;
pub mod telemetry;
