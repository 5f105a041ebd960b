//! Status command implementation
//!
//! Computes the same rollup `GET /status` and `GET /metrics` would return
//! right after startup, without running a server.

use crate::aggregator::StatusAggregator;
use crate::api::ComponentsResponse;
use crate::cli::output::{format_status_json, format_status_pretty};
use crate::cli::{load_local_config, StatusArgs};
use crate::clock::SystemClock;
use std::sync::Arc;

/// Handle `command-center status`
pub fn handle_status(args: &StatusArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_local_config(&args.config)?;
    let aggregator = StatusAggregator::from_config(&config, Arc::new(SystemClock))?;
    render_status(&aggregator, args.json)
}

/// Render the rollup of an existing aggregator.
pub fn render_status(
    aggregator: &StatusAggregator,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let status = aggregator.system_status();
    let metrics = aggregator.metrics();

    if json {
        return Ok(format_status_json(&status, &metrics));
    }

    let components = ComponentsResponse::from(aggregator.list_components()).components;
    Ok(format_status_pretty(&status, &metrics, &components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::CommandCenterConfig;
    use chrono::{TimeZone, Utc};

    fn demo_aggregator() -> StatusAggregator {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        ));
        StatusAggregator::from_config(&CommandCenterConfig::default(), clock).unwrap()
    }

    #[test]
    fn test_render_status_pretty() {
        let output = render_status(&demo_aggregator(), false).unwrap();
        assert!(output.contains("Degraded"));
        assert!(output.contains("3/5 online"));
        assert!(output.contains("Requests/hour: 479"));
        assert!(output.contains("OmniCognitor"));
    }

    #[test]
    fn test_render_status_json() {
        let output = render_status(&demo_aggregator(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["status"]["status"], "degraded");
        assert_eq!(parsed["status"]["online_components"], 3);
        assert_eq!(parsed["metrics"]["total_requests"], 479);
        assert_eq!(parsed["metrics"]["response_time"], 149);
    }
}
