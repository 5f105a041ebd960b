//! Components command implementation

use crate::aggregator::StatusAggregator;
use crate::api::ComponentsResponse;
use crate::cli::output::{format_components_json, format_components_table};
use crate::cli::{load_local_config, ComponentsArgs};
use crate::clock::SystemClock;
use crate::registry::ComponentStatus;
use std::sync::Arc;

/// Handle `command-center components`
pub fn handle_components(args: &ComponentsArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_local_config(&args.config)?;
    let aggregator = StatusAggregator::from_config(&config, Arc::new(SystemClock))?;
    render_components(&aggregator, args.status.as_deref(), args.json)
}

/// Render the registry, optionally filtered by status.
pub fn render_components(
    aggregator: &StatusAggregator,
    status_filter: Option<&str>,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let filter = status_filter
        .map(|s| s.parse::<ComponentStatus>())
        .transpose()?;

    let components: Vec<_> = ComponentsResponse::from(aggregator.list_components())
        .components
        .into_iter()
        .filter(|c| filter.map_or(true, |f| c.status == f))
        .collect();

    if json {
        Ok(format_components_json(&components))
    } else {
        Ok(format_components_table(&components))
    }
}
