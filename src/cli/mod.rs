//! CLI module for the command center
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the status API server
//! - `status` - Show the system rollup computed from configuration
//! - `components` - List seeded components
//! - `inspect` - Probe the hosted data store schema
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! command-center serve
//!
//! # Pending components only, as JSON
//! command-center components --status pending --json
//!
//! # Generate shell completions
//! command-center completions bash > ~/.bash_completion.d/command-center
//! ```

pub mod completions;
pub mod components;
pub mod config;
pub mod inspect;
pub mod output;
pub mod serve;
pub mod status;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::CommandCenterConfig;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command Center - status and deployment dashboard API
#[derive(Parser, Debug)]
#[command(
    name = "command-center",
    version,
    about = "Status and deployment dashboard API for a fleet of application components"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the status API server
    Serve(ServeArgs),
    /// Show the system rollup
    Status(StatusArgs),
    /// List components
    Components(ComponentsArgs),
    /// Probe the data store schema
    Inspect(InspectArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "command-center.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "COMMAND_CENTER_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "COMMAND_CENTER_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COMMAND_CENTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Mount every route under this prefix (e.g. /api/command-center)
    #[arg(long)]
    pub base_path: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "command-center.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by status (online, offline, pending, degraded)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "command-center.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the data store URL
    #[arg(long, env = "COMMAND_CENTER_STORE_URL")]
    pub store_url: Option<String>,

    /// Probe exactly these tables; skips the store's table listing
    #[arg(short, long = "table")]
    pub tables: Vec<String>,

    /// Insert a marker row into this table and report whether it was accepted
    #[arg(long, value_name = "TABLE")]
    pub write_test: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "command-center.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "command-center.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load a config file for the offline commands.
///
/// A missing file means defaults. Environment overrides are applied and the
/// result is validated.
pub fn load_local_config(path: &Path) -> Result<CommandCenterConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        CommandCenterConfig::load(Some(path))?
    } else {
        CommandCenterConfig::default()
    };

    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}
