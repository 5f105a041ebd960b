//! Serve command implementation

use crate::aggregator::StatusAggregator;
use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::clock::SystemClock;
use crate::config::{CommandCenterConfig, LogFormat};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<CommandCenterConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        CommandCenterConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        CommandCenterConfig::default()
    };

    config = config.with_env_overrides();

    // CLI flags win
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(ref base_path) = args.base_path {
        config.server.base_path = Some(base_path.clone());
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Build the router and its shared state from a validated config.
pub fn build_app(
    config: CommandCenterConfig,
) -> Result<(axum::Router, Arc<AppState>), Box<dyn std::error::Error>> {
    let aggregator = Arc::new(StatusAggregator::from_config(
        &config,
        Arc::new(SystemClock),
    )?);
    let app_state = Arc::new(AppState::new(aggregator, Arc::new(config)));
    let router = create_router(Arc::clone(&app_state));
    Ok((router, app_state))
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
        _ = cancel_token.cancelled() => {}
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    tracing::info!("Starting command center");
    tracing::debug!(?config, "Loaded configuration");

    let addr = config.server.bind_addr();
    let status_path = config.server.route_path("/status");
    let (app, _app_state) = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, status = %status_path, "Status API listening");

    let cancel_token = CancellationToken::new();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    tracing::info!("Command center stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn args(config: PathBuf) -> ServeArgs {
        ServeArgs {
            config,
            port: None,
            host: None,
            log_level: None,
            base_path: None,
        }
    }

    #[tokio::test]
    async fn test_serve_config_loading() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nbase_path = \"/api/command-center\"").unwrap();

        let config = load_config_with_overrides(&args(temp.path().to_path_buf())).unwrap();
        assert_eq!(
            config.server.base_path.as_deref(),
            Some("/api/command-center")
        );
    }

    #[tokio::test]
    async fn test_serve_cli_overrides_config() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let mut serve_args = args(temp.path().to_path_buf());
        serve_args.port = Some(9000);
        serve_args.log_level = Some("trace".to_string());

        let config = load_config_with_overrides(&serve_args).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "trace");
    }

    #[tokio::test]
    async fn test_serve_works_without_config_file() {
        let config =
            load_config_with_overrides(&args(PathBuf::from("nonexistent.toml"))).unwrap();
        assert!(config.server.base_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_serve_rejects_malformed_config() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server\nport = ").unwrap();

        assert!(load_config_with_overrides(&args(temp.path().to_path_buf())).is_err());
    }

    #[tokio::test]
    async fn test_build_app_seeds_demo_components() {
        let (_router, state) = build_app(CommandCenterConfig::default()).unwrap();
        assert_eq!(state.aggregator.registry().component_count(), 5);
    }

    #[tokio::test]
    async fn test_shutdown_signal_returns_on_cancel() {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel_clone.cancel();
        });

        tokio::select! {
            _ = shutdown_signal(cancel.clone()) => {}
            _ = tokio::time::sleep(Duration::from_secs(5)) => {
                panic!("Shutdown didn't trigger");
            }
        }

        handle.await.unwrap();
        assert!(cancel.is_cancelled());
    }
}
