//! Wearwatch - Predictive Maintenance Dashboard
//!
//! Serves the dashboard for a predictive maintenance CSV dataset.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./predictive_maintenance.csv on http://127.0.0.1:8050
//! cargo run --release
//!
//! # Another dataset and bind address
//! ./wearwatch --data /srv/ai4i2020.csv --addr 0.0.0.0:8080
//! ```
//!
//! # Environment Variables
//!
//! - `WEARWATCH_CONFIG`: Path to a TOML config file (default: ./wearwatch.toml if present)
//! - `WEARWATCH_SERVER_ADDR`: Bind address when `--addr` is not given
//! - `WEARWATCH_CORS_ORIGINS`: Comma-separated extra CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use wearwatch::api::{create_app, DashboardState};
use wearwatch::config::{defaults, ConfigOverrides, DashboardConfig};
use wearwatch::dataset::Dataset;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wearwatch")]
#[command(about = "Predictive maintenance dashboard")]
#[command(version)]
struct CliArgs {
    /// TOML config file (overrides WEARWATCH_CONFIG and ./wearwatch.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the server address (default: "127.0.0.1:8050")
    #[arg(short, long, env = defaults::ENV_SERVER_ADDR, value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Path to the CSV dataset (default: predictive_maintenance.csv)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,
}

/// Resolve the effective configuration: file (explicit or searched), then CLI overrides.
fn resolve_config(args: &CliArgs) -> Result<DashboardConfig> {
    let config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::load(),
    };

    let overrides = ConfigOverrides {
        addr: args.addr.clone(),
        data: args.data.clone(),
    };
    config
        .with_overrides(&overrides)
        .context("Invalid configuration")
}

/// Cancel `token` on Ctrl-C.
fn spawn_shutdown_listener(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl-C, shutting down"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
        }
        token.cancel();
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = resolve_config(&args)?;

    info!("Loading dataset from {}", config.data.path.display());
    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("Failed to load dataset {}", config.data.path.display()))?;
    info!("✓ Loaded {} readings", dataset.len());

    let state = DashboardState::new(Arc::new(dataset), &config.controls);
    info!(
        product_type = %state.initial.product_type,
        failure_type = %state.initial.failure_type,
        tool_wear_min = state.initial.tool_wear_min,
        tool_wear_max = state.initial.tool_wear_max,
        "Initial selection"
    );
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server.addr))?;
    info!("✓ HTTP server listening on {}", config.server.addr);
    info!("Dashboard available at: http://{}", config.server.addr);

    let cancel_token = CancellationToken::new();
    spawn_shutdown_listener(cancel_token.clone());

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}
