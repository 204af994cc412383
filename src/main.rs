//! TuningPro dashboard
//!
//! Admin dashboard for a vehicle-tuning shop.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tuning_core::DashboardConfig;

/// Command-line overrides for the environment configuration
#[derive(Debug, Parser)]
#[command(name = "tuning-dashboard", version, about = "TuningPro admin dashboard")]
struct Cli {
    /// API endpoint for all reads and writes
    #[arg(long, env = "TUNING_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "TUNING_REQUEST_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log filter, e.g. `info` or `tuning_api=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = DashboardConfig::from_env()
        .and_then(|c| c.with_overrides(cli.api_url, cli.timeout, cli.log_level))
        .context("invalid dashboard configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(false)
        .pretty()
        .init();

    if let Some(path) = &config.env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    tracing::info!("Endpoint: {}", config.api_url);
    tracing::debug!("Request timeout: {:?}", config.request_timeout);

    tuning_ui::launch(config).context("failed to start the dashboard")?;
    Ok(())
}
