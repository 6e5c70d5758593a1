// Cluster Alerts - terminal dashboard for cluster alerts
//
// Lists clusters from a portal API and shows the alerts of the selected
// cluster. Alerts are fetched only when the alerts panel is active, the
// cluster list has loaded, and no fetch for the selection is outstanding.
//
// Architecture:
// - Portal (reqwest): cluster list and per-cluster alerts endpoints
// - Alerts: fetch gate, state slots, detail view sync, completion dispatch
// - TUI (ratatui): cluster list, alerts table, error banner, detail view
// - Headless: `alerts <cluster>` prints one fetch to stdout

mod alerts;
mod cli;
mod config;
mod demo;
mod headless;
mod logging;
mod portal;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use demo::DemoPortal;
use logging::{CaptureLayer, LogBuffer};
use portal::{PortalApi, PortalClient};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// TUI mode captures into `log_buffer` so nothing is written over the
/// alternate screen; headless mode writes to stderr. File logging is added
/// on top of either. The returned guard must outlive the program.
fn init_tracing(config: &Config, tui_mode: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("cluster_alerts={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let capture_layer = tui_mode.then(|| CaptureLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, "cluster-alerts"),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, "cluster-alerts"),
                    LogRotation::Never => tracing_appender::rolling::never(dir, "cluster-alerts"),
                };
                let (non_blocking, file_guard) = tracing_appender::non_blocking(appender);
                guard = Some(file_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(capture_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn build_portal(config: &Config) -> Result<Arc<dyn PortalApi>> {
    if config.demo_mode {
        Ok(Arc::new(DemoPortal::default()))
    } else {
        Ok(Arc::new(PortalClient::new(
            config.api_url.clone(),
            config.request_timeout(),
        )?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    Config::ensure_config_exists();
    let mut config = Config::from_env();
    config.demo_mode |= cli.demo;

    let log_buffer = LogBuffer::new();
    let tui_mode = cli.command.is_none();
    let _file_guard = init_tracing(&config, tui_mode, &log_buffer);

    let portal = build_portal(&config)?;

    match cli.command {
        Some(Commands::Alerts { cluster, json }) => {
            match headless::fetch_once(portal, &cluster).await? {
                headless::Outcome::Alerts(payload) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&payload)?);
                    } else {
                        print!("{}", headless::format_table(&payload));
                    }
                }
                headless::Outcome::Failed(failure) => {
                    eprintln!("Error: {}", failure);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Config { .. }) => {}
        None => {
            tracing::info!("Starting dashboard against {}", config.api_url);
            tui::run_tui(config, portal, log_buffer).await?;
        }
    }

    Ok(())
}
