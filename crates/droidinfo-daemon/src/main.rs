//! droidinfo Daemon - Device snapshot endpoint
//!
//! This binary serves the device-info and system-bars routes over HTTP and
//! handles:
//! - Configuration loading and validation
//! - Logging initialisation (text or JSON, `RUST_LOG` overrides the level)
//! - Request metrics on `/metrics`
//! - Graceful shutdown on SIGTERM/SIGINT
//!
//! # Architecture
//!
//! The daemon wires a [`FixturePlatformProvider`] into a [`DeviceInfoServer`].
//! The server loop is controlled by a `CancellationToken` that is triggered on
//! receipt of SIGTERM or SIGINT.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use droidinfo_core::config::{Config, LoggingConfig};
use droidinfo_fixture::FixturePlatformProvider;
use droidinfo_server::{DeviceInfoServer, RequestMetrics};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "droidinfod", version, about = "Serve device snapshots over HTTP")]
struct Args {
    /// Use alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `server.bind`
    #[arg(long)]
    bind: Option<String>,

    /// Override `device.profile`
    #[arg(long)]
    profile: Option<PathBuf>,
}

/// Loads the configuration file and applies command-line overrides.
///
/// An explicit `--config` must exist and parse; the default location falls
/// back to defaults when absent.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path()),
    };

    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(profile) = &args.profile {
        config.device.profile = Some(profile.clone());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", details.join("; "));
    }
    Ok(config)
}

/// Builds the log filter; `RUST_LOG` takes precedence over the configured level.
fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_target(true);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Waits for SIGINT or SIGTERM, then cancels `token`.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C)");
        }
        _ = terminate => {
            info!("Received SIGTERM");
        }
    }

    token.cancel();
}

async fn run(config: Config, shutdown: CancellationToken) -> Result<()> {
    let Some(profile) = config.device.profile.clone() else {
        bail!("No device profile configured; set device.profile or pass --profile");
    };
    info!(profile = %profile.display(), "Serving recorded device profile");

    let metrics = if config.server.metrics {
        Some(Arc::new(RequestMetrics::new().context("Failed to create metrics registry")?))
    } else {
        None
    };

    let server = DeviceInfoServer::new(
        Arc::new(FixturePlatformProvider::new(profile)),
        config.network,
        metrics,
        &config.server.bind,
    )
    .with_context(|| format!("Invalid bind address {}", config.server.bind))?;

    Arc::new(server).run(shutdown).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_tracing(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %config.server.bind,
        "droidinfo daemon starting (droidinfod)"
    );

    let shutdown_token = CancellationToken::new();

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        shutdown_signal(signal_token).await;
    });

    let result = run(config, shutdown_token).await;

    match &result {
        Ok(()) => info!("droidinfo daemon shut down gracefully"),
        Err(e) => error!(error = %format!("{e:#}"), "droidinfo daemon exiting with error"),
    }

    result
}
