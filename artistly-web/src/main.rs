//! artistly-web - Artist booking directory service
//!
//! Serves the Artistly catalog over HTTP/JSON: home page data, filterable
//! artist browse, quote requests, the four-step onboarding form and the
//! manager dashboard. All data is static; nothing is persisted.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use artistly_common::config::{ConfigOverrides, ServiceConfig};
use artistly_common::Catalog;
use artistly_web::{build_router, AppState};

/// How often abandoned onboarding sessions are swept
const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Command-line arguments for artistly-web
#[derive(Parser, Debug)]
#[command(name = "artistly-web")]
#[command(about = "Artist booking directory service")]
#[command(version)]
struct Args {
    /// Path to config.toml
    #[arg(short, long, env = "ARTISTLY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with artists.json and categories.json overrides
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = ConfigOverrides {
        config_file: args.config,
        host: args.host,
        port: args.port,
        data_dir: args.data_dir,
    };
    let config = ServiceConfig::resolve(&overrides).context("Failed to resolve configuration")?;

    // ARTISTLY_LOG takes precedence over the configured level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("ARTISTLY_LOG")
                .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.log_level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Artistly web service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let catalog = Catalog::load(config.data_dir.as_deref()).context("Failed to load catalog")?;
    info!(
        artists = catalog.artists().len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    let state = AppState::new(catalog, config.submission_delay)
        .with_session_idle_timeout(config.session_idle_timeout);
    info!(
        idle_timeout_secs = config.session_idle_timeout.as_secs(),
        "Onboarding sessions expire when idle"
    );
    let sweeper = tokio::spawn(state.sessions.clone().sweep_idle(SESSION_SWEEP_PERIOD));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    sweeper.abort();

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
