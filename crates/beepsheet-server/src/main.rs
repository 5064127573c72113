//! beepsheet-server - CSV-to-beeps upload front
//!
//! Serves the upload form, accepts a beep sheet CSV, and returns the
//! synthesized WAVs as a `.tar.gz` download.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use beepsheet_server::{build_router, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "beepsheet-server")]
#[command(about = "HTTP upload front for the beep sheet pipeline")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configured one
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    info!("Starting beepsheet-server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Columns: name='{}' duration='{}'",
        config.name_column, config.duration_column
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{bind_addr}");
    info!("Health check: http://{bind_addr}/health");

    axum::serve(listener, app).await?;

    Ok(())
}
