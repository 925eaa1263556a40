//! Concierge gateway binary entry point.
//!
//! Loads TOML configuration (scaffolding a default file on first run), wires
//! the upstream fallback chain, and runs the axum server with graceful
//! shutdown on ctrl-c.

use std::path::Path;

use anyhow::Result;
use concierge_gateway::{GatewayConfig, config, serve};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "concierge.toml".to_string());
    let path = Path::new(&config_path);
    if !path.exists() {
        config::scaffold(path)?;
        tracing::info!("wrote default configuration to {config_path}");
    }
    let config = GatewayConfig::load(path)?;
    tracing::info!(
        "loaded configuration from {config_path} ({} candidate models)",
        config.upstream.models.len()
    );

    let handle = serve::serve(&config).await?;
    shutdown_signal().await;
    handle.shutdown().await?;

    tracing::info!("gateway shut down");
    Ok(())
}

/// Wait for ctrl-c for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
