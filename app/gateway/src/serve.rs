//! Shared serve entrypoint for the binary and integration tests.

use std::net::SocketAddr;

use anyhow::Result;
use llm::{Completion, FallbackChain, Upstream};
use tokio::sync::oneshot;

use crate::{config::GatewayConfig, routes, state::AppState};

/// Handle for a running gateway: bound address plus shutdown trigger.
pub struct ServeHandle {
    /// Address the gateway is listening on.
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Build the state a validated config describes: shared HTTP client with the
/// configured timeout, bearer adapter, fallback chain, persona.
pub fn build_state(config: &GatewayConfig) -> Result<AppState<Upstream>> {
    config.validate()?;
    let client = reqwest::Client::builder()
        .timeout(config.upstream.timeout())
        .build()?;
    let upstream = Upstream::bearer(client, &config.upstream.api_key, config.upstream.endpoint())?;
    let chain = FallbackChain::new(upstream, config.upstream.models.clone())?;
    Ok(AppState::new(chain, &config.persona))
}

/// Validate config, build state, bind, and start serving.
pub async fn serve(config: &GatewayConfig) -> Result<ServeHandle> {
    let state = build_state(config)?;
    serve_with_state(state, &config.bind_address()).await
}

/// Serve prepared state on `bind`. Binding port 0 picks an ephemeral port;
/// the handle reports the resolved address.
pub async fn serve_with_state<C: Completion + 'static>(
    state: AppState<C>,
    bind: &str,
) -> Result<ServeHandle> {
    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    tracing::info!("gateway listening on {addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        addr,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
