//! HTTP boundary for the recon engine.
//!
//! Provides two endpoints:
//! - `POST /api/v1/recon` - runs a recon for `{"domain": "..."}`
//! - `GET /health` - liveness and version
//!
//! In-flight requests are drained on Ctrl-C or SIGTERM.

mod handlers;
mod shutdown;
mod types;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::run::ReconContext;

use handlers::{health_handler, recon_handler};
pub use shutdown::shutdown_signal;
pub use types::{ErrorResponse, HealthResponse};

/// Builds the router with `ctx` as shared state.
pub fn router(ctx: Arc<ReconContext>) -> Router {
    Router::new()
        .route("/api/v1/recon", post(recon_handler))
        .route("/health", get(health_handler))
        .with_state(ctx)
}

/// Binds `bind` and serves until a shutdown signal arrives.
pub async fn start_server(bind: SocketAddr, ctx: Arc<ReconContext>) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind recon server to {}: {}", bind, e))?;

    serve_with_shutdown(listener, ctx, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    ctx: Arc<ReconContext>,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| anyhow::anyhow!("Failed to read listener address: {}", e))?;

    log::info!("Recon server listening on http://{addr}/");
    log::info!("  - Recon: POST http://{addr}/api/v1/recon");
    log::info!("  - Health: GET http://{addr}/health");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Recon server error: {}", e))?;

    log::info!("Recon server stopped");
    Ok(())
}
