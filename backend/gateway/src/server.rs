//! HTTP server for the interactions endpoint.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::interactions;
use crate::state::AppState;

/// Single-endpoint surface: every method lands in the interaction handler,
/// which owns the method check so non-POST requests get the structured 400.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(interactions::handle_interaction))
        .with_state(state)
}

/// Serve until `shutdown` resolves, then wait for in-flight dispatches so
/// pending follow-up edits are at least attempted before teardown.
pub async fn start_server<F>(addr: SocketAddr, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state.clone());

    info!("Interactions endpoint listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Draining in-flight dispatches");
    state.drain().await;
    Ok(())
}
