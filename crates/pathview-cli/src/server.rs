//! HTTP server lifecycle.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;

use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Serves the router until ctrl-c is received.
pub async fn serve(router: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        address = %addr,
        "Listening for connections"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "Failed to listen for shutdown signal"
        );
        return;
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        "Shutdown signal received"
    );
}
