//! Server module - Local web UI for the candlestick chart

mod routes;

use crate::charts::ChartRenderer;
use axum::{routing::get, Router};
use std::{io, net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {0}: {1}")]
    PortBindingFailed(SocketAddr, #[source] io::Error),
    #[error("Server crashed: {0}")]
    ServerCrashed(#[source] io::Error),
}

/// Build the router: the page, the JSON chart and the PNG snapshot.
pub fn router(renderer: ChartRenderer) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/chart", get(routes::chart))
        .route("/api/chart.png", get(routes::chart_png))
        .with_state(Arc::new(renderer))
}

/// Serve the chart UI until Ctrl+C.
///
/// # Arguments
/// * `addr` - Address to listen on.
/// * `renderer` - Renderer bound to the CSV file for the process lifetime.
/// * `open_browser` - Open the page in the default browser once listening.
pub async fn serve(
    addr: SocketAddr,
    renderer: ChartRenderer,
    open_browser: bool,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::PortBindingFailed(addr, e))?;
    let url = format!("http://{addr}/");

    info!(csv = %renderer.csv_path().display(), "Chart viewer running at {url}");

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!("Could not open browser: {e}");
        }
    }

    axum::serve(listener, router(renderer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::ServerCrashed)?;

    info!("Chart viewer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
