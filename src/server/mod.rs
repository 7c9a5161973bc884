//! HTTP front-end
//!
//! Routes:
//! - `GET /` serves the single-page client
//! - `POST /api/download` resolves a YouTube URL into downloadable formats
//! - `GET /api/health` liveness probe

pub mod error;
pub mod handlers;
pub mod models;

pub use error::ApiError;
pub use handlers::build_response;
pub use models::DownloadResponse;

use crate::extractor::Resolver;
use crate::utils::config::ResponseMode;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state for every request
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub mode: ResponseMode,
}

impl AppState {
    pub fn new(resolver: Arc<Resolver>, mode: ResponseMode) -> Self {
        Self { resolver, mode }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/download", post(handlers::download))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/**
    Serve the router on an already-bound listener until ctrl-c.
*/
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Listening on http://{} ({} mode)", addr, state.mode.as_str());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/**
    Bind `addr` and run the HTTP server.
*/
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
