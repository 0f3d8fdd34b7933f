// SPDX-License-Identifier: Apache-2.0

//! HTTP front end for Pulse issue analysis.
//!
//! Exposes `GET /analyze/{issue_number}` and `GET /health`, and serves static
//! files (including `index.html` at `/`) from a configurable directory.

pub mod cli;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::routing::get;
use pulse_core::ServerConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;
pub use state::AppState;

/// Builds the application router.
///
/// Unmatched paths fall through to files under `static_dir`. CORS allows any
/// origin.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/analyze/{issue_number}", get(routes::analyze))
        .route("/health", get(routes::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    // IPv6 literals need brackets
    let addr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    };
    Ok(addr.parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully");
}

/// Binds to the configured address and serves until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn run_http(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = bind_addr(&config.host, config.port)?;
    let app = router(state, &config.static_dir);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, static_dir = %config.static_dir.display(), "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_handles_ipv4_and_ipv6() {
        assert_eq!(
            bind_addr("127.0.0.1", 5001).unwrap().to_string(),
            "127.0.0.1:5001"
        );
        assert_eq!(bind_addr("::1", 8080).unwrap().to_string(), "[::1]:8080");
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        assert!(bind_addr("localhost", 5001).is_err());
    }
}
