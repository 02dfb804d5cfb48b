//! HTTP server initialization and runtime setup.
//!
//! Handles the MongoDB connection, schema bootstrap and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::PostService;
use crate::config::Config;
use crate::infrastructure::persistence::{MongoPostRepository, MongoStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client, retried until the deployment answers
/// - Collection and index bootstrap
/// - Post repository and service
/// - Axum HTTP server
///
/// Returns after SIGINT/SIGTERM once in-flight requests are drained and the
/// MongoDB client is closed.
///
/// # Errors
///
/// Returns an error if:
/// - MongoDB is unreachable or the bootstrap fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = MongoStore::connect(&config).await?;
    store.migrate().await?;

    let repository = Arc::new(MongoPostRepository::new(store.database()));
    let post_service = Arc::new(PostService::new(repository));
    let state = AppState::new(post_service, config.page_size_limit);

    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
