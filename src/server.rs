//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::api::routes::app_router;
use crate::config::Config;
use crate::domain::store::ObjectStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (Redis, or in-memory fallback when unconfigured)
/// - Resolver service and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn ObjectStore> = if let Some(store_url) = &config.store_url {
        let redis = RedisStore::connect(store_url, &config.store_namespace)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to record store: {}", e))?;
        tracing::info!("Record store enabled (Redis)");
        Arc::new(redis)
    } else {
        tracing::warn!("No STORE_URL configured, using in-memory store");
        Arc::new(MemoryStore::new())
    };

    let state = AppState::new(store);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
