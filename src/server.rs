//! HTTP server assembly
//!
//! Builds the axum router around an injected session store and runs it.
//! The store is a capability handed in at startup, not ambient state, so
//! the API layer stays testable and the backend swappable.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::{OptimizerError, OptimizerResult};
use crate::traits::SessionStore;
use crate::web::handlers;

/// Main server struct with dependency injection
pub struct OptimizerServer<S> {
    store: Arc<S>,
}

impl<S> OptimizerServer<S>
where
    S: SessionStore + 'static,
{
    /// Create a new server around the given session store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::health_check))
            .route("/optimize", post(handlers::optimize::<S>))
            .route("/history", get(handlers::history::<S>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.store.clone())
    }

    /// Start the HTTP server and serve until shutdown
    pub async fn run(&self, bind_address: SocketAddr) -> OptimizerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                OptimizerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}"))
            })?;

        info!("🌐 Shopping Cart Optimizer API listening on http://{bind_address}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| OptimizerError::ServerStartup(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Signal handling failed: {e}");
    }
    info!("Received shutdown signal");
}
