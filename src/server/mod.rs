//! HTTP front end for the airport store
//!
//! Builds the axum router over a loaded [`AirportStore`] and serves it.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

pub use error::{AppError, ErrorResponse, ServerError};
pub use handlers::{AirportPayload, AppState, HealthResponse, ADMIN_AIRPORTS_PATH};

use crate::cache::AirportStore;

/// Builds the application router
pub fn router(store: Arc<AirportStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/airports", get(handlers::list_airports))
        .route(ADMIN_AIRPORTS_PATH, post(handlers::create_airport))
        .route(
            "/api/v1/admin/airports/{airport_code}",
            get(handlers::get_airport)
                .put(handlers::update_airport)
                .delete(handlers::delete_airport),
        )
        .with_state(store)
}

/// Binds `addr` and serves until ctrl-c
pub async fn serve(store: Arc<AirportStore>, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr()?;
    tracing::info!("HTTP server bound to {}", local_addr);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("HTTP server received shutdown signal");
        })
        .await?;

    Ok(())
}
