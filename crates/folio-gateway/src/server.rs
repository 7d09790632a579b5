// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use folio_config::model::ServerConfig;
use folio_contact::ContactService;
use folio_core::FolioError;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Submission pipeline backing the contact routes.
    pub contacts: ContactService,
}

impl GatewayState {
    pub fn new(contacts: ContactService) -> Self {
        Self { contacts }
    }
}

/// Build the application router with CORS and request tracing.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(handlers::get_root))
        .route("/api/health", get(handlers::get_health))
        .route(
            "/api/contact",
            get(handlers::list_contacts).post(handlers::post_contact),
        )
        .route("/api/contact/{id}", delete(handlers::delete_contact))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind to the configured host:port and serve until `shutdown` resolves.
pub async fn start_server<F>(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: F,
) -> Result<(), FolioError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Server {
            message: format!("failed to bind server to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!(
        %addr,
        environment = %config.environment,
        "contact API listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| FolioError::Server {
        message: format!("server error: {e}"),
        source: Some(Box::new(e)),
    })?;

    Ok(())
}
