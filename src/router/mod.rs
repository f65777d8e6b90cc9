//! Routing module for the storefront application

use crate::cart::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::debug!(%method, %uri, "request");
        let res = next.run(req).await;
        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!(%method, %uri, %status, "request failed");
        } else {
            tracing::info!(%method, %uri, %status, "request");
        }
        res
    });

    // Middleware: CORS for the JSON API (permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::page::routes())
        .merge(crate::cart::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
