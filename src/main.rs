use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use storefront_rust::cart::AppState;
use storefront_rust::config::StorefrontConfig;
use storefront_rust::router::create_app_router;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = StorefrontConfig::load()?;
    let addr = config.server.bind_addr;
    info!(
        addr = %addr,
        files_url = %config.storefront.files_url,
        currency = %config.storefront.currency_symbol,
        "loaded storefront config"
    );

    // Initialize application state
    let sweep_every = Duration::from_secs(config.sessions.sweep_interval_secs.max(1));
    let state = Arc::new(AppState::new(config));

    // Drop idle sessions in the background
    let sweeper = Arc::clone(&state);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;
            let evicted = sweeper.evict_idle();
            if evicted > 0 {
                info!(evicted, remaining = sweeper.sessions.len(), "evicted idle sessions");
            }
        }
    });

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.context("server error")
}
