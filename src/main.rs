use anyhow::Context;
use clap::Parser;
use shop_api::config::ServerConfig;
use shop_api::router::create_app_router;
use shop_api::state::AppState;
use shop_api::{logging, shutdown};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_subscriber(&config).context("failed to initialize logging")?;

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
