use anyhow::Context;
use axum::Router;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::database::{self, Store};
use crate::routes;
use crate::state::AppState;

/// Open the store, run bootstrap and build the router.
///
/// Nothing is bound yet; callers decide where to serve the returned router.
pub async fn prepare(config: AppConfig) -> anyhow::Result<(Router, Store)> {
    info!("Starting Lucio API in {:?} mode", config.environment);

    let store = Store::open(&config.database)
        .await
        .with_context(|| format!("failed to open store at {}", config.database.path))?;

    let report = database::initialize(&store)
        .await
        .context("failed to initialize the products table")?;
    if report.seeded > 0 {
        info!("Bootstrap seeded {} products", report.seeded);
    }

    if !config.security.admin.is_configured() {
        warn!("ADMIN_ID is not configured; every create, update and delete will fail with 500");
    }

    let state = AppState::new(config, store.clone());
    let app = routes::app(state).context("invalid CORS configuration")?;
    Ok((app, store))
}

/// Prepare the app and serve it until Ctrl+C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let (app, store) = prepare(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Lucio API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
