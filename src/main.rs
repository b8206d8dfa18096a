mod domain;

mod actor_framework;
mod product_actor;

mod inventory;

mod api;
mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use tracing::info;
use crate::api::inventory_router;
use crate::app_system::{setup_tracing, Config, InventorySystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;
    info!(?config, "Starting inventory service");

    let system = InventorySystem::new(&config);
    let app = inventory_router(system.service.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;

    info!("Inventory service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
