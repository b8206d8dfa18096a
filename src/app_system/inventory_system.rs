use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::Config;
use crate::actor_framework::ResourceActor;
use crate::domain::Product;
use crate::inventory::InventoryService;

/// Owns the store actor task and the service wired to it.
pub struct InventorySystem {
    pub service: InventoryService,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the store actor and injects its client into the service.
    #[instrument(name = "inventory_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!("Starting inventory system");

        let product_id_counter = Arc::new(AtomicU64::new(1));
        let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

        let (store_actor, store_client) =
            ResourceActor::<Product>::new(config.store_buffer, next_product_id);
        let handle = tokio::spawn(store_actor.run());

        let service = InventoryService::new(Arc::new(store_client));

        info!("Inventory system started");
        Self { service, handle }
    }

    /// Drops the last store client and waits for the actor to drain.
    ///
    /// Clones of the service handed out elsewhere (e.g. to the router) must be
    /// dropped first, or the actor keeps running.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system");
        drop(self.service);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Store actor task failed");
            return Err(format!("Store actor task failed: {e:?}"));
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
