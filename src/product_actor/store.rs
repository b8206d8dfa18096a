use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ProductAction;
use crate::actor_framework::{ActionOutcome, ResourceClient, StoreError};
use crate::domain::{Product, ProductId};
use crate::inventory::InventoryStore;

/// The store actor's client handle is the inventory store.
#[async_trait]
impl InventoryStore for ResourceClient<Product> {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.list().await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.get(id).await
    }

    #[instrument(fields(product_id = ?product.id), skip(self, product))]
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        debug!("Sending request");
        ResourceClient::save(self, product).await
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ActionOutcome<Product>, StoreError> {
        debug!("Sending request");
        self.perform_action(id, action).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.delete(id).await
    }
}
