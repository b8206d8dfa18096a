use async_trait::async_trait;

use crate::actor_framework::{ActionOutcome, StoreError};
use crate::domain::{Product, ProductId};
use crate::product_actor::ProductAction;

/// Keyed persistence the inventory service depends on.
///
/// Each call is atomic on its own; nothing spans calls. Read-modify-write
/// rules that must not interleave go through [`InventoryStore::apply`].
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All records in creation order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Inserts a record without an id, assigning one; replaces an existing
    /// record otherwise. Fails with `NotFound` for an id that is gone.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    /// Runs `action` against the stored record as one step. A rejected action
    /// comes back as `Ok(Err(_))` and leaves the record as it was; a missing id
    /// fails with `NotFound`.
    async fn apply(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ActionOutcome<Product>, StoreError>;

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;
}
