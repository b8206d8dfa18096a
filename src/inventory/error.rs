use thiserror::Error;

use crate::actor_framework::StoreError;
use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product out of stock: {0}")]
    OutOfStock(ProductId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
