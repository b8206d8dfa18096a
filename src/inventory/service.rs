use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{InventoryError, InventoryStore};
use crate::actor_framework::StoreError;
use crate::domain::{Product, ProductCreate, ProductId, ProductReplace};
use crate::product_actor::{ProductAction, ProductRejection};

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Stock rules over an injected [`InventoryStore`].
///
/// The service keeps no records of its own: every call reads current state
/// from the store before acting on it.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> InventoryResult<Vec<Product>> {
        let products = self.store.find_all().await?;
        debug!(product_count = products.len(), "Listed products");
        Ok(products)
    }

    /// Products with at least one unit in stock, in store order.
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> InventoryResult<Vec<Product>> {
        let products: Vec<Product> = self
            .list_all()
            .await?
            .into_iter()
            .filter(Product::is_available)
            .collect();
        debug!(product_count = products.len(), "Listed available products");
        Ok(products)
    }

    #[instrument(fields(product_id = id), skip(self, id))]
    pub async fn get_by_id(&self, id: ProductId) -> InventoryResult<Product> {
        match self.store.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                debug!("Product not found");
                Err(InventoryError::NotFound(id))
            }
        }
    }

    #[instrument(
        fields(product_name = %params.name, stock_count = params.stock_count),
        skip(self, params)
    )]
    pub async fn create(&self, params: ProductCreate) -> InventoryResult<Product> {
        let product = Product::new(params.name, params.price, params.stock_count);
        let product = self.store.save(product).await?;
        info!(product_id = ?product.id, "Product created");
        Ok(product)
    }

    /// Overwrites name, price and stock count of an existing product.
    #[instrument(
        fields(product_id = id, product_name = %replace.name, stock_count = replace.stock_count),
        skip(self, id, replace)
    )]
    pub async fn update(&self, id: ProductId, replace: ProductReplace) -> InventoryResult<Product> {
        let mut product = self.get_by_id(id).await?;
        replace.apply_to(&mut product);

        let product = self
            .store
            .save(product)
            .await
            .map_err(|e| not_found_or(id, e))?;
        info!("Product updated");
        Ok(product)
    }

    #[instrument(fields(product_id = id), skip(self, id))]
    pub async fn delete(&self, id: ProductId) -> InventoryResult<()> {
        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| not_found_or(id, e))?;
        info!("Product deleted");
        Ok(())
    }

    /// Sells exactly one unit.
    ///
    /// The stock check and the decrement happen together inside the store, so
    /// concurrent purchases of the last units cannot oversell or lose one.
    #[instrument(fields(product_id = id), skip(self, id))]
    pub async fn purchase(&self, id: ProductId) -> InventoryResult<Product> {
        let outcome = self
            .store
            .apply(id, ProductAction::Purchase)
            .await
            .map_err(|e| not_found_or(id, e))?;

        match outcome {
            Ok(product) => {
                info!(stock_count = product.stock_count, "Product purchased");
                Ok(product)
            }
            Err(ProductRejection::OutOfStock) => {
                warn!("Purchase refused, no stock left");
                Err(InventoryError::OutOfStock(id))
            }
        }
    }
}

fn not_found_or(id: ProductId, error: StoreError) -> InventoryError {
    match error {
        StoreError::NotFound(_) => InventoryError::NotFound(id),
        other => InventoryError::Store(other),
    }
}
