use super::actions::{ProductAction, ProductRejection};
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductId};

impl Entity for Product {
    type Id = ProductId;
    type Action = ProductAction;
    type Rejection = ProductRejection;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `Purchase`: Decrements stock by exactly one
    ///
    /// # Errors
    /// Returns `OutOfStock` if the stock count is already zero.
    fn handle_action(&mut self, action: ProductAction) -> Result<(), ProductRejection> {
        match action {
            ProductAction::Purchase => {
                self.stock_count = self
                    .stock_count
                    .checked_sub(1)
                    .ok_or(ProductRejection::OutOfStock)?;
                Ok(())
            }
        }
    }
}
