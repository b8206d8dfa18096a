use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
pub type ProductId = u64;

/// Represents a product in the inventory.
///
/// `id` is `None` until the store persists the record for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productPrice")]
    pub price: f64,
    #[serde(rename = "inventoryCount")]
    pub stock_count: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, stock_count: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            stock_count,
        }
    }

    pub fn is_available(&self) -> bool {
        self.stock_count > 0
    }
}

/// Payload for creating a new product.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productPrice")]
    pub price: f64,
    #[serde(rename = "inventoryCount")]
    pub stock_count: u32,
}

/// Full replacement of a product's mutable fields.
///
/// This is not a partial patch: a field missing from the request body is
/// written as its zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductReplace {
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productPrice")]
    pub price: f64,
    #[serde(rename = "inventoryCount")]
    pub stock_count: u32,
}

impl ProductReplace {
    /// Overwrites every mutable field of `product`, keeping its id.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
        product.stock_count = self.stock_count;
    }
}
