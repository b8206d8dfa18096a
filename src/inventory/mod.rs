//! Inventory business rules: stock filtering, full-replace updates and purchases.

pub mod error;
pub mod service;
pub mod store;

pub use error::*;
pub use service::*;
pub use store::*;
