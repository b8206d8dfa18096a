//! Product records held by the store actor.

pub mod actions;
pub mod entity;
pub mod store;

pub use actions::{ProductAction, ProductRejection};
