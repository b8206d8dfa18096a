//! HTTP surface: routes under `/products`, mapped onto the inventory service.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::*;
pub use router::*;
