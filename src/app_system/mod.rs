//! System configuration, startup, and shutdown logic.

pub mod config;
pub mod inventory_system;
pub mod logging;

pub use config::*;
pub use inventory_system::*;
pub use logging::*;
