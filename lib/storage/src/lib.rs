//! # prodsim Storage
//!
//! Data-source side of the engine: reads the cleaned product dataset and
//! owns the build-once engine handle.

pub mod clean;
pub mod loader;
pub mod manager;

pub use loader::{CatalogLoader, REQUIRED_COLUMNS};
pub use manager::{construct, EngineManager};
