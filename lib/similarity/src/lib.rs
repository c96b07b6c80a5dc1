//! # prodsim Similarity
//!
//! Same-category product recommendations from description similarity.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│ Vectorizer  │────>│   Matrix    │
//! │  (products) │     │  (TF-IDF)   │     │   (N × N)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│   Engine    │<──────────┘
//!                      │ get_similar │
//!                      └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prodsim_core::{Catalog, Product};
//! use prodsim_similarity::{Engine, EngineConfig};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("Earbuds A", "wireless bluetooth earbuds", "Electronics"),
//!     Product::new("Earbuds B", "bluetooth wireless earbuds", "Electronics"),
//!     Product::new("Kurti", "cotton kurti dress", "Apparel"),
//! ]).unwrap();
//!
//! let engine = Engine::construct(catalog, EngineConfig::default()).unwrap();
//! let similar = engine.get_similar(0, 5).unwrap();
//! assert_eq!(similar.len(), 1);
//! assert_eq!(similar[0].index, 1);
//! ```

pub mod config;
pub mod engine;
pub mod matrix;
pub mod result;
pub mod shared;

pub use config::EngineConfig;
pub use engine::Engine;
pub use matrix::SimilarityMatrix;
pub use result::ResultRecord;
pub use shared::SharedEngine;
