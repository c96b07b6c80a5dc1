//! # prodsim
//!
//! Product recommendations from description similarity.
//!
//! prodsim turns every product description in a catalog into a TF-IDF
//! vector, precomputes the full cosine-similarity matrix once, and answers
//! "what else is like this?" with the top neighbours from the same category.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! prodsim --data data/products_clean.csv --http-port 8080
//! curl localhost:8080/products/0/similar?top_n=5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use prodsim::prelude::*;
//!
//! let engine = construct("data/products_clean.csv", EngineConfig::default()).unwrap();
//! for r in engine.get_similar(0, 5).unwrap() {
//!     println!("{} ({:.3})", r.name, r.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `prodsim-core` - Product, Catalog, tokenizer, TF-IDF vectorizer
//! - `prodsim-similarity` - Similarity matrix, query engine, build-once handle
//! - `prodsim-storage` - CSV dataset loading and engine lifecycle
//! - `prodsim-api` - REST API
//!
//! ## Scalability
//!
//! The matrix is exact and dense: O(N²) memory and build time. At 4 bytes a
//! cell, 10k products take about 400 MB, so it suits catalogs from the low
//! thousands to ten thousand products; there is no approximate
//! search and no incremental update.

// Re-export core types
pub use prodsim_core::{
    Catalog, CatalogStats, CategoryCount, Error, ErrorKind, Filter, FilterCondition, Product,
    ProductFilter, Result, SparseVector, StopWords, TfidfVectorizer, Tokenizer,
};

// Re-export engine
pub use prodsim_similarity::{Engine, EngineConfig, ResultRecord, SharedEngine, SimilarityMatrix};

// Re-export storage
pub use prodsim_storage::{construct, CatalogLoader, EngineManager};

// Re-export API
pub use prodsim_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        construct, Catalog, CatalogLoader, Engine, EngineConfig, EngineManager, Error, Product,
        ProductFilter, Result, ResultRecord, SharedEngine,
    };
}
