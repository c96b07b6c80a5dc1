//! # prodsim Core
//!
//! Core library for the prodsim product-similarity engine.
//!
//! This crate provides the catalog and text-representation layers:
//!
//! - [`Product`] - A cleaned catalog row
//! - [`Catalog`] - Ordered, read-only product store with filtering
//! - [`Tokenizer`] / [`StopWordsFilter`] - Description tokenization
//! - [`TfidfVectorizer`] - Term-weighted unit vectors over a fixed vocabulary
//! - [`SparseVector`] - Sorted sparse vector with merge dot product
//!
//! ## Example
//!
//! ```rust
//! use prodsim_core::TfidfVectorizer;
//!
//! let mut vectorizer = TfidfVectorizer::default();
//! let vectors = vectorizer
//!     .fit_transform(&["wireless bluetooth earbuds", "bluetooth wireless earbuds"])
//!     .unwrap();
//! assert!(vectors[0].dot(&vectors[1]) > 0.99);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod product;
pub mod stopwords;
pub mod tfidf;
pub mod vector;

pub use catalog::{Catalog, CatalogStats, CategoryCount};
pub use error::{Error, ErrorKind, Result};
pub use filter::{Filter, FilterCondition, ProductFilter};
pub use product::Product;
pub use stopwords::{StopWords, StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tfidf::{TfidfVectorizer, Tokenizer};
pub use vector::SparseVector;
