//! # prodsim API
//!
//! JSON-over-HTTP surface for the similarity engine. Read-only apart from
//! `POST /reload`, which rebuilds the engine from the dataset.

pub mod rest;

pub use rest::RestApi;
