//! Shared test fixtures for Sieve crates.
//!
//! This crate provides data for testing. It depends only on `sieve-catalog`
//! so that any crate above it can use it as a dev-dependency.
//!
//! - [`products`] - The four-product reference catalog
//! - [`documents`] - Catalog configuration documents in TOML and YAML
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sieve-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use sieve_test::products::{sample_products, names};
//! use sieve_test::documents::SAMPLE_CATALOG_TOML;
//! ```

pub mod documents;
pub mod products;

// Re-export commonly used items at crate root for convenience
pub use documents::{SAMPLE_CATALOG_TOML, SAMPLE_CATALOG_YAML};
pub use products::{apple, car, house, names, sample_products, tree};
