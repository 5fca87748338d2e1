//! Product Catalog Module
//!
//! This module contains everything about the remote product catalog:
//! - Product records and their lenient decoding
//! - The catalog fetcher (trait plus HTTP implementation)
//! - Category and search helpers
//! - The REST endpoint listing products

pub mod client;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{HttpCatalog, ProductCatalog};
pub use handlers::routes;
pub use models::Product;
