//! Shopping Catalog Library
//!
//! This library provides the domain core of a shopping-catalog application:
//! fetching the product catalog, an observable client-side cart, and a
//! simulated checkout, plus the HTTP surface the screens talk to.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
