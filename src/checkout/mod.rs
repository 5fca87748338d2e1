//! Checkout Module
//!
//! This module contains the checkout sequence:
//! - Models (shipping details, payment method, review, receipt)
//! - The linear checkout flow
//! - The REST endpoint running it

pub mod flow;
pub mod handlers;
pub mod models;

pub use flow::CheckoutFlow;
pub use handlers::routes;
