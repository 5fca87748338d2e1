//! Shopping Cart Domain Models
//!
//! This module contains the line item, change notifications and derived
//! summary of the cart.

use crate::catalog::models::Product;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product plus a quantity within the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,

    /// Always at least 1 while the item is in a cart
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Discounted price of a single unit.
    pub fn unit_price(&self) -> f64 {
        self.product.discounted_price()
    }

    /// Discounted price of the whole line, computed on every call.
    pub fn total_price(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// Change notification emitted by a `CartStore` to its listeners.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartEvent {
    /// Add-to-cart feedback flag for the UI
    Busy { busy: bool },
    #[serde(rename_all = "camelCase")]
    Added { product_id: u64, title: String },
    #[serde(rename_all = "camelCase")]
    QuantityUpdated { product_id: u64, quantity: u32 },
    #[serde(rename_all = "camelCase")]
    Removed { product_id: u64, title: String },
    Cleared,
}

impl CartEvent {
    /// Short event name used as the SSE `event:` field.
    pub fn name(&self) -> &'static str {
        match self {
            CartEvent::Busy { .. } => "busy",
            CartEvent::Added { .. } => "added",
            CartEvent::QuantityUpdated { .. } => "quantityUpdated",
            CartEvent::Removed { .. } => "removed",
            CartEvent::Cleared => "cleared",
        }
    }
}

/// Snapshot of the cart with derived totals, as rendered by the cart screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total_items: u32,
    /// Sum of undiscounted prices
    pub subtotal: f64,
    pub discount: f64,
    pub total_amount: f64,
}

/// A cart item together with its derived line total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product: item.product.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price(),
            total_price: item.total_price(),
        }
    }
}
