//! Checkout Models
//!
//! Data collected and produced along the checkout sequence.

use crate::cart::models::CartSummary;
use serde::{Deserialize, Serialize};

/// Where the order ships to. Collected as entered, without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub phone: String,
}

/// Payment choice. No gateway is contacted for any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Position in the linear checkout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
    Complete,
}

/// What the review screen shows before confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReview {
    pub cart: CartSummary,
    pub shipping: ShippingDetails,
    pub payment: PaymentMethod,
}

/// Result of a confirmed checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    /// One-line item listing, e.g. "2x Apple, 1x Banana"
    pub summary: String,
    pub total_items: u32,
    pub total_amount: f64,
    pub shipping: ShippingDetails,
    pub payment: PaymentMethod,
}
