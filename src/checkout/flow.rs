//! Checkout Flow
//!
//! Drives the linear sequence shipping → payment → review → confirm. Each
//! step requires the previous ones; shipping and payment may be revisited
//! until the order is confirmed. Confirmation waits out a simulated
//! processing delay, then clears the cart.

use super::models::{CheckoutStep, OrderReceipt, OrderReview, PaymentMethod, ShippingDetails};
use crate::cart::{helpers::format_item_summary, store::CartStore};
use crate::error::CheckoutError;
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: Option<ShippingDetails>,
    payment: Option<PaymentMethod>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping: None,
            payment: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn submit_shipping(&mut self, shipping: ShippingDetails) -> Result<(), CheckoutError> {
        self.ensure_open()?;
        self.shipping = Some(shipping);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    pub fn select_payment(&mut self, payment: PaymentMethod) -> Result<(), CheckoutError> {
        self.ensure_open()?;
        if self.shipping.is_none() {
            return Err(CheckoutError::ShippingRequired);
        }
        self.payment = Some(payment);
        self.step = CheckoutStep::Review;
        Ok(())
    }

    /// Builds the review of cart contents, shipping and payment.
    pub fn review(&mut self, cart: &CartStore) -> Result<OrderReview, CheckoutError> {
        self.ensure_open()?;
        let shipping = self.shipping.clone().ok_or(CheckoutError::ShippingRequired)?;
        let payment = self.payment.ok_or(CheckoutError::PaymentRequired)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.step = CheckoutStep::Review;
        Ok(OrderReview {
            cart: cart.summary(),
            shipping,
            payment,
        })
    }

    /// Confirms the reviewed order: waits `processing_delay`, then snapshots
    /// and clears `cart`.
    ///
    /// Once the delay has started the order always completes.
    #[instrument(skip(self, cart))]
    pub async fn confirm(
        &mut self,
        cart: &mut CartStore,
        processing_delay: Duration,
    ) -> Result<OrderReceipt, CheckoutError> {
        self.ensure_open()?;
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::NotReviewed);
        }
        let shipping = self.shipping.clone().ok_or(CheckoutError::ShippingRequired)?;
        let payment = self.payment.ok_or(CheckoutError::PaymentRequired)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        tokio::time::sleep(processing_delay).await;

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            summary: format_item_summary(cart.items()),
            total_items: cart.total_items(),
            total_amount: cart.total_amount(),
            shipping,
            payment,
        };
        cart.clear_cart();
        self.step = CheckoutStep::Complete;

        info!(
            order_id = %receipt.order_id,
            total_amount = receipt.total_amount,
            payment = receipt.payment.label(),
            "Order placed: {}",
            receipt.summary
        );
        Ok(receipt)
    }

    fn ensure_open(&self) -> Result<(), CheckoutError> {
        if self.step == CheckoutStep::Complete {
            Err(CheckoutError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}
