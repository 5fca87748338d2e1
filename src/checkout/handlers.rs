//! REST API handler for checkout

use super::{
    flow::CheckoutFlow,
    models::{OrderReceipt, PaymentMethod, ShippingDetails},
};
use crate::{
    error::{ApiError, CheckoutError},
    state::{SharedCart, SharedState},
};
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::time::Duration;

/// Creates routes for checkout
pub fn routes() -> Router<SharedState> {
    Router::new().route("/carts/:cart_id/checkout", post(checkout))
}

/// Input for the checkout endpoint
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    pub shipping: ShippingDetails,
    pub payment: PaymentMethod,
}

/// Endpoint: POST /carts/:cart_id/checkout
/// Runs the whole checkout sequence and returns the receipt. The cart session
/// is released once the order is placed.
///
/// The order is processed on its own task, so a client hanging up does not
/// cancel a checkout that has already started.
async fn checkout(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(input): Json<CheckoutInput>,
) -> Result<Json<OrderReceipt>, ApiError> {
    let cart = state
        .find_cart(&cart_id)
        .ok_or_else(|| ApiError::CartNotFound(cart_id.clone()))?;
    let task = tokio::spawn(place_order(
        state.clone(),
        cart_id.clone(),
        cart,
        input,
        state.checkout_delay,
    ));

    let receipt = task
        .await
        .map_err(|e| ApiError::Internal(format!("checkout task failed: {}", e)))??;

    tracing::info!(%cart_id, order_id = %receipt.order_id, "Checkout complete");
    Ok(Json(receipt))
}

async fn place_order(
    state: SharedState,
    cart_id: String,
    cart: SharedCart,
    input: CheckoutInput,
    processing_delay: Duration,
) -> Result<OrderReceipt, CheckoutError> {
    let mut flow = CheckoutFlow::new();
    flow.submit_shipping(input.shipping)?;
    flow.select_payment(input.payment)?;

    let mut store = cart.lock().await;
    flow.review(&store)?;
    let receipt = flow.confirm(&mut store, processing_delay).await?;

    // Drop the session before unlocking; later lookups see no cart.
    state.remove_cart(&cart_id);
    Ok(receipt)
}
