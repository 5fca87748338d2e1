//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints that mutate and read the cart store
//! of a session, plus a server-sent events stream of its changes.

use super::{helpers::get_or_create_cart_id, models::CartSummary, store::CartStore};
use crate::catalog::models::Product;
use crate::error::ApiError;
use crate::state::{AppState, CartNotification, SharedCart, SharedState};
use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{delete, get, post},
    Json, Router,
};
use futures_util::stream::{self, Stream};
use serde::Serialize;
use tokio::sync::broadcast::{error::RecvError, Receiver};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/carts", post(create_cart))
        .route("/carts/:cart_id", get(get_cart).delete(clear_cart))
        .route("/carts/:cart_id/items", post(add_item))
        .route("/carts/:cart_id/items/:product_id", delete(remove_item))
        .route(
            "/carts/:cart_id/items/:product_id/increase",
            post(increase_quantity),
        )
        .route(
            "/carts/:cart_id/items/:product_id/decrease",
            post(decrease_quantity),
        )
        .route("/carts/:cart_id/events", get(cart_events))
}

/// Response for cart session creation
#[derive(Debug, Serialize)]
pub struct CreateCartResponse {
    #[serde(rename = "cartId")]
    pub cart_id: String,
}

/// The cart as rendered by the cart screen
#[derive(Debug, Serialize)]
pub struct CartView {
    #[serde(rename = "cartId")]
    pub cart_id: String,

    #[serde(flatten)]
    pub summary: CartSummary,
}

impl CartView {
    fn new(cart_id: String, store: &CartStore) -> Self {
        Self {
            cart_id,
            summary: store.summary(),
        }
    }
}

/// Looks up an existing cart without creating one.
fn existing_cart(state: &AppState, cart_id: &str) -> Result<SharedCart, ApiError> {
    state
        .find_cart(cart_id)
        .ok_or_else(|| ApiError::CartNotFound(cart_id.to_string()))
}

/// Endpoint: POST /carts
/// Starts a new, empty cart session.
async fn create_cart(State(state): State<SharedState>) -> Json<CreateCartResponse> {
    let cart_id = get_or_create_cart_id(None);
    state.cart(&cart_id);
    Json(CreateCartResponse { cart_id })
}

/// Endpoint: GET /carts/:cart_id
/// Unknown cart ids yield 404 and are not created.
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<CartView>, ApiError> {
    let cart = existing_cart(&state, &cart_id)?;
    let store = cart.lock().await;
    Ok(Json(CartView::new(cart_id, &store)))
}

/// Endpoint: POST /carts/:cart_id/items
/// Adds one unit of the posted product.
async fn add_item(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(product): Json<Product>,
) -> Json<CartView> {
    let cart = state.cart(&cart_id);
    let mut store = cart.lock().await;
    tracing::info!(%cart_id, product_id = product.id, "Add to cart");
    store.add_item(product);
    Json(CartView::new(cart_id, &store))
}

/// Endpoint: DELETE /carts/:cart_id/items/:product_id
async fn remove_item(
    State(state): State<SharedState>,
    Path((cart_id, product_id)): Path<(String, u64)>,
) -> Result<Json<CartView>, ApiError> {
    let cart = existing_cart(&state, &cart_id)?;
    let mut store = cart.lock().await;
    store.remove_item(product_id);
    Ok(Json(CartView::new(cart_id, &store)))
}

/// Endpoint: POST /carts/:cart_id/items/:product_id/increase
async fn increase_quantity(
    State(state): State<SharedState>,
    Path((cart_id, product_id)): Path<(String, u64)>,
) -> Result<Json<CartView>, ApiError> {
    let cart = existing_cart(&state, &cart_id)?;
    let mut store = cart.lock().await;
    store.increase_quantity(product_id);
    Ok(Json(CartView::new(cart_id, &store)))
}

/// Endpoint: POST /carts/:cart_id/items/:product_id/decrease
async fn decrease_quantity(
    State(state): State<SharedState>,
    Path((cart_id, product_id)): Path<(String, u64)>,
) -> Result<Json<CartView>, ApiError> {
    let cart = existing_cart(&state, &cart_id)?;
    let mut store = cart.lock().await;
    store.decrease_quantity(product_id);
    Ok(Json(CartView::new(cart_id, &store)))
}

/// Endpoint: DELETE /carts/:cart_id
async fn clear_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<CartView>, ApiError> {
    let cart = existing_cart(&state, &cart_id)?;
    let mut store = cart.lock().await;
    store.clear_cart();
    Ok(Json(CartView::new(cart_id, &store)))
}

/// Endpoint: GET /carts/:cart_id/events
/// Streams the cart's events as they happen.
async fn cart_events(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    existing_cart(&state, &cart_id)?;
    let receiver = state.subscribe_events();

    let events = stream::unfold((receiver, cart_id), |(mut receiver, cart_id)| async move {
        let notification = next_for_cart(&mut receiver, &cart_id).await?;
        let event = Event::default()
            .event(notification.event.name())
            .json_data(&notification.event);
        Some((event, (receiver, cart_id)))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Waits for the next notification belonging to `cart_id`; `None` once the
/// channel closes.
async fn next_for_cart(
    receiver: &mut Receiver<CartNotification>,
    cart_id: &str,
) -> Option<CartNotification> {
    loop {
        match receiver.recv().await {
            Ok(notification) if notification.cart_id == cart_id => return Some(notification),
            Ok(_) => continue,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(cart_id, skipped, "Cart event subscriber lagged");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}
