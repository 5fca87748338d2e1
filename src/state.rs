//! Application State
//!
//! Holds the catalog source, one cart store per cart session, and the
//! broadcast channel that relays cart events to SSE subscribers.

use crate::cart::{models::CartEvent, store::CartStore};
use crate::catalog::client::{HttpCatalog, ProductCatalog};
use crate::config::AppConfig;
use dashmap::DashMap;
use std::{sync::Arc, time::Duration};
use tokio::sync::{broadcast, Mutex};

/// Capacity of the cart event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A cart store shared between handlers. The async mutex may be held across
/// the checkout processing delay.
pub type SharedCart = Arc<Mutex<CartStore>>;

/// A cart event tagged with the cart it came from.
#[derive(Debug, Clone)]
pub struct CartNotification {
    pub cart_id: String,
    pub event: CartEvent,
}

pub struct AppState {
    /// Cart stores keyed by cart id.
    pub carts: DashMap<String, SharedCart>,

    pub catalog: Arc<dyn ProductCatalog>,

    events: broadcast::Sender<CartNotification>,

    /// Simulated order processing time
    pub checkout_delay: Duration,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductCatalog>, checkout_delay: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            carts: DashMap::new(),
            catalog,
            events,
            checkout_delay,
        }
    }

    /// State backed by the HTTP catalog configured in `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let catalog = HttpCatalog::new(config.catalog_url.clone());
        Self::new(Arc::new(catalog), config.checkout_delay)
    }

    /// Returns the store for `cart_id`, creating an empty one on first use.
    ///
    /// Only session creation and add-to-cart go through here; every other
    /// path uses [`AppState::find_cart`].
    pub fn cart(&self, cart_id: &str) -> SharedCart {
        self.carts
            .entry(cart_id.to_string())
            .or_insert_with(|| {
                tracing::info!(cart_id, "Creating cart");
                Arc::new(Mutex::new(self.new_store(cart_id)))
            })
            .value()
            .clone()
    }

    /// Returns the store for `cart_id` if that cart exists.
    pub fn find_cart(&self, cart_id: &str) -> Option<SharedCart> {
        self.carts.get(cart_id).map(|entry| entry.value().clone())
    }

    /// Drops the cart session. Returns `false` if it did not exist.
    pub fn remove_cart(&self, cart_id: &str) -> bool {
        let removed = self.carts.remove(cart_id).is_some();
        if removed {
            tracing::info!(cart_id, "Cart released");
        }
        removed
    }

    /// Receives every event emitted by any cart from now on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<CartNotification> {
        self.events.subscribe()
    }

    fn new_store(&self, cart_id: &str) -> CartStore {
        let mut store = CartStore::new();
        let sender = self.events.clone();
        let cart_id = cart_id.to_string();
        store.subscribe(move |event| {
            // Nobody listening is fine.
            let _ = sender.send(CartNotification {
                cart_id: cart_id.clone(),
                event: event.clone(),
            });
        });
        store
    }
}
