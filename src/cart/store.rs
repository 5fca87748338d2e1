//! Cart Store
//!
//! The in-memory, observable collection of line items that cart screens read
//! and mutate. Items stay in insertion order and are unique by product id.
//! Listeners registered with [`CartStore::subscribe`] are called synchronously
//! after each state change.

use super::models::{CartEvent, CartItem, CartLine, CartSummary};
use crate::catalog::models::Product;
use tracing::debug;

/// Callback invoked with every event a store emits.
pub type CartListener = Box<dyn Fn(&CartEvent) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    busy: bool,
    listeners: Vec<(SubscriptionId, CartListener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("busy", &self.busy)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers a listener; it sees every event emitted from now on.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&self, event: CartEvent) {
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.emit(CartEvent::Busy { busy });
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`: bumps the quantity of an existing line or
    /// appends a new line with quantity 1.
    pub fn add_item(&mut self, product: Product) {
        self.set_busy(true);

        let event = if let Some(existing) = self.find_mut(product.id) {
            existing.quantity += 1;
            CartEvent::QuantityUpdated {
                product_id: existing.product.id,
                quantity: existing.quantity,
            }
        } else {
            let event = CartEvent::Added {
                product_id: product.id,
                title: product.title.clone(),
            };
            self.items.push(CartItem::new(product));
            event
        };

        debug!(?event, "Cart item added");
        self.emit(event);
        self.set_busy(false);
    }

    /// Deletes the line for `product_id`. Absent ids are ignored.
    pub fn remove_item(&mut self, product_id: u64) {
        let Some(index) = self.items.iter().position(|i| i.product.id == product_id) else {
            return;
        };

        let removed = self.items.remove(index);
        debug!(product_id, "Cart item removed");
        self.emit(CartEvent::Removed {
            product_id,
            title: removed.product.title,
        });
    }

    pub fn increase_quantity(&mut self, product_id: u64) {
        if let Some(item) = self.find_mut(product_id) {
            item.quantity += 1;
            let quantity = item.quantity;
            self.emit(CartEvent::QuantityUpdated {
                product_id,
                quantity,
            });
        }
    }

    /// Decrements the quantity, removing the line instead when it is at 1.
    pub fn decrease_quantity(&mut self, product_id: u64) {
        let Some(item) = self.find_mut(product_id) else {
            return;
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            let quantity = item.quantity;
            self.emit(CartEvent::QuantityUpdated {
                product_id,
                quantity,
            });
        } else {
            self.remove_item(product_id);
        }
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        debug!("Cart cleared");
        self.emit(CartEvent::Cleared);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Sum of discounted line totals, recomputed on every call.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(CartItem::total_price).sum()
    }

    /// Sum of quantities, recomputed on every call.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal: f64 = self
            .items
            .iter()
            .map(|i| i.product.price * f64::from(i.quantity))
            .sum();
        let total_amount = self.total_amount();

        CartSummary {
            items: self.items.iter().map(CartLine::from).collect(),
            total_items: self.total_items(),
            subtotal,
            discount: subtotal - total_amount,
            total_amount,
        }
    }

    fn find_mut(&mut self, product_id: u64) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn product(id: u64, price: f64, discount: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            discount_percentage: discount,
            ..Product::default()
        }
    }

    fn recorded(store: &mut CartStore) -> Arc<Mutex<Vec<CartEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        events
    }

    fn expected_total(store: &CartStore) -> f64 {
        store
            .items()
            .iter()
            .map(|i| {
                i.product.price * (1.0 - i.product.discount_percentage / 100.0)
                    * f64::from(i.quantity)
            })
            .sum()
    }

    fn assert_totals_consistent(store: &CartStore) {
        assert!((store.total_amount() - expected_total(store)).abs() < 1e-9);
        let quantities: u32 = store.items().iter().map(|i| i.quantity).sum();
        assert_eq!(store.total_items(), quantities);
        assert!(store.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_add_same_product_twice_aggregates() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0, 0.0));
        store.add_item(product(1, 10.0, 0.0));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_decrease_at_one_removes_item() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0, 0.0));
        store.decrease_quantity(1);

        assert!(!store.contains(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut store = CartStore::new();
        store.add_item(product(3, 1.0, 0.0));
        store.add_item(product(1, 1.0, 0.0));
        store.add_item(product(2, 1.0, 0.0));
        store.add_item(product(3, 1.0, 0.0));

        let ids: Vec<u64> = store.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let mut store = CartStore::new();
        let a = product(1, 100.0, 10.0);
        let b = product(2, 19.99, 0.0);
        let c = product(3, 5.5, 50.0);

        store.add_item(a.clone());
        assert_totals_consistent(&store);
        store.add_item(b.clone());
        assert_totals_consistent(&store);
        store.increase_quantity(1);
        assert_totals_consistent(&store);
        store.add_item(c);
        assert_totals_consistent(&store);
        store.decrease_quantity(2);
        assert_totals_consistent(&store);
        store.add_item(a);
        assert_totals_consistent(&store);
        store.remove_item(3);
        assert_totals_consistent(&store);
        store.add_item(b);
        store.increase_quantity(2);
        assert_totals_consistent(&store);

        // 3 x 90.0 + 2 x 19.99
        assert!((store.total_amount() - 309.98).abs() < 1e-9);
        assert_eq!(store.total_items(), 5);
    }

    #[test]
    fn test_clear_cart_zeroes_totals() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0, 0.0));
        store.add_item(product(2, 20.0, 5.0));
        store.clear_cart();

        assert!(store.is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_amount(), 0.0);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut store = CartStore::new();
        store.add_item(product(1, 10.0, 0.0));
        let events = recorded(&mut store);

        store.remove_item(42);
        store.increase_quantity(42);
        store.decrease_quantity(42);

        assert_eq!(store.len(), 1);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listeners_receive_events_in_order() {
        let mut store = CartStore::new();
        let events = recorded(&mut store);

        store.add_item(product(1, 10.0, 0.0));
        store.add_item(product(1, 10.0, 0.0));
        store.decrease_quantity(1);
        store.decrease_quantity(1);
        store.clear_cart();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                CartEvent::Busy { busy: true },
                CartEvent::Added {
                    product_id: 1,
                    title: "Product 1".into()
                },
                CartEvent::Busy { busy: false },
                CartEvent::Busy { busy: true },
                CartEvent::QuantityUpdated {
                    product_id: 1,
                    quantity: 2
                },
                CartEvent::Busy { busy: false },
                CartEvent::QuantityUpdated {
                    product_id: 1,
                    quantity: 1
                },
                CartEvent::Removed {
                    product_id: 1,
                    title: "Product 1".into()
                },
                CartEvent::Cleared,
            ]
        );
        assert!(!store.is_busy());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = CartStore::new();
        let events = Arc::new(Mutex::new(0usize));
        let sink = events.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.clear_cart();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.clear_cart();

        assert_eq!(*events.lock().unwrap(), 1);
    }

    #[test]
    fn test_summary_splits_discount() {
        let mut store = CartStore::new();
        store.add_item(product(1, 100.0, 20.0));
        store.add_item(product(1, 100.0, 20.0));

        let summary = store.summary();
        assert_eq!(summary.total_items, 2);
        assert!((summary.subtotal - 200.0).abs() < 1e-9);
        assert!((summary.discount - 40.0).abs() < 1e-9);
        assert!((summary.total_amount - 160.0).abs() < 1e-9);
        assert!((summary.items[0].unit_price - 80.0).abs() < 1e-9);
    }
}
