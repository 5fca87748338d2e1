//! Shopping Cart Helpers
//!
//! This module contains helper functions for cart sessions and formatting.

use super::models::CartItem;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart session works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;

    #[test]
    fn test_cart_id_generation() {
        assert_eq!(get_or_create_cart_id(Some("abc".into())), "abc");
        assert_eq!(get_or_create_cart_id(None).len(), 32);
        assert_ne!(get_or_create_cart_id(Some(" ".into())), " ");
    }

    #[test]
    fn test_format_item_summary() {
        let item = |title: &str, quantity| CartItem {
            product: Product {
                title: title.into(),
                ..Product::default()
            },
            quantity,
        };
        let items = vec![item("Apple", 2), item("Banana", 1)];
        assert_eq!(format_item_summary(&items), "2x Apple, 1x Banana");
        assert_eq!(format_item_summary(&[]), "");
    }
}
