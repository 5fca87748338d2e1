//! Catalog Helpers
//!
//! Pure functions over an already-fetched product list: category listing,
//! category filtering and text search.

use super::models::Product;

/// Distinct categories in the order they first appear.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Products whose category equals `category` (case-insensitive).
pub fn filter_by_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Products whose title, brand or any tag contains `query` (case-insensitive).
///
/// A blank query matches everything.
pub fn search(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products;
    }

    products
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
