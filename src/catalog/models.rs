//! Catalog Domain Models
//!
//! Typed records for the remote product catalog. Decoding is lenient: any
//! field that is missing, `null`, or of the wrong shape falls back to its
//! default (empty string, zero, or empty list) instead of failing the whole
//! response.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// Catalog Response
// =============================================================================

/// Envelope returned by the catalog endpoint: `{ "products": [ ... ] }`.
///
/// Unlike the product fields, `products` itself is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}

/// Decodes one field, substituting the default for `null` or a value of the
/// wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// =============================================================================
// Product Records
// =============================================================================

/// One catalog entry as received from the remote source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub category: String,
    #[serde(deserialize_with = "lenient")]
    pub price: f64,
    /// Percentage off `price`, 0 to 100
    #[serde(deserialize_with = "lenient")]
    pub discount_percentage: f64,
    #[serde(deserialize_with = "lenient")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient")]
    pub stock: u32,
    #[serde(deserialize_with = "lenient")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub brand: String,
    #[serde(deserialize_with = "lenient")]
    pub sku: String,
    #[serde(deserialize_with = "lenient")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient")]
    pub dimensions: ProductDimensions,
    #[serde(deserialize_with = "lenient")]
    pub warranty_information: String,
    #[serde(deserialize_with = "lenient")]
    pub shipping_information: String,
    #[serde(deserialize_with = "lenient")]
    pub availability_status: String,
    #[serde(deserialize_with = "lenient")]
    pub reviews: Vec<ProductReview>,
    #[serde(deserialize_with = "lenient")]
    pub return_policy: String,
    #[serde(deserialize_with = "lenient")]
    pub minimum_order_quantity: u32,
    #[serde(deserialize_with = "lenient")]
    pub meta: ProductMeta,
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: String,
}

impl Product {
    /// Price after applying `discount_percentage`.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }
}

/// A single customer review attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductReview {
    #[serde(deserialize_with = "lenient")]
    pub rating: i32,
    #[serde(deserialize_with = "lenient")]
    pub comment: String,
    #[serde(deserialize_with = "lenient")]
    pub date: String,
    #[serde(deserialize_with = "lenient")]
    pub reviewer_name: String,
    #[serde(deserialize_with = "lenient")]
    pub reviewer_email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDimensions {
    #[serde(deserialize_with = "lenient")]
    pub width: f64,
    #[serde(deserialize_with = "lenient")]
    pub height: f64,
    #[serde(deserialize_with = "lenient")]
    pub depth: f64,
}

/// Creation/update timestamps and identifier codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductMeta {
    #[serde(deserialize_with = "lenient")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient")]
    pub updated_at: String,
    #[serde(deserialize_with = "lenient")]
    pub barcode: String,
    #[serde(deserialize_with = "lenient")]
    pub qr_code: String,
}
