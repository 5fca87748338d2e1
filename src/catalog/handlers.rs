//! REST API handlers for the product catalog

use super::{
    helpers::{categories, filter_by_category, search},
    models::Product,
};
use crate::{error::ApiError, state::SharedState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/products", get(list_products))
}

/// Optional filters for the product list
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    /// Categories across the whole catalog, before filtering
    pub categories: Vec<String>,
    pub products: Vec<Product>,
}

/// Endpoint: GET /products
/// Fetches the catalog afresh on every call; a failed fetch yields 502.
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let mut products = state.catalog.fetch_products().await?;
    let all_categories = categories(&products);

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        products = filter_by_category(products, category);
    }
    if let Some(q) = query.q.as_deref() {
        products = search(products, q);
    }

    Ok(Json(ProductsResponse {
        categories: all_categories,
        products,
    }))
}
