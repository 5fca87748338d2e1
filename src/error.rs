//! Error Types
//!
//! One error enum per concern: fetching the catalog, sequencing a checkout,
//! reading configuration, and the HTTP-facing `ApiError` that wraps them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure to obtain the product catalog from the remote endpoint.
///
/// No partial product list is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Out-of-sequence use of the checkout flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("shipping details have not been submitted")]
    ShippingRequired,

    #[error("no payment method has been selected")]
    PaymentRequired,

    #[error("the order has not been reviewed")]
    NotReviewed,

    #[error("the cart is empty")]
    EmptyCart,

    #[error("this checkout has already been completed")]
    AlreadyCompleted,
}

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogFetchError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("cart {0} not found")]
    CartNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Catalog(_) => StatusCode::BAD_GATEWAY,
            ApiError::Checkout(_) => StatusCode::CONFLICT,
            ApiError::CartNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_client_error() {
            tracing::warn!(error = %self, %status, "Rejecting request");
        } else {
            tracing::error!(error = %self, %status, "Responding with error");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
