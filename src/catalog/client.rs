//! Catalog Fetching
//!
//! `ProductCatalog` is the seam the rest of the application fetches products
//! through; `HttpCatalog` is the reqwest-backed implementation talking to the
//! remote endpoint.

use super::models::{CatalogResponse, Product};
use crate::error::CatalogFetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Source of the product catalog.
///
/// Each call is a single, stateless attempt; retrying means calling again.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError>;
}

/// Fetches the catalog from a fixed HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    /// Creates a catalog client for `url` with a default reqwest client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a catalog client reusing an existing reqwest client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Returns the endpoint this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Catalog endpoint returned an error status");
            return Err(CatalogFetchError::Status(status));
        }

        let body = response.bytes().await?;
        let catalog: CatalogResponse = serde_json::from_slice(&body)?;

        debug!(count = catalog.products.len(), "Catalog fetched");
        Ok(catalog.products)
    }
}
