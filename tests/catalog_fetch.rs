//! Integration tests for the HTTP catalog fetcher
//!
//! A throwaway local axum server stands in for the remote catalog endpoint.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use shopping_catalog::catalog::{HttpCatalog, ProductCatalog};
use shopping_catalog::error::CatalogFetchError;
use std::net::SocketAddr;

/// Starts the fake catalog server and returns its address
async fn spawn_catalog_server() -> SocketAddr {
    let app = Router::new()
        .route(
            "/products",
            get(|| async {
                Json(json!({
                    "products": [
                        {
                            "id": 1,
                            "title": "Essence Mascara Lash Princess",
                            "category": "beauty",
                            "price": 9.99,
                            "discountPercentage": 7.17,
                            "tags": ["beauty", "mascara"],
                            "dimensions": { "width": 23.17, "height": 14.43, "depth": 28.01 }
                        },
                        {
                            "id": 2,
                            "title": "Eyeshadow Palette with Mirror",
                            "price": 19.99
                        }
                    ],
                    "total": 2,
                    "skip": 0,
                    "limit": 30
                }))
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage", get(|| async { "this is not json" }))
        .route("/no-products", get(|| async { Json(json!({ "total": 0 })) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_fetch_products_in_received_order() {
    let addr = spawn_catalog_server().await;
    let catalog = HttpCatalog::new(format!("http://{}/products", addr));

    let products = catalog.fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].tags, vec!["beauty", "mascara"]);
    assert_eq!(products[0].dimensions.depth, 28.01);
    assert_eq!(products[1].id, 2);
}

#[tokio::test]
async fn test_missing_fields_default_instead_of_failing() {
    let addr = spawn_catalog_server().await;
    let catalog = HttpCatalog::new(format!("http://{}/products", addr));

    let products = catalog.fetch_products().await.unwrap();
    let sparse = &products[1];

    assert!(sparse.tags.is_empty());
    assert!(sparse.reviews.is_empty());
    assert_eq!(sparse.category, "");
    assert_eq!(sparse.stock, 0);
    assert_eq!(sparse.thumbnail, "");
}

#[tokio::test]
async fn test_server_error_fails_without_products() {
    let addr = spawn_catalog_server().await;
    let catalog = HttpCatalog::new(format!("http://{}/broken", addr));

    let err = catalog.fetch_products().await.unwrap_err();

    match err {
        CatalogFetchError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let addr = spawn_catalog_server().await;

    let garbage = HttpCatalog::new(format!("http://{}/garbage", addr));
    assert!(matches!(
        garbage.fetch_products().await,
        Err(CatalogFetchError::Decode(_))
    ));

    let no_products = HttpCatalog::new(format!("http://{}/no-products", addr));
    assert!(matches!(
        no_products.fetch_products().await,
        Err(CatalogFetchError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = HttpCatalog::new(format!("http://{}/products", addr));
    assert!(matches!(
        catalog.fetch_products().await,
        Err(CatalogFetchError::Transport(_))
    ));
}

#[tokio::test]
async fn test_retry_is_just_another_call() {
    let addr = spawn_catalog_server().await;
    let catalog = HttpCatalog::new(format!("http://{}/products", addr));

    let first = catalog.fetch_products().await.unwrap();
    let second = catalog.fetch_products().await.unwrap();
    assert_eq!(first, second);
}
