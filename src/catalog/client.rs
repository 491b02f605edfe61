//! HTTP product source

use super::{FetchError, Product, ProductsResponse};
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Url;
use std::time::Duration;

/// Anything that can turn an endpoint URL into a product list.
///
/// The controller only talks to this trait, so tests can swap in a scripted
/// source without a network.
pub trait ProductSource: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Vec<Product>, FetchError>>;
}

/// Product source backed by a pooled `reqwest` client
pub struct HttpCatalog {
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("product-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl ProductSource for HttpCatalog {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Vec<Product>, FetchError>> {
        async move {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body: ProductsResponse = response
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))?;

            Ok(body.products)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Endpoints;
    use crate::demo;
    use axum::{http::StatusCode, routing::get, Router};

    fn client() -> HttpCatalog {
        HttpCatalog::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetches_full_catalog_in_api_order() {
        let server = demo::spawn(demo::loopback()).await.unwrap();
        let endpoints = Endpoints::new(server.base_url()).unwrap();

        let products = client().fetch(&endpoints.all()).await.unwrap();
        let expected: Vec<u64> = demo::sample_catalog()
            .iter()
            .map(|entry| entry.product.id)
            .collect();
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn search_sends_query_parameter() {
        let server = demo::spawn(demo::loopback()).await.unwrap();
        let endpoints = Endpoints::new(server.base_url()).unwrap();

        let products = client().fetch(&endpoints.search("PHONE")).await.unwrap();
        let expected: Vec<u64> = demo::sample_catalog()
            .iter()
            .filter(|entry| entry.matches("PHONE"))
            .map(|entry| entry.product.id)
            .collect();
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert!(!expected.is_empty());
        assert_eq!(ids, expected);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let router = Router::new().route(
            "/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let server = demo::serve(router, demo::loopback()).await.unwrap();
        let endpoints = Endpoints::new(server.base_url()).unwrap();

        let err = client().fetch(&endpoints.all()).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let router = Router::new().route("/products", get(|| async { "<html>nope</html>" }));
        let server = demo::serve(router, demo::loopback()).await.unwrap();
        let endpoints = Endpoints::new(server.base_url()).unwrap();

        let err = client().fetch(&endpoints.all()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn bad_item_in_response_keeps_the_rest() {
        let router = Router::new().route(
            "/products",
            get(|| async {
                axum::Json(serde_json::json!({
                    "products": [
                        { "id": 1, "title": null, "price": "12.5" },
                        { "id": 2, "title": "Desk", "price": 120 },
                        "oops"
                    ]
                }))
            }),
        );
        let server = demo::serve(router, demo::loopback()).await.unwrap();
        let endpoints = Endpoints::new(server.base_url()).unwrap();

        let products = client().fetch(&endpoints.all()).await.unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(products[0].price, 12.5);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        // Grab a free port, then release it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoints = Endpoints::new(&format!("http://{}", addr)).unwrap();
        let err = client().fetch(&endpoints.all()).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
    }
}
