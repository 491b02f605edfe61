// Demo mode: serve a built-in catalog over HTTP
//
// Starts a small axum server on loopback that speaks the same wire format as
// the real catalog API, then the client is pointed at it. Handy for trying the
// TUI offline and used as the HTTP fixture in tests.
//
// Run with: PRODUCT_SEARCH_DEMO=1 cargo run --release
//       or: cargo run -- --demo

use crate::catalog::Product;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A catalog product plus the category used for search matching
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub product: Product,
    pub category: String,
}

impl CatalogEntry {
    fn new(id: u64, title: &str, description: &str, price: f64, category: &str) -> Self {
        Self {
            product: Product {
                id,
                title: title.to_string(),
                description: description.to_string(),
                price,
                thumbnail: format!("https://cdn.dummyjson.com/products/images/{}/thumbnail.png", id),
            },
            category: category.to_string(),
        }
    }

    /// Case-insensitive substring match on title, description and category.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &self.product.title,
            &self.product.description,
            &self.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Response envelope, same shape as the real API
#[derive(Debug, Serialize)]
struct CatalogPage {
    products: Vec<CatalogEntry>,
    total: usize,
    skip: usize,
    limit: usize,
}

impl CatalogPage {
    fn from_entries(products: Vec<CatalogEntry>) -> Self {
        let total = products.len();
        Self {
            products,
            total,
            skip: 0,
            limit: total,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

type Catalog = Arc<Vec<CatalogEntry>>;

async fn list_products(State(catalog): State<Catalog>) -> Json<CatalogPage> {
    Json(CatalogPage::from_entries(catalog.as_ref().clone()))
}

async fn search_products(
    State(catalog): State<Catalog>,
    Query(params): Query<SearchParams>,
) -> Json<CatalogPage> {
    let hits = catalog
        .iter()
        .filter(|entry| entry.matches(&params.q))
        .cloned()
        .collect();
    tracing::debug!("Demo search {:?}", params.q);
    Json(CatalogPage::from_entries(hits))
}

/// Router serving the built-in catalog
pub fn router() -> Router {
    router_with(sample_catalog())
}

/// Router serving an arbitrary catalog
pub fn router_with(entries: Vec<CatalogEntry>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/search", get(search_products))
        .with_state(Arc::new(entries))
}

/// Loopback address with an OS-assigned port
pub fn loopback() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

/// Handle to a running demo server. Dropping it also stops the server.
pub struct DemoServer {
    base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl DemoServer {
    /// Base URL to hand to `Endpoints::new`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop accepting connections and wait for the server task
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// Start the built-in catalog server
pub async fn spawn(addr: SocketAddr) -> Result<DemoServer> {
    serve(router(), addr).await
}

/// Serve any router on `addr` until shutdown
pub async fn serve(router: Router, addr: SocketAddr) -> Result<DemoServer> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind demo catalog server to {}", addr))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read demo catalog server address")?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Fires on explicit shutdown or when the handle is dropped
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = result {
            tracing::error!("Demo catalog server failed: {}", e);
        }
    });

    tracing::info!("Demo catalog listening on http://{}", local_addr);

    Ok(DemoServer {
        base_url: format!("http://{}", local_addr),
        shutdown_tx: Some(shutdown_tx),
        handle,
    })
}

/// Built-in demo catalog
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            1,
            "iPhone 9",
            "An apple mobile which is nothing like apple",
            549.0,
            "smartphones",
        ),
        CatalogEntry::new(
            2,
            "iPhone X",
            "SIM-Free, Model A19211 6.5-inch Super Retina HD display with OLED technology",
            899.0,
            "smartphones",
        ),
        CatalogEntry::new(
            3,
            "Samsung Universe 9",
            "Samsung's new variant which goes beyond Galaxy to the Universe",
            1249.0,
            "smartphones",
        ),
        CatalogEntry::new(
            4,
            "OPPOF19",
            "OPPO F19 is officially announced on April 2021.",
            280.0,
            "smartphones",
        ),
        CatalogEntry::new(
            5,
            "Huawei P30",
            "Huawei’s re-badged P30 Pro New Edition was officially unveiled yesterday in Germany.",
            499.0,
            "smartphones",
        ),
        CatalogEntry::new(
            6,
            "MacBook Pro",
            "MacBook Pro 2021 with mini-LED display may launch between September, November",
            1749.0,
            "laptops",
        ),
        CatalogEntry::new(
            7,
            "Samsung Galaxy Book",
            "Samsung Galaxy Book S (2020) Laptop With Intel Lakefield Chip, 8GB of RAM Launched",
            1499.0,
            "laptops",
        ),
        CatalogEntry::new(
            8,
            "Microsoft Surface Laptop 4",
            "Style and speed. Stand out on HD video calls backed by Studio Mics.",
            1499.0,
            "laptops",
        ),
        CatalogEntry::new(
            9,
            "Essence Mascara Lash Princess",
            "Popular mascara known for its volumizing and lengthening effects.",
            9.99,
            "beauty",
        ),
        CatalogEntry::new(
            10,
            "Eyeshadow Palette with Mirror",
            "Versatile range of eyeshadow shades with a built-in mirror.",
            19.99,
            "beauty",
        ),
        CatalogEntry::new(
            11,
            "Calvin Klein CK One",
            "Classic unisex fragrance with a fresh and clean scent.",
            49.99,
            "fragrances",
        ),
        CatalogEntry::new(
            12,
            "Annibale Colombo Sofa",
            "Luxurious sofa crafted with high-quality materials.",
            2499.99,
            "furniture",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(sample_catalog().iter().all(|entry| entry.matches("   ")));
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let catalog = sample_catalog();
        let hits: Vec<u64> = catalog
            .iter()
            .filter(|entry| entry.matches("LAPTOP"))
            .map(|entry| entry.product.id)
            .collect();
        // Category hit (MacBook) plus title/description hits
        assert_eq!(hits, vec![6, 7, 8]);
    }

    #[test]
    fn no_hits_for_unknown_term() {
        assert!(!sample_catalog().iter().any(|entry| entry.matches("zeppelin")));
    }

    #[tokio::test]
    async fn search_route_returns_envelope() {
        let server = spawn(loopback()).await.unwrap();
        let url = format!("{}/products/search?q=iphone", server.base_url());

        let body: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(body["total"], 2);
        assert_eq!(body["products"][0]["title"], "iPhone 9");
        assert_eq!(body["products"][0]["category"], "smartphones");

        server.shutdown().await;
    }
}
