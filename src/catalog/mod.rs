//! Catalog API: product model, endpoint URLs and the HTTP product source
//!
//! Wire format (dummyjson-compatible):
//! - `GET {base}/products`             -> `{ "products": [Product, ...] }`
//! - `GET {base}/products/search?q=..` -> `{ "products": [Product, ...] }`
//!
//! Envelope fields other than `products` (total, skip, limit) are ignored.

mod client;
mod decode;
mod error;

pub use client::{HttpCatalog, ProductSource};
pub use error::FetchError;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// A single catalog item, taken verbatim from the API response.
///
/// Every field falls back to its default when missing, `null` or oddly typed,
/// so one malformed product doesn't fail the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "decode::id")]
    pub id: u64,
    #[serde(deserialize_with = "decode::text")]
    pub title: String,
    #[serde(deserialize_with = "decode::text")]
    pub description: String,
    #[serde(deserialize_with = "decode::price")]
    pub price: f64,
    #[serde(deserialize_with = "decode::text")]
    pub thumbnail: String,
}

/// Response envelope shared by the list and search endpoints.
/// A missing or non-array `products` is an error; bad items inside it are not.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(deserialize_with = "decode::products")]
    pub products: Vec<Product>,
}

/// Resolved endpoint URLs for one API base
#[derive(Debug, Clone)]
pub struct Endpoints {
    products: Url,
    search: Url,
}

impl Endpoints {
    /// Build endpoints from a base URL such as `https://dummyjson.com`
    pub fn new(base: &str) -> Result<Self> {
        let base = base.trim_end_matches('/');

        let products = Url::parse(&format!("{}/products", base))
            .with_context(|| format!("Invalid catalog API base URL: {:?}", base))?;
        let search = Url::parse(&format!("{}/products/search", base))
            .with_context(|| format!("Invalid catalog API base URL: {:?}", base))?;

        Ok(Self { products, search })
    }

    /// Unfiltered catalog
    pub fn all(&self) -> Url {
        self.products.clone()
    }

    /// Search endpoint with `q` percent-encoded
    pub fn search(&self, query: &str) -> Url {
        let mut url = self.search.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Host part of the base, for display
    pub fn host(&self) -> &str {
        self.products.host_str().unwrap_or("?")
    }
}
