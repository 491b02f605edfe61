//! Search-and-render controller
//!
//! Wires one text input to one product grid:
//!
//! ```text
//! keystroke ─▶ handle_search ─▶ Debouncer (300ms) ─▶ fetch_products ─▶ display_products
//!                   │                                      ▲
//!                   └── empty input ─▶ full catalog ───────┘ (no delay)
//! ```
//!
//! Fetches run on their own tokio tasks and write into a shared `WidgetState`.
//! Responses are applied in arrival order; an older, slower response can
//! overwrite a newer one.

mod render;
mod state;


pub use render::ProductCard;
pub use state::WidgetState;

use crate::catalog::{Endpoints, FetchError, Product, ProductSource};
use crate::debounce::Debouncer;
use reqwest::Url;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Widget state shared with the render loop.
/// std Mutex: the render loop reads it synchronously every frame.
pub type SharedWidget = Arc<Mutex<WidgetState>>;

/// State reachable from fetch tasks
struct Shared {
    source: Arc<dyn ProductSource>,
    endpoints: Endpoints,
    widget: SharedWidget,
    /// Monotonic request number, for correlating log lines
    requests: AtomicU64,
}

impl Shared {
    fn update<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        // A poisoned lock means a frame panicked mid-draw; the data is still valid
        let mut widget = self.widget.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut widget)
    }

    async fn fetch_products(&self, url: &Url) -> Vec<Product> {
        let request = self.requests.fetch_add(1, Ordering::Relaxed) + 1;

        self.update(WidgetState::show_loading);
        let _loading = LoadingGuard(self);

        tracing::debug!(request, %url, "Fetching products");
        match self.source.fetch(url).await {
            Ok(products) => {
                tracing::debug!(request, count = products.len(), "Products loaded");
                products
            }
            Err(e) => {
                tracing::warn!(request, %url, "Product fetch failed: {}", e);
                self.update(|w| w.show_error(FetchError::USER_MESSAGE));
                Vec::new()
            }
        }
    }

    fn display_products(&self, products: &[Product]) {
        self.update(|w| w.display_products(products));
    }

    async fn load(&self, url: Url) -> Vec<Product> {
        let products = self.fetch_products(&url).await;
        self.display_products(&products);
        products
    }
}

/// Hides the loading indicator on every exit path, including an aborted task
struct LoadingGuard<'a>(&'a Shared);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.update(WidgetState::hide_loading);
    }
}

/// Controller bound to one input and one grid
pub struct SearchController {
    shared: Arc<Shared>,
    debouncer: Debouncer,
}

impl SearchController {
    pub fn new(source: Arc<dyn ProductSource>, endpoints: Endpoints, quiet_period: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                endpoints,
                widget: Arc::new(Mutex::new(WidgetState::default())),
                requests: AtomicU64::new(0),
            }),
            debouncer: Debouncer::new(quiet_period),
        }
    }

    /// Handle for readers (the render loop)
    pub fn widget(&self) -> SharedWidget {
        self.shared.widget.clone()
    }

    /// Copy of the current widget state
    pub fn snapshot(&self) -> WidgetState {
        self.shared.update(|w| w.clone())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.shared.endpoints
    }

    /// GET `url` and return its products.
    ///
    /// Shows the loading indicator while in flight. Any failure shows the static
    /// error message and yields an empty list; nothing is propagated.
    pub async fn fetch_products(&self, url: &Url) -> Vec<Product> {
        self.shared.fetch_products(url).await
    }

    /// Render `products` into the grid (placeholder when empty)
    pub fn display_products(&self, products: &[Product]) {
        self.shared.display_products(products);
    }

    /// Fetch and display the unfiltered catalog on a background task
    pub fn load_catalog(&self) {
        let shared = self.shared.clone();
        tokio::spawn(async move {
            let url = shared.endpoints.all();
            shared.load(url).await;
        });
    }

    /// React to the input changing to `input`.
    ///
    /// Always cancels the pending search. Empty input loads the full catalog
    /// right away; anything else is searched after the quiet period.
    pub fn handle_search(&mut self, input: &str) {
        let query = input.trim().to_string();

        if self.debouncer.cancel() {
            tracing::trace!("Pending search replaced");
        }

        if query.is_empty() {
            self.load_catalog();
            return;
        }

        let shared = self.shared.clone();
        self.debouncer.schedule(async move {
            let url = shared.endpoints.search(&query);
            shared.load(url).await;
        });
    }

    /// Run a search immediately and wait for it (no debounce).
    /// Empty input means the full catalog. Returns what was displayed.
    pub async fn search_now(&self, input: &str) -> Vec<Product> {
        let query = input.trim();
        let url = if query.is_empty() {
            self.shared.endpoints.all()
        } else {
            self.shared.endpoints.search(query)
        };
        let products = self.fetch_products(&url).await;
        self.display_products(&products);
        products
    }

    /// Whether a debounced search is still waiting for its quiet period
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn quiet_period(&self) -> Duration {
        self.debouncer.delay()
    }
}
