//! Product list → grid view model
//!
//! Pure mapping with no terminal access. The TUI draws the result and the
//! headless `search` command prints it.

use crate::catalog::Product;
use std::fmt::Write as _;

/// Text shown in place of the grid when a fetch yields nothing
pub const NO_PRODUCTS: &str = "No products found";

/// One rendered catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: u64,
    pub image_url: String,
    /// Alt text for the image (the product title)
    pub image_alt: String,
    pub title: String,
    pub description: String,
    /// `$` followed by the price, e.g. `$999` or `$9.99`
    pub price_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            image_url: product.thumbnail.clone(),
            image_alt: product.title.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price_label: price_label(product.price),
        }
    }
}

/// What the grid container shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Placeholder(String),
    Cards(Vec<ProductCard>),
}

impl Default for GridView {
    /// Nothing rendered yet
    fn default() -> Self {
        GridView::Cards(Vec::new())
    }
}

impl GridView {
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            GridView::Cards(cards) => cards.as_slice(),
            GridView::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            GridView::Placeholder(text) => Some(text.as_str()),
            GridView::Cards(_) => None,
        }
    }

    /// Plain-text rendering for non-interactive output
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        match self {
            GridView::Placeholder(text) => {
                let _ = writeln!(out, "{}", text);
            }
            GridView::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "{}  {}", card.title, card.price_label);
                    let _ = writeln!(out, "  {}", card.description);
                    let _ = writeln!(out, "  [{}]", card.image_url);
                }
            }
        }
        out
    }
}

/// `$` plus the shortest decimal that round-trips the price. Plain positional
/// digits at any magnitude, never exponent notation.
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

/// Render a product list: placeholder when empty, one card per product otherwise
pub fn render_products(products: &[Product]) -> GridView {
    if products.is_empty() {
        return GridView::Placeholder(NO_PRODUCTS.to_string());
    }
    GridView::Cards(products.iter().map(ProductCard::from).collect())
}
