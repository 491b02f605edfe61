// Components module - reusable UI building blocks
//
// Rendered top to bottom on every frame:
// - Title bar: App name, catalog host, result count
// - Search bar: The text input
// - Status line: Loading indicator, error message, pending search
// - Product grid: Cards or the "no products" placeholder
// - Status bar: Key hints and the newest log line
//
// Each component is a focused, single-responsibility module.

pub mod product_grid;
pub mod search_bar;
pub mod status_bar;
pub mod status_line;
pub mod title_bar;
