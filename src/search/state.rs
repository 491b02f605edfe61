//! Widget state: loading indicator, error element and grid
//!
//! Visibility of the loading indicator and error element plus the grid
//! contents. Shared between fetch tasks (writers) and the render loop (reader).

use super::render::{render_products, GridView};
use crate::catalog::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    /// Loading indicator visible
    pub loading: bool,
    /// Error element; visible when `Some`
    pub error: Option<String>,
    /// Grid container contents
    pub grid: GridView,
}

impl WidgetState {
    /// Show the loading indicator. Starting a load also hides a stale error.
    pub fn show_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }

    /// Replace the grid with the rendered product list
    pub fn display_products(&mut self, products: &[Product]) {
        self.grid = render_products(products);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::render::NO_PRODUCTS;

    #[test]
    fn starts_blank() {
        let state = WidgetState::default();
        assert!(!state.loading);
        assert!(!state.error_visible());
        assert!(state.grid.cards().is_empty());
        assert_eq!(state.grid.placeholder(), None);
    }

    #[test]
    fn loading_hides_previous_error() {
        let mut state = WidgetState::default();
        state.show_error("boom");
        assert!(state.error_visible());

        state.show_loading();
        assert!(state.loading);
        assert!(!state.error_visible());
    }

    #[test]
    fn hide_loading_keeps_error() {
        let mut state = WidgetState::default();
        state.show_loading();
        state.show_error("boom");
        state.hide_loading();

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn display_replaces_grid() {
        let mut state = WidgetState::default();
        state.display_products(&[Product {
            id: 1,
            title: "Lamp".to_string(),
            ..Default::default()
        }]);
        assert_eq!(state.grid.cards().len(), 1);

        state.display_products(&[]);
        assert_eq!(state.grid.placeholder(), Some(NO_PRODUCTS));
    }
}
