// UI rendering logic
//
// Lays out the screen and delegates each region to a component. Called on
// every frame with a fresh snapshot of the widget state.

use super::app::App;
use super::components::{product_grid, search_bar, status_bar, status_line, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Split the terminal into five vertical sections:
    // - Title bar (3 lines fixed)
    // - Search input (3 lines fixed)
    // - Status line (1 line - loading / error)
    // - Product grid (fills remaining space)
    // - Status bar (2 lines fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Product grid - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    // One lock per frame; fetch tasks never wait on the renderer for long
    let state = app.widget_state();

    title_bar::render(f, chunks[0], app, &state);
    search_bar::render(f, chunks[1], app);
    status_line::render(f, chunks[2], app, &state);
    product_grid::render(f, chunks[3], app, &state);
    status_bar::render(f, chunks[4], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::tui::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn draws_cards_and_count() {
        let (mut app, _source) = test_app();
        app.widget.lock().unwrap().display_products(&[Product {
            id: 1,
            title: "iPhone".to_string(),
            description: "An apple mobile".to_string(),
            price: 999.0,
            thumbnail: "1.jpg".to_string(),
        }]);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("1 product "));
        assert!(text.contains("iPhone"));
        assert!(text.contains("$999"));
        assert!(text.contains("Search products..."));
    }

    #[tokio::test]
    async fn draws_placeholder_and_error() {
        let (mut app, _source) = test_app();
        {
            let mut widget = app.widget.lock().unwrap();
            widget.show_error("Error loading products. Please try again later.");
            widget.display_products(&[]);
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("No products found"));
        assert!(text.contains("Error loading products. Please try again later."));
    }

    #[tokio::test]
    async fn loading_indicator_takes_priority() {
        let (mut app, _source) = test_app();
        {
            let mut widget = app.widget.lock().unwrap();
            widget.show_loading();
            widget.show_error("boom");
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Loading..."));
        assert!(!text.contains("boom"));

        app.widget.lock().unwrap().hide_loading();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(!text.contains("Loading..."));
        assert!(text.contains("boom"));
    }
}
