// Title bar component
//
// Renders the app title, the catalog host being searched and the result count.

use crate::config::VERSION;
use crate::search::WidgetState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App, state: &WidgetState) {
    let title_text = format!(" 🛒 Product Search v{} ──── {}", VERSION, app.api_host);

    let count = match state.grid.placeholder() {
        Some(_) => " 0 products ".to_string(),
        None => match state.grid.cards().len() {
            1 => " 1 product ".to_string(),
            n => format!(" {} products ", n),
        },
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(count).right_aligned()),
        );

    f.render_widget(title, area);
}
