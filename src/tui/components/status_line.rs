// Status line component
//
// One row between the search bar and the grid. The loading indicator takes
// priority; otherwise the error message (if any); otherwise a hint that a
// typed query is waiting for the quiet period.

use crate::search::WidgetState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &WidgetState) {
    // One row: loading wins over an error, which stays set and reappears when loading ends
    let line = if state.loading {
        Line::from(Span::styled(
            format!(" {} Loading...", app.spinner_char()),
            Style::default().fg(app.theme.loading),
        ))
    } else if let Some(message) = &state.error {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD),
        ))
    } else if app.search_pending() {
        Line::from(Span::styled(
            format!(" … searching after {}ms pause", app.quiet_period_ms()),
            Style::default().fg(app.theme.muted),
        ))
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line), area);
}
