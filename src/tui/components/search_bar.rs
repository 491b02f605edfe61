// Search bar component
//
// The text input. Shows a hint when empty and keeps the terminal cursor at
// the end of the typed text.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search products...";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let inner_width = area.width.saturating_sub(2) as usize;

    // Keep the tail of long input visible
    let input_width = app.input.width();
    let visible = if input_width < inner_width {
        app.input.as_str()
    } else {
        let skip = input_width + 1 - inner_width;
        let mut dropped = 0;
        let mut start = 0;
        for (i, c) in app.input.char_indices() {
            if dropped >= skip {
                start = i;
                break;
            }
            dropped += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            start = i + c.len_utf8();
        }
        &app.input[start..]
    };

    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(app.theme.input)))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.input_border))
            .title(" Search "),
    );

    f.render_widget(input, area);

    if area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 1 + (visible.width() as u16).min(area.width - 3);
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
