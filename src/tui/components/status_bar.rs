// Status bar component
//
// Renders key hints and the newest captured log line at the bottom.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: Full key hints
/// - Narrow: Compact hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let hints = if bp.at_least(Breakpoint::Wide) {
        " Type to search │ Esc/Ctrl+U clear │ ↑↓ PgUp PgDn scroll │ Ctrl+C quit "
    } else {
        " Esc clear │ ↑↓ scroll │ ^C quit "
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(app.theme.status_bar))];

    if let Some(entry) = app.log_buffer.latest() {
        let room = (area.width as usize).saturating_sub(hints.width() + 3);
        if room > 0 {
            spans.push(Span::styled("│ ", Style::default().fg(app.theme.border)));
            spans.push(Span::styled(
                truncate_to_width(&format_entry(&entry), room),
                Style::default().fg(level_color(app, entry.level)),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(status, area);
}

fn format_entry(entry: &LogEntry) -> String {
    format!(
        "{} {} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn level_color(app: &App, level: LogLevel) -> ratatui::style::Color {
    match level {
        LogLevel::Error => app.theme.error,
        LogLevel::Warn => app.theme.loading,
        _ => app.theme.muted,
    }
}
