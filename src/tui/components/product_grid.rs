// Product grid component
//
// Lays product cards out in responsive columns (see layout::Breakpoint) and
// scrolls by whole rows. An empty result shows the placeholder text instead.

use crate::search::{ProductCard, WidgetState};
use crate::tui::app::App;
use crate::tui::layout::{GridMetrics, CARD_HEIGHT};
use crate::tui::theme::Theme;
use crate::util::{truncate_to_width, wrap_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Description lines per card
const DESCRIPTION_LINES: usize = 2;

/// Render the grid. Records scroll limits on `app` for the key handlers.
pub fn render(f: &mut Frame, area: Rect, app: &mut App, state: &WidgetState) {
    if let Some(text) = state.grid.placeholder() {
        app.grid_max_scroll = 0;
        app.grid_scroll = 0;
        render_placeholder(f, area, text, &app.theme);
        return;
    }

    let cards = state.grid.cards();
    let metrics = GridMetrics::new(area.width, area.height, cards.len());
    app.grid_max_scroll = metrics.max_scroll();
    app.grid_page = metrics.visible_rows;
    app.grid_scroll = app.grid_scroll.min(app.grid_max_scroll);

    let rows = cards
        .chunks(metrics.columns)
        .skip(app.grid_scroll)
        .take(metrics.visible_rows);

    for (i, row) in rows.enumerate() {
        let y = area.y + i as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, metrics.columns as u32);
                metrics.columns
            ])
            .split(row_area);

        for (card, cell) in row.iter().zip(cells.iter()) {
            render_card(f, *cell, card, &app.theme);
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let placeholder = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);

    f.render_widget(placeholder, area);
}

/// One card: image reference, title, description, price
fn render_card(f: &mut Frame, area: Rect, card: &ProductCard, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border));
    let inner = block.inner(area);
    let width = inner.width as usize;

    f.render_widget(block, area);
    f.render_widget(Paragraph::new(card_lines(card, width, theme)), inner);
}

fn card_lines(card: &ProductCard, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let image = if card.image_url.is_empty() {
        format!("▣ {}", card.image_alt)
    } else {
        format!("▣ {} ({})", card.image_alt, card.image_url)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&image, width),
            Style::default().fg(theme.card_image),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default()
                .fg(theme.card_title)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let description = wrap_to_width(&card.description, width, DESCRIPTION_LINES);
    let padding = DESCRIPTION_LINES - description.len();
    lines.extend(
        description
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(theme.card_text)))),
    );
    lines.extend(std::iter::repeat(Line::default()).take(padding + 1));

    lines.push(Line::from(Span::styled(
        card.price_label.clone(),
        Style::default()
            .fg(theme.price)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(description: &str) -> ProductCard {
        ProductCard {
            id: 1,
            image_url: "https://cdn.test/1.jpg".to_string(),
            image_alt: "iPhone 9".to_string(),
            title: "iPhone 9".to_string(),
            description: description.to_string(),
            price_label: "$549".to_string(),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn card_fills_inner_height() {
        let lines = card_lines(&card("short"), 30, &Theme::dark());
        assert_eq!(lines.len() as u16, CARD_HEIGHT - 2);
        assert_eq!(text(&lines[1]), "iPhone 9");
        assert_eq!(text(&lines[2]), "short");
        assert_eq!(text(lines.last().unwrap()), "$549");
    }

    #[test]
    fn long_description_is_wrapped_and_cut() {
        let lines = card_lines(
            &card("An apple mobile which is nothing like apple at all, really"),
            16,
            &Theme::dark(),
        );
        assert_eq!(lines.len() as u16, CARD_HEIGHT - 2);
        assert_eq!(text(&lines[2]), "An apple mobile");
        assert!(text(&lines[3]).ends_with('…'));
    }

    #[test]
    fn image_line_carries_alt_text() {
        let lines = card_lines(&card(""), 60, &Theme::dark());
        assert_eq!(text(&lines[0]), "▣ iPhone 9 (https://cdn.test/1.jpg)");
    }
}
