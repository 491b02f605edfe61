// Theme support for the TUI
//
// Two palettes selectable from config: "dark" (terminal ANSI palette) and
// "light" (true color, readable on light backgrounds).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Shell
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub status_bar: Color,
    pub input: Color,
    pub input_border: Color,

    // Widget status
    pub loading: Color,
    pub error: Color,
    pub muted: Color,

    // Product cards
    pub card_border: Color,
    pub card_title: Color,
    pub card_text: Color,
    pub card_image: Color,
    pub price: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Dark theme - uses terminal's ANSI palette
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            title: Color::Cyan,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            status_bar: Color::Green,
            input: Color::White,
            input_border: Color::Cyan,
            loading: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            card_border: Color::Gray,
            card_title: Color::White,
            card_text: Color::Gray,
            card_image: Color::Blue,
            price: Color::Green,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            title: Color::Rgb(0x00, 0x5f, 0x87),  // deep teal
            border: Color::Rgb(0xa0, 0xa0, 0xa0), // mid gray
            border_type: BorderType::Plain,
            status_bar: Color::Rgb(0x2e, 0x7d, 0x32), // forest green
            input: Color::Black,
            input_border: Color::Rgb(0x00, 0x5f, 0x87),
            loading: Color::Rgb(0xb2, 0x6a, 0x00), // amber
            error: Color::Rgb(0xc6, 0x28, 0x28),   // red
            muted: Color::Rgb(0x75, 0x75, 0x75),
            card_border: Color::Rgb(0x9e, 0x9e, 0x9e),
            card_title: Color::Black,
            card_text: Color::Rgb(0x42, 0x42, 0x42),
            card_image: Color::Rgb(0x15, 0x65, 0xc0), // blue
            price: Color::Rgb(0x2e, 0x7d, 0x32),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
