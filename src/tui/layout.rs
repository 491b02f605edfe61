//! Responsive breakpoint system for the product grid.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

/// Rows taken by one product card, borders included
pub const CARD_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Card columns in the product grid
    pub fn columns(&self) -> u16 {
        self.ordinal() as u16 + 1
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// How a card list maps onto a grid area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    /// Total rows needed for every card
    pub rows: usize,
    /// Rows that fit in the area at once
    pub visible_rows: usize,
}

impl GridMetrics {
    pub fn new(width: u16, height: u16, cards: usize) -> Self {
        let columns = Breakpoint::from_width(width).columns() as usize;
        Self {
            columns,
            rows: cards.div_ceil(columns),
            visible_rows: ((height / CARD_HEIGHT) as usize).max(1),
        }
    }

    /// Largest useful scroll offset (in rows)
    pub fn max_scroll(&self) -> usize {
        self.rows.saturating_sub(self.visible_rows)
    }
}
