// TUI application state
//
// Owns the search controller and the text in the search box. Every edit to
// the input goes through `SearchController::handle_search`; the grid itself is
// read from the controller's shared widget state on each frame.

use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::search::{SearchController, SharedWidget, WidgetState};

/// Spinner frames for the loading indicator
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    controller: SearchController,

    /// Shared with fetch tasks; read once per frame
    pub(crate) widget: SharedWidget,

    /// Current contents of the search box
    pub input: String,

    /// Whether the app should quit
    pub should_quit: bool,

    pub theme: Theme,

    /// Captured tracing output (footer shows the newest entry)
    pub log_buffer: LogBuffer,

    /// First visible grid row
    pub grid_scroll: usize,

    /// Largest scroll offset for the last drawn frame
    pub grid_max_scroll: usize,

    /// Rows per page for the last drawn frame
    pub grid_page: usize,

    /// Animation frame counter for spinners
    pub animation_frame: usize,

    /// Catalog host shown in the title bar
    pub api_host: String,
}

impl App {
    pub fn new(controller: SearchController, log_buffer: LogBuffer, config: &Config) -> Self {
        let widget = controller.widget();
        let api_host = controller.endpoints().host().to_string();
        Self {
            controller,
            widget,
            input: String::new(),
            should_quit: false,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            grid_scroll: 0,
            grid_max_scroll: 0,
            grid_page: 1,
            animation_frame: 0,
            api_host,
        }
    }

    /// Kick off the initial unfiltered load
    pub fn start(&self) {
        self.controller.load_catalog();
    }

    /// Copy of the widget state for this frame
    pub fn widget_state(&self) -> WidgetState {
        self.widget
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a debounced search is still waiting for its quiet period
    pub fn search_pending(&self) -> bool {
        self.controller.search_pending()
    }

    pub fn quiet_period_ms(&self) -> u128 {
        self.controller.quiet_period().as_millis()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input editing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.input_changed();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.input_changed();
        }
    }

    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.input.clear();
            self.input_changed();
        }
    }

    fn input_changed(&mut self) {
        self.grid_scroll = 0;
        self.controller.handle_search(&self.input);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Grid scrolling
    // ─────────────────────────────────────────────────────────────────────────

    pub fn scroll_down(&mut self, rows: usize) {
        self.grid_scroll = (self.grid_scroll + rows).min(self.grid_max_scroll);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.grid_scroll = self.grid_scroll.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.grid_scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.grid_scroll = self.grid_max_scroll;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
