// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the search box and product grid

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::search::SearchController;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, starts the initial catalog load, runs the event loop,
/// and restores the terminal when done.
pub async fn run_tui(
    controller: SearchController,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(controller, log_buffer, config);
    app.start();

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles two kinds of wakeups:
/// 1. Keyboard input (editing the query, scrolling, quitting)
/// 2. Timer ticks (spinner animation and picking up finished fetches)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Terminals with keyboard enhancement also report releases
    if key_event.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => app.should_quit = true,
        KeyCode::Char('u') if ctrl => app.clear_input(),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.insert_char(c),

        KeyCode::Down => app.scroll_down(1),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(app.grid_page),
        KeyCode::PageUp => app.scroll_up(app.grid_page),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
}
