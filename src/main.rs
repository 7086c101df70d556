// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Calculator TUI.
//!
//! A four-function terminal calculator with an on-screen keypad.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small calculator state machine.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, applies key presses
//!   to the calculator and renders the UI.
//! * An **Input Thread** forwards terminal key and mouse events.
//! * A **Tick Thread** drives periodic redraws and error message expiry.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. All events flow
//! through one `std::sync::mpsc` channel and are handled in order.

mod commander;
mod components;
mod config;
mod engine;
mod events;
mod logging;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    commander::Commander,
    components::KeypadView,
    config::AppConfig,
    engine::CalculatorEngine,
    events::{AppEvent, process_events},
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) engine: CalculatorEngine,
    pub(crate) keypad: KeypadView,
    pub(crate) commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = CalculatorEngine::new(config.error_display());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            engine,
            keypad: KeypadView::new(),
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Logging is optional, the calculator works without it
    let log_result = logging::init(&config);

    let mut app = App::new(config);

    match log_result {
        Ok(path) => info!(log = %path.display(), config = ?app.config, "starting"),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal, &app);

    info!("exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, if configured, so keypad buttons can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&mut stdout, &hex) {
            warn!(error = %e, "failed to set terminal background");
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    if app.config.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &App) {
    if app.config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture).ok();
    }
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
            };

            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering and bounds how late
    // an expired error message is cleared.
    let tx_tick = app.event_tx.clone();
    let tick_rate = app.config.tick_rate();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    process_events(terminal, app)
}
