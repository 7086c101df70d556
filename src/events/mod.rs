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

//! Application event distribution and orchestration.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Terminal input and ticks arrive as [`AppEvent`]s through a
//!    single channel, so one event is fully processed before the next.
//! 2. **Process**: The [`process_events`] function routes input to the
//!    command line and keypad, and applies key presses to the calculator.
//! 3. **Render**: After each event is processed, the UI is re-drawn.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{Terminal, backend::Backend};

use crate::{App, engine::Key, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    /// A calculator key, from the keypad or the command line.
    Press(Key),

    Resize,
    Tick,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
            AppEvent::Press(key) => handle_press(app, key),
            AppEvent::Resize => {}
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{config::AppConfig, engine::Operator};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn run_presses(keys: &[Key]) -> (App, Terminal<TestBackend>) {
        let mut app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();

        for key in keys {
            app.event_tx.send(AppEvent::Press(*key)).unwrap();
        }
        app.event_tx.send(AppEvent::ExitApplication).unwrap();

        process_events(&mut terminal, &mut app).unwrap();
        (app, terminal)
    }

    #[test]
    fn presses_reach_the_engine_and_the_screen() {
        let (app, terminal) = run_presses(&[
            Key::Digit(2),
            Key::DecimalPoint,
            Key::Digit(5),
            Key::Operator(Operator::Add),
            Key::Digit(2),
            Key::DecimalPoint,
            Key::Digit(5),
            Key::Equals,
        ]);

        assert_eq!(app.engine.state().last_result, "5");
        assert!(screen_text(&terminal).contains("Calculator"));
    }

    #[test]
    fn invalid_equals_shows_the_error_line() {
        let (app, terminal) = run_presses(&[Key::Digit(4), Key::Equals]);

        assert!(app.engine.state().error.is_some());
        assert!(screen_text(&terminal).contains("Invalid operation"));
    }

    #[test]
    fn events_after_exit_are_not_processed() {
        let mut app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();

        app.event_tx.send(AppEvent::ExitApplication).unwrap();
        app.event_tx.send(AppEvent::Press(Key::Digit(9))).unwrap();

        process_events(&mut terminal, &mut app).unwrap();
        assert_eq!(app.engine.state().current_entry, "");
    }
}
