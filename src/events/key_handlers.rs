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

//! Terminal input routing.
//!
//! Key events go to the command line first; if it does not consume them,
//! the keypad sees them, then the global bindings. Mouse events only concern
//! the keypad.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to command-line editing, keypad focus and presses,
/// and application control.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    app.keypad.process_event(event, &app.event_tx)?;

    process_global_key_event(app, key)
}

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    app.keypad.process_event(Event::Mouse(mouse), &app.event_tx)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, engine::Key};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_unless_typing_a_command() {
        let mut app = App::new(AppConfig::default());

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));

        process_key_event(&mut app, key(KeyCode::Char(':'))).unwrap();
        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(app.commander.input.value(), "q");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(AppConfig::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        process_key_event(&mut app, ctrl_c).unwrap();
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn enter_presses_the_focused_keypad_button() {
        let mut app = App::new(AppConfig::default());

        process_key_event(&mut app, key(KeyCode::Down)).unwrap();
        process_key_event(&mut app, key(KeyCode::Right)).unwrap();
        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::Press(Key::Digit(8)))));
    }
}
