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

//! Input handling and event processing for the keypad.
//!
//! This module maps terminal key and mouse events to focus movement and
//! button presses, and forwards presses to the application event loop.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::{
    components::keypad::{KeypadAction, KeypadView},
    events::{AppEvent, AppEventProcessor},
};

impl KeypadView {
    pub(crate) fn handle_input(&mut self, event: &Event) -> Option<KeypadAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('k') | KeyCode::Up => self.goto_up(),
                KeyCode::Char('j') | KeyCode::Down => self.goto_down(),
                KeyCode::Char('h') | KeyCode::Left => self.goto_left(),
                KeyCode::Char('l') | KeyCode::Right => self.goto_right(),

                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Some(KeypadAction::Press(self.focused_key()));
                }

                _ => {}
            },

            Event::Mouse(mouse_event) => {
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Some(key) = self.key_at(mouse_event.column, mouse_event.row) {
                        self.focus_key(key);
                        return Some(KeypadAction::Press(key));
                    }
                }
            }

            _ => {}
        }

        None
    }
}

impl AppEventProcessor for KeypadView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(KeypadAction::Press(key)) = self.handle_input(&event) {
            event_tx.send(AppEvent::Press(key))?;
        }

        Ok(())
    }
}
