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

//! On-screen keypad widget and focus management.
//!
//! The keypad is a fixed grid of buttons. A focus highlight can be moved over
//! it with the arrow keys, and the button areas from the last render are kept
//! so that mouse clicks can be mapped back to keys.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::engine::{Key, Operator};

/// Keypad rows, each button paired with its relative width.
pub(crate) const KEYPAD_ROWS: [&[(Key, u16)]; 5] = [
    &[
        (Key::Clear, 1),
        (Key::Backspace, 1),
        (Key::Operator(Operator::Modulo), 1),
        (Key::Operator(Operator::Divide), 1),
    ],
    &[
        (Key::Digit(7), 1),
        (Key::Digit(8), 1),
        (Key::Digit(9), 1),
        (Key::Operator(Operator::Multiply), 1),
    ],
    &[
        (Key::Digit(4), 1),
        (Key::Digit(5), 1),
        (Key::Digit(6), 1),
        (Key::Operator(Operator::Subtract), 1),
    ],
    &[
        (Key::Digit(1), 1),
        (Key::Digit(2), 1),
        (Key::Digit(3), 1),
        (Key::Operator(Operator::Add), 1),
    ],
    &[(Key::Digit(0), 2), (Key::DecimalPoint, 1), (Key::Equals, 2)],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeypadAction {
    Press(Key),
}

pub(crate) struct KeypadView {
    row: usize,
    column: usize,
    hit_areas: Vec<(Rect, Key)>,
}

impl KeypadView {
    pub(crate) fn new() -> Self {
        Self {
            row: 0,
            column: 0,
            hit_areas: Vec::new(),
        }
    }

    pub(crate) fn focused_key(&self) -> Key {
        KEYPAD_ROWS[self.row][self.column].0
    }

    /// The key whose last rendered area contains the given cell.
    pub(crate) fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        let position = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, key)| *key)
    }

    fn focus_key(&mut self, key: Key) {
        for (r, buttons) in KEYPAD_ROWS.iter().enumerate() {
            if let Some(c) = buttons.iter().position(|(k, _)| *k == key) {
                self.row = r;
                self.column = c;
                return;
            }
        }
    }

    fn goto_up(&mut self) {
        self.row = if self.row == 0 { KEYPAD_ROWS.len() - 1 } else { self.row - 1 };
        self.clamp_column();
    }

    fn goto_down(&mut self) {
        self.row = (self.row + 1) % KEYPAD_ROWS.len();
        self.clamp_column();
    }

    fn goto_left(&mut self) {
        let len = KEYPAD_ROWS[self.row].len();
        self.column = if self.column == 0 { len - 1 } else { self.column - 1 };
    }

    fn goto_right(&mut self) {
        let len = KEYPAD_ROWS[self.row].len();
        self.column = (self.column + 1) % len;
    }

    // Rows differ in length, the bottom row only has three buttons
    fn clamp_column(&mut self) {
        let len = KEYPAD_ROWS[self.row].len();
        self.column = self.column.min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_appears_once() {
        let keys: Vec<Key> = KEYPAD_ROWS
            .iter()
            .flat_map(|row| row.iter().map(|(k, _)| *k))
            .collect();
        assert_eq!(keys.len(), 19);

        for d in 0..=9 {
            assert_eq!(keys.iter().filter(|k| **k == Key::Digit(d)).count(), 1);
        }
    }

    #[test]
    fn focus_wraps_and_clamps() {
        let mut keypad = KeypadView::new();
        assert_eq!(keypad.focused_key(), Key::Clear);

        keypad.goto_left();
        assert_eq!(keypad.focused_key(), Key::Operator(Operator::Divide));

        keypad.goto_up();
        assert_eq!(keypad.focused_key(), Key::Equals);

        keypad.goto_down();
        assert_eq!(keypad.focused_key(), Key::Operator(Operator::Modulo));

        keypad.goto_left();
        keypad.goto_down();
        assert_eq!(keypad.focused_key(), Key::Digit(8));
    }

    #[test]
    fn focus_follows_a_key() {
        let mut keypad = KeypadView::new();
        keypad.focus_key(Key::DecimalPoint);
        assert_eq!(keypad.focused_key(), Key::DecimalPoint);
    }

    #[test]
    fn no_hit_before_first_render() {
        let keypad = KeypadView::new();
        assert_eq!(keypad.key_at(0, 0), None);
    }
}
