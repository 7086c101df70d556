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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, including one colour
//! per keypad button class, and converts colours to the hexadecimal form used
//! for terminal emulator styling.

use ratatui::style::Color;

use crate::engine::Key;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) display_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) key_fg: Color,
    pub(crate) digit_key_bg: Color,
    pub(crate) operator_key_bg: Color,
    pub(crate) destructive_key_bg: Color,
    pub(crate) equals_key_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            display_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(242, 96, 96),
            commander_colour: Color::Rgb(179, 157, 219),
            commander_bg: Color::Rgb(50, 30, 60),

            key_fg: Color::Rgb(255, 255, 255),
            digit_key_bg: Color::Rgb(72, 58, 84),
            operator_key_bg: Color::Rgb(94, 72, 130),
            destructive_key_bg: Color::Rgb(140, 52, 64),
            equals_key_bg: Color::Rgb(176, 120, 20),
        }
    }

    /// The background colour of a keypad button.
    pub(crate) fn key_bg(&self, key: Key) -> Color {
        match key {
            Key::Clear | Key::Backspace => self.destructive_key_bg,
            Key::Equals => self.equals_key_bg,
            Key::Operator(_) => self.operator_key_bg,
            Key::Digit(_) | Key::DecimalPoint => self.digit_key_bg,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything other than an `Rgb` colour, since named
    /// and indexed colours depend on the terminal palette.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    #[test]
    fn hex_for_rgb_only() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn key_classes_have_distinct_colours() {
        let theme = Theme::default();
        assert_eq!(theme.key_bg(Key::Clear), theme.key_bg(Key::Backspace));
        assert_eq!(theme.key_bg(Key::Digit(3)), theme.key_bg(Key::DecimalPoint));
        assert_ne!(theme.key_bg(Key::Equals), theme.key_bg(Key::Digit(3)));
        assert_ne!(
            theme.key_bg(Key::Operator(Operator::Modulo)),
            theme.key_bg(Key::Clear)
        );
    }
}
