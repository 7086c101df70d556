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

//! Keypad labels and arithmetic operators.
//!
//! Every button on the keypad maps to exactly one [`Key`]. Labels are parsed
//! from the strings shown on the buttons, plus a handful of ASCII aliases so
//! that keys such as `×` and `⌫` can be typed on the command line.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown key label '{0}'")]
pub(crate) struct UnknownKey(pub(crate) String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Returns `None` for division by a zero divisor, which is displayed as a
    /// message rather than a number. Every other case yields a float, which
    /// may be NaN or infinite (modulo by zero is NaN).
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide if rhs == 0.0 => None,
            Operator::Divide => Some(lhs / rhs),
            // Rust's float remainder takes the sign of the dividend
            Operator::Modulo => Some(lhs % rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Key {
    Digit(u8),
    DecimalPoint,
    Clear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl Key {
    /// The text printed on the keypad button.
    pub(crate) fn label(self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::DecimalPoint => ".".to_string(),
            Key::Clear => "C".to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
        }
    }

    /// Parses a single character label, used to expand runs such as `12+3=`.
    pub(crate) fn from_char(c: char) -> Option<Key> {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' => Key::DecimalPoint,
            'C' | 'c' => Key::Clear,
            '⌫' => Key::Backspace,
            '+' => Key::Operator(Operator::Add),
            '-' => Key::Operator(Operator::Subtract),
            '×' | '*' | 'x' => Key::Operator(Operator::Multiply),
            '÷' | '/' => Key::Operator(Operator::Divide),
            '%' => Key::Operator(Operator::Modulo),
            '=' => Key::Equals,
            _ => return None,
        };

        Some(key)
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bs") {
            return Ok(Key::Backspace);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::from_char(c).ok_or_else(|| UnknownKey(s.to_string())),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_button_label() {
        let labels = ["0", "5", "9", ".", "C", "⌫", "+", "-", "×", "÷", "%", "="];
        for label in labels {
            let key: Key = label.parse().unwrap();
            assert_eq!(key.label(), label);
        }
    }

    #[test]
    fn accepts_ascii_aliases() {
        assert_eq!("*".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("x".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("/".parse::<Key>(), Ok(Key::Operator(Operator::Divide)));
        assert_eq!("bs".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("c".parse::<Key>(), Ok(Key::Clear));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!("12".parse::<Key>(), Err(UnknownKey("12".to_string())));
        assert!("".parse::<Key>().is_err());
        assert!("?".parse::<Key>().is_err());
    }

    #[test]
    fn divide_by_zero_has_no_value() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(0.0, -0.0), None);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Some(3.0));
    }

    #[test]
    fn modulo_follows_the_dividend_sign() {
        assert_eq!(Operator::Modulo.apply(7.0, 2.0), Some(1.0));
        assert_eq!(Operator::Modulo.apply(-7.0, 2.0), Some(-1.0));
        assert!(Operator::Modulo.apply(7.0, 0.0).unwrap().is_nan());
    }
}
