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

//! Terminal background colour control.
//!
//! Uses OSC 11 / OSC 111 escape sequences, supported by most modern terminal
//! emulators (XTerm, Alacritty, Kitty, iTerm2). Terminals without support
//! ignore them.

use std::io::{self, Write};

/// Sets the terminal background to `hex_color` (e.g. `"#281432"`).
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_color: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_color)?;
    out.flush()
}

/// Reverts the terminal background to the user's own setting.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1b]111\x07")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_osc_sequences() {
        let mut out = Vec::new();
        set_terminal_bg(&mut out, "#281432").unwrap();
        reset_terminal_bg(&mut out).unwrap();
        assert_eq!(out, b"\x1b]11;#281432\x07\x1b]111\x07");
    }
}
