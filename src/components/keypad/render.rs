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

//! UI rendering logic for the keypad.
//!
//! Buttons are laid out row by row using their relative widths, coloured by
//! key class, and the focused button is drawn with an accent border. The area
//! of every button is recorded for mouse hit testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    components::keypad::{KEYPAD_ROWS, KeypadView},
    render::Render,
    theme::Theme,
};

impl Render for KeypadView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.hit_areas.clear();

        let rows = Layout::vertical(KEYPAD_ROWS.map(|_| Constraint::Fill(1))).split(area);

        for (r, (buttons, row_area)) in KEYPAD_ROWS.iter().zip(rows.iter()).enumerate() {
            let cells = Layout::horizontal(buttons.iter().map(|(_, weight)| Constraint::Fill(*weight)))
                .split(*row_area);

            for (c, ((key, _), cell)) in buttons.iter().zip(cells.iter()).enumerate() {
                let focused = r == self.row && c == self.column;

                let border_style = if focused {
                    Style::default().fg(theme.accent_colour)
                } else {
                    Style::default().fg(theme.border_colour)
                };

                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style);

                // Centre the label vertically inside the border
                let inner = block.inner(*cell);
                let padding = inner.height.saturating_sub(1) / 2;
                let mut label = vec![Line::default(); padding as usize];
                label.push(Line::from(key.label()));

                let mut style = Style::default()
                    .fg(theme.key_fg)
                    .bg(theme.key_bg(*key))
                    .add_modifier(Modifier::BOLD);
                if focused {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                let button = Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(block);

                f.render_widget(button, *cell);
                self.hit_areas.push((*cell, *key));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::engine::{Key, Operator};

    #[test]
    fn records_a_hit_area_per_button() {
        let mut terminal = Terminal::new(TestBackend::new(20, 15)).unwrap();
        let mut keypad = KeypadView::new();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let area = f.area();
                keypad.draw(f, area, &theme);
            })
            .unwrap();

        assert_eq!(keypad.hit_areas.len(), 19);
        assert_eq!(keypad.key_at(0, 0), Some(Key::Clear));
        assert_eq!(keypad.key_at(19, 0), Some(Key::Operator(Operator::Divide)));
        assert_eq!(keypad.key_at(0, 14), Some(Key::Digit(0)));
        assert_eq!(keypad.key_at(19, 14), Some(Key::Equals));
    }
}
