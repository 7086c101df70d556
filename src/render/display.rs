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

//! Render the calculator display.
//!
//! The operand line and result line are right aligned inside a bordered
//! panel; the error line sits below it and is blank when there is no error.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::{engine::DisplaySnapshot, theme::Theme};

pub(crate) fn draw_display(
    f: &mut Frame,
    area: Rect,
    error_area: Rect,
    snapshot: &DisplaySnapshot,
    theme: &Theme,
) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(snapshot.operand_line.as_str()),
        Line::from(snapshot.result_line.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme.display_colour))
        .block(block);
    f.render_widget(display, area);

    if let Some(error) = &snapshot.error_line {
        let error_line = Paragraph::new(error.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.error_colour));
        f.render_widget(error_line, error_area);
    }
}
