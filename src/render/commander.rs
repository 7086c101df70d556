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

//! Render the command-line interface.
//!
//! While active this shows the command text and cursor, otherwise the last
//! command error or a short key hint.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const HINT: &str = "arrows move  enter press  : command  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let [container] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(1)
        .areas(area);

    let line = if commander.active() {
        Paragraph::new(format!(":{}", commander.input.value())).style(
            Style::default()
                .fg(app.theme.commander_colour)
                .bg(app.theme.commander_bg),
        )
    } else if let Some(message) = &commander.message {
        Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_colour))
    } else {
        Paragraph::new(HINT).style(Style::default().fg(app.theme.border_colour))
    };

    f.render_widget(line, container);

    if commander.active() {
        // One column for the ':' prompt
        let cursor_x = container.x + 1 + commander.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, container.y));
    }
}
