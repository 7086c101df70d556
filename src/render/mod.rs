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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The calculator display is drawn from a fresh
//! [`crate::engine::DisplaySnapshot`], so an expired error disappears on the
//! next frame even before a tick clears it.

mod commander;
mod display;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{
    App,
    render::{commander::draw_commander, display::draw_display},
    theme::Theme,
};

const TITLE: &str = "Calculator";

const COLUMN_WIDTH: u16 = 36;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The calculator is a single centred column: title, display panel, error
/// line and keypad. The command line spans the full width at the bottom.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let [main_area, commander_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let [column] = Layout::horizontal([Constraint::Max(COLUMN_WIDTH)])
        .flex(Flex::Center)
        .areas(main_area);

    let [title_area, display_area, error_area, keypad_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(column);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, title_area);

    let snapshot = app.engine.snapshot();
    draw_display(f, display_area, error_area, &snapshot, &app.theme);

    app.keypad.draw(f, keypad_area, &app.theme);

    draw_commander(f, commander_area, app);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        config::AppConfig,
        engine::{Key, Operator},
    };

    fn render(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    // The text inside the display panel borders
    fn display_text(line: &str) -> &str {
        line.trim().trim_matches('│').trim()
    }

    #[test]
    fn fresh_session_shows_zeroes_and_no_error() {
        let mut app = App::new(AppConfig::default());
        let lines = render(&mut app);

        assert!(lines[0].contains("Calculator"));
        assert_eq!(display_text(&lines[2]), "0");
        assert_eq!(display_text(&lines[3]), "0");
        assert!(lines[5].trim().is_empty());
    }

    #[test]
    fn operand_line_echoes_the_pending_operation() {
        let mut app = App::new(AppConfig::default());
        for key in [
            Key::Digit(1),
            Key::Digit(2),
            Key::Operator(Operator::Multiply),
            Key::Digit(3),
        ] {
            app.engine.apply_key(key);
        }

        let lines = render(&mut app);
        assert_eq!(display_text(&lines[2]), "12 × 3");
        assert_eq!(display_text(&lines[3]), "0");
    }

    #[test]
    fn keypad_labels_are_drawn() {
        let mut app = App::new(AppConfig::default());
        let screen = render(&mut app).concat();

        for label in ["C", "⌫", "%", "÷", "×", "-", "+", "=", "."] {
            assert!(screen.contains(label), "missing {label}");
        }
    }
}
