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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` activates a text
//! input, `Enter` parses the buffer into a [`Command`] and dispatches the
//! matching application events, `Esc` leaves command mode.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::{debug, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    engine::{Key, UnknownKey},
    events::AppEvent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Press(Vec<Key>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("press needs at least one key")]
    MissingKeys,

    #[error(transparent)]
    BadKey(#[from] UnknownKey),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    pub(crate) message: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            message: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if it was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                self.message = None;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        warn!(command = %buffer, error = %e, "command failed");
                        self.message = Some(e.to_string());
                    }
                }
            }

            // Delegate everything else to the managed input component
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        debug!(command = %buffer, "running command");

        match parse_command(buffer)? {
            Command::Quit => event_tx.send(AppEvent::ExitApplication)?,
            Command::Press(keys) => {
                for key in keys {
                    event_tx.send(AppEvent::Press(key))?;
                }
            }
        }

        Ok(())
    }
}

/// Parses a command-line buffer.
///
/// Labels for `press` are either whole labels (`bs`, `×`) or runs of single
/// character labels (`12+3=`). One bad label rejects the whole command.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => Ok(Command::Quit),

        ["c"] | ["clear"] => Ok(Command::Press(vec![Key::Clear])),

        ["press"] => Err(CommandError::MissingKeys),
        ["press", labels @ ..] => {
            let mut keys = Vec::new();
            for label in labels {
                keys.extend(parse_labels(label)?);
            }
            Ok(Command::Press(keys))
        }

        _ => Err(CommandError::Unknown(buffer.to_string())),
    }
}

fn parse_labels(token: &str) -> Result<Vec<Key>, UnknownKey> {
    if let Ok(key) = token.parse::<Key>() {
        return Ok(vec![key]);
    }

    token
        .chars()
        .map(|c| Key::from_char(c).ok_or_else(|| UnknownKey(token.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::engine::Operator;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(commander: &mut Commander, text: &str, tx: &Sender<AppEvent>) {
        for c in text.chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), tx));
        }
    }

    #[test]
    fn parses_quit_and_clear() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("clear"), Ok(Command::Press(vec![Key::Clear])));
    }

    #[test]
    fn parses_runs_and_whole_labels() {
        assert_eq!(
            parse_command("press 12+3 bs ="),
            Ok(Command::Press(vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Backspace,
                Key::Equals,
            ]))
        );
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(parse_command("press"), Err(CommandError::MissingKeys));
        assert_eq!(
            parse_command("press 1+?"),
            Err(CommandError::BadKey(UnknownKey("1+?".to_string())))
        );
        assert_eq!(
            parse_command("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn ignores_keys_until_activated() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('1')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        assert!(commander.handle_event(&key(KeyCode::Esc), &tx));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn enter_dispatches_presses() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        type_text(&mut commander, "press 7%2=", &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        let presses: Vec<Key> = rx
            .try_iter()
            .filter_map(|event| match event {
                AppEvent::Press(key) => Some(key),
                _ => None,
            })
            .collect();

        assert_eq!(
            presses,
            vec![
                Key::Digit(7),
                Key::Operator(Operator::Modulo),
                Key::Digit(2),
                Key::Equals,
            ]
        );
        assert!(!commander.active());
    }

    #[test]
    fn failed_command_leaves_a_message() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        type_text(&mut commander, "nope", &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert_eq!(commander.message.as_deref(), Some("unknown command 'nope'"));
        assert!(rx.try_recv().is_err());
    }
}
