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

//! The calculator input and evaluation state machine.
//!
//! The [`CalculatorEngine`] owns a [`CalculatorState`] and transforms it one
//! [`Key`] at a time. After every key it can produce a [`DisplaySnapshot`],
//! which is all the rendering layer needs to draw the display.
//!
//! # States
//!
//! * **Entering first operand**: no operator chosen, no result shown.
//! * **Operator chosen**: an operand and operator are pending, the entry holds
//!   the second operand.
//! * **Result shown**: equals succeeded, the result is the seed for the next
//!   entry.
//!
//! Errors never leave the engine. They are logged, surfaced as a timed
//! [`ErrorNotice`], and the state is otherwise left as it was.

mod error;
mod key;

pub(crate) use error::{CalcError, ErrorNotice};
pub(crate) use key::{Key, Operator, UnknownKey};

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::util::format::{DIVIDE_BY_ZERO_TEXT, format_number, strip_point_zero};

pub(crate) const DEFAULT_ERROR_WINDOW: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    EnteringFirstOperand,
    OperatorChosen,
    ResultShown,
}

/// Mutable calculator state, one per session.
///
/// `pending_operand` and `pending_operator` are always set and cleared
/// together. `current_entry` holds at most one decimal point.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    pub(crate) pending_operand: Option<f64>,
    pub(crate) current_entry: String,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) last_result: String,
    pub(crate) error: Option<ErrorNotice>,
    result_shown: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            pending_operand: None,
            current_entry: String::new(),
            pending_operator: None,
            last_result: "0".to_string(),
            error: None,
            result_shown: false,
        }
    }
}

/// Everything the display shows after a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DisplaySnapshot {
    pub(crate) operand_line: String,
    pub(crate) result_line: String,
    pub(crate) error_line: Option<String>,
}

pub(crate) struct CalculatorEngine {
    state: CalculatorState,
    error_window: Duration,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_WINDOW)
    }
}

impl CalculatorEngine {
    /// Creates an engine whose error notices stay visible for `error_window`.
    pub(crate) fn new(error_window: Duration) -> Self {
        Self {
            state: CalculatorState::default(),
            error_window,
        }
    }

    pub(crate) fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub(crate) fn phase(&self) -> Phase {
        if self.state.pending_operator.is_some() {
            Phase::OperatorChosen
        } else if self.state.result_shown {
            Phase::ResultShown
        } else {
            Phase::EnteringFirstOperand
        }
    }

    /// Applies a key press and returns the resulting display.
    pub(crate) fn apply_key(&mut self, key: Key) -> DisplaySnapshot {
        let now = Instant::now();
        self.apply_key_at(key, now);
        self.snapshot_at(now)
    }

    /// Applies a key press as if it happened at `now`.
    ///
    /// A failed key leaves the state untouched apart from the error notice,
    /// which replaces any earlier notice and restarts the display window.
    pub(crate) fn apply_key_at(&mut self, key: Key, now: Instant) {
        debug!(%key, entry = %self.state.current_entry, "key pressed");

        if let Err(e) = self.press(key) {
            warn!(%key, error = %e, "key rejected");
            self.state.error = Some(ErrorNotice::new(e, now, self.error_window));
        }
    }

    /// Clears the error notice if its display window has elapsed.
    ///
    /// Returns `true` if a notice was removed.
    pub(crate) fn expire_error(&mut self, now: Instant) -> bool {
        let expired = self
            .state
            .error
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now));

        if expired {
            self.state.error = None;
        }

        expired
    }

    pub(crate) fn snapshot(&self) -> DisplaySnapshot {
        self.snapshot_at(Instant::now())
    }

    pub(crate) fn snapshot_at(&self, now: Instant) -> DisplaySnapshot {
        let state = &self.state;

        let operand_line = match (state.pending_operand, state.pending_operator) {
            (Some(operand), Some(op)) => format!(
                "{} {} {}",
                strip_point_zero(&operand.to_string()),
                op,
                strip_point_zero(&state.current_entry)
            ),
            _ if state.current_entry.is_empty() => "0".to_string(),
            _ => strip_point_zero(&state.current_entry).to_string(),
        };

        let error_line = state
            .error
            .as_ref()
            .filter(|notice| !notice.is_expired(now))
            .map(|notice| notice.text.clone());

        DisplaySnapshot {
            operand_line,
            result_line: strip_point_zero(&state.last_result).to_string(),
            error_line,
        }
    }

    fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(d) => self.digit(d),
            Key::DecimalPoint => self.decimal_point(),
            Key::Clear => self.clear(),
            Key::Backspace => {
                self.state.current_entry.pop();
            }
            Key::Operator(op) => self.operator(op)?,
            Key::Equals => self.equals()?,
        }

        Ok(())
    }

    fn digit(&mut self, d: u8) {
        let entry = &mut self.state.current_entry;
        if *entry == "0" {
            entry.clear();
        }
        entry.push(char::from(b'0' + d));
    }

    fn decimal_point(&mut self) {
        let entry = &mut self.state.current_entry;
        if entry.is_empty() {
            entry.push_str("0.");
        } else if !entry.contains('.') {
            entry.push('.');
        }
    }

    fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    fn operator(&mut self, op: Operator) -> Result<(), CalcError> {
        // A pending operator is replaced, never applied
        if self.state.current_entry.is_empty() {
            if self.state.pending_operator.is_some() {
                self.state.pending_operator = Some(op);
            }
            return Ok(());
        }

        let operand = parse_entry(&self.state.current_entry)?;
        self.state.pending_operand = Some(operand);
        self.state.pending_operator = Some(op);
        self.state.current_entry.clear();
        self.state.result_shown = false;

        Ok(())
    }

    fn equals(&mut self) -> Result<(), CalcError> {
        let state = &mut self.state;

        let (Some(lhs), Some(op)) = (state.pending_operand, state.pending_operator) else {
            return Err(CalcError::InvalidOperation);
        };
        if state.current_entry.is_empty() {
            return Err(CalcError::InvalidOperation);
        }

        let rhs = parse_entry(&state.current_entry)?;

        let result = match op.apply(lhs, rhs) {
            Some(value) => format_number(value),
            None => DIVIDE_BY_ZERO_TEXT.to_string(),
        };
        debug!(lhs, %op, rhs, %result, "evaluated");

        state.current_entry = result.clone();
        state.last_result = result;
        state.pending_operand = None;
        state.pending_operator = None;
        state.result_shown = true;

        Ok(())
    }
}

// The keypad only builds numeric text, but a result such as "Error" becomes
// the next entry and must not be treated as a number.
fn parse_entry(entry: &str) -> Result<f64, CalcError> {
    entry.parse::<f64>().map_err(|_| CalcError::CalculationError)
}
