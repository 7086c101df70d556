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

//! Recoverable calculator errors.
//!
//! The `Display` text of each variant is the message shown to the user.

use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalcError {
    /// Equals pressed without an operand, an operator and a second operand.
    #[error("Invalid operation")]
    InvalidOperation,

    /// The entry could not be read as a number.
    #[error("Calculation error")]
    CalculationError,
}

/// A transient error message with a monotonic expiry.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ErrorNotice {
    pub(crate) text: String,
    pub(crate) expires_at: Instant,
}

impl ErrorNotice {
    pub(crate) fn new(error: CalcError, now: Instant, window: Duration) -> Self {
        Self {
            text: error.to_string(),
            expires_at: now + window,
        }
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
