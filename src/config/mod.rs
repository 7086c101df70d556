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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file yields the defaults.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_ERROR_WINDOW;

pub(crate) const CONFIG_NAME: &str = "calcui";

const LOG_FILE_NAME: &str = "calcui.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) error_display_ms: u64,
    pub(crate) tick_rate_ms: u64,
    pub(crate) mouse: bool,
    pub(crate) log_level: String,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            error_display_ms: DEFAULT_ERROR_WINDOW.as_millis() as u64,
            tick_rate_ms: 250,
            mouse: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub(crate) fn tick_rate(&self) -> Duration {
        // A zero period would spin the tick thread
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// The log file path, by default next to the configuration file.
    pub(crate) fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)
            .context("Failed to locate configuration directory")?;

        Ok(config_path.with_file_name(LOG_FILE_NAME))
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_second_window() {
        let config = AppConfig::default();
        assert_eq!(config.error_display(), Duration::from_secs(2));
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn zero_tick_rate_is_clamped() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/calc.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/calc.log"));
    }
}
