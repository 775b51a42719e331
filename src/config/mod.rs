//! Context configuration.
//!
//! catlog does not look for config files on its own. A host application embeds
//! [`Config`] in its own configuration (it is `Deserialize`) or builds one in
//! code, then hands it to [`crate::LogContext::from_config`] or
//! [`crate::ContextBuilder::config`].

mod structs;

pub use structs::{ConsoleConfig, FileConfig, JsonConfig};

use crate::fmt::Color;
use crate::internal::DEFAULT_REPORT_LIMIT;
use crate::level::Level;
use serde::Deserialize;

/// An empty table is a working configuration: console output at INFO.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Detail level for `ignore_error`: 0 drops, 1 logs at DEBUG, 2 and up log at
    /// DEBUG2 with the error trace.
    pub ignore_verbosity: u8,
    /// Level for `log` requests whose id has no catalog level.
    pub default_level: String,
    /// Cap on catlog's own stderr diagnostics.
    pub report_limit: usize,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub json: JsonConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_verbosity: 1,
            default_level: "info".to_string(),
            report_limit: DEFAULT_REPORT_LIMIT,
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            json: JsonConfig::default(),
        }
    }
}

impl Config {
    /// Unparseable names fall back to INFO.
    #[must_use]
    pub fn parse_default_level(&self) -> Level {
        parse_level(&self.default_level, Level::INFO)
    }

    #[must_use]
    pub fn parse_console_threshold(&self) -> Level {
        parse_level(&self.console.threshold, Level::INFO)
    }

    #[must_use]
    pub fn parse_file_threshold(&self) -> Level {
        parse_level(&self.file.threshold, Level::DEBUG)
    }

    #[must_use]
    pub fn parse_json_threshold(&self) -> Level {
        parse_level(&self.json.threshold, Level::DEBUG)
    }

    /// Console color overrides. Entries with an unknown level name or a
    /// malformed `#RRGGBB` value are skipped.
    #[must_use]
    pub fn parse_level_colors(&self) -> Vec<(Level, Color)> {
        self.console
            .level_colors
            .iter()
            .filter_map(|(name, hex)| Some((name.parse().ok()?, Color::from_hex(hex)?)))
            .collect()
    }
}

fn parse_level(name: &str, fallback: Level) -> Level {
    name.parse().unwrap_or(fallback)
}
