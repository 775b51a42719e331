//! Per-target configuration sections.

use serde::Deserialize;
use std::collections::HashMap;

/// Console target settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI level colors.
    pub colors: bool,
    /// Lowest level the console admits.
    pub threshold: String,
    /// Line template, see [`crate::fmt::LineTemplate`].
    pub structure: String,
    /// `#RRGGBB` per level name, e.g. `warn = "#ffb86c"`.
    pub level_colors: HashMap<String, String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            threshold: "info".to_string(),
            structure: "{timestamp} {level} {category}: {msg}".to_string(),
            level_colors: HashMap::new(),
        }
    }
}

/// Plain-text file target settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    pub threshold: String,
    /// Empty means the platform state directory.
    pub base_dir: Option<String>,
    pub path_structure: String,
    pub filename_structure: String,
    pub content_structure: String,
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: "debug".to_string(),
            base_dir: None,
            path_structure: "{year}/{month}".to_string(),
            filename_structure: "{category}.log".to_string(),
            content_structure: "{timestamp} {level} [{thread}] {category}: {msg}".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}

/// JSON-lines target settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    pub enabled: bool,
    pub threshold: String,
    /// Output file; `None` means `catlog.jsonl` in the platform state directory.
    pub path: Option<String>,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: "debug".to_string(),
            path: None,
        }
    }
}
