//! Plain-text file target with templated paths.
//!
//! Directory, file name and line content are all templates, so one target can
//! write `2025/01/NET.log` style hierarchies keyed by date and category.

use super::{Target, Threshold, line_values};
use crate::fmt::LineTemplate;
use crate::level::Level;
use crate::message::LogMessage;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends templated lines to a file whose directory and name are date templates.
#[derive(Debug)]
pub struct FileTarget {
    name: String,
    threshold: Threshold,
    /// Base directory for log files; `~` is expanded at write time.
    base_dir: String,
    path_template: LineTemplate,
    filename_template: LineTemplate,
    content_template: LineTemplate,
    /// strftime format for `{timestamp}`.
    timestamp_format: String,
}

impl Default for FileTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTarget {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "file".to_string(),
            threshold: Threshold::default(),
            base_dir: default_base_dir(),
            path_template: LineTemplate::parse("{year}/{month}"),
            filename_template: LineTemplate::parse("{category}.log"),
            content_template: LineTemplate::parse(
                "{timestamp} {level} [{thread}] {category}: {msg}",
            ),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_threshold(self, level: Level) -> Self {
        self.threshold.set(level);
        self
    }

    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = dir.into();
        self
    }

    #[must_use]
    pub fn path_structure(mut self, template: &str) -> Self {
        self.path_template = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn filename_structure(mut self, template: &str) -> Self {
        self.filename_template = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn content_structure(mut self, template: &str) -> Self {
        self.content_template = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Full path of the file `message` is appended to.
    #[must_use]
    pub fn path_for(&self, message: &LogMessage) -> PathBuf {
        let base = shellexpand::tilde(&self.base_dir);
        let values = line_values(message, &self.timestamp_format);
        PathBuf::from(base.as_ref())
            .join(self.path_template.render(&values))
            .join(self.filename_template.render(&values))
    }
}

/// `$XDG_STATE_HOME/catlog/logs` where the platform has one.
fn default_base_dir() -> String {
    directories::ProjectDirs::from("", "", "catlog").map_or_else(
        || "logs".to_string(),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logs")
                .to_string_lossy()
                .into_owned()
        },
    )
}

impl Target for FileTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn threshold(&self) -> Level {
        self.threshold.get()
    }

    fn set_threshold(&self, level: Level) {
        self.threshold.set(level);
    }

    fn render(&self, message: &LogMessage) -> Result<(), crate::Error> {
        let path = self.path_for(message);

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        // One write per message so concurrent appenders never interleave within a line.
        let mut content = self
            .content_template
            .render(&line_values(message, &self.timestamp_format));
        content.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}
