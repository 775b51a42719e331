//! The console is the target most processes start with: immediate colored
//! feedback, WARN and above on stderr, everything else on stdout.

use super::{Target, Threshold, line_values};
use crate::fmt::{Color, LineTemplate};
use crate::level::Level;
use crate::message::LogMessage;
use std::collections::HashMap;
use std::io::{self, Write};

/// Writes templated lines to stdout, or stderr from a configurable level up.
#[derive(Debug)]
pub struct ConsoleTarget {
    name: String,
    threshold: Threshold,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    template: LineTemplate,
    timestamp_format: String,
    /// Messages at or above this level go to stderr.
    stderr_from: Level,
    /// Overrides [`Color::for_level`] per level.
    level_colors: HashMap<Level, Color>,
}

impl Default for ConsoleTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTarget {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            threshold: Threshold::default(),
            colors_enabled: true,
            template: LineTemplate::parse("{timestamp} {level} {category}: {msg}"),
            timestamp_format: "%H:%M:%S%.3f".to_string(),
            stderr_from: Level::WARN,
            level_colors: HashMap::new(),
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
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn stderr_from(mut self, level: Level) -> Self {
        self.stderr_from = level;
        self
    }

    /// Default colors may clash with the terminal theme.
    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// The rendered line, without the trailing newline.
    #[must_use]
    pub fn format_message(&self, message: &LogMessage) -> String {
        let mut values = line_values(message, &self.timestamp_format);
        if self.colors_enabled {
            let color = self
                .level_colors
                .get(&message.level)
                .copied()
                .unwrap_or_else(|| Color::for_level(message.level));
            values.level = format!("{}{:<7}{}", color.fg_ansi(), values.level, Color::RESET);
            values.category = format!("\x1b[2m{}\x1b[0m", values.category);
        } else {
            values.level = format!("{:<7}", values.level);
        }
        self.template.render(&values)
    }
}

impl Target for ConsoleTarget {
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
        let line = self.format_message(message);
        if message.level >= self.stderr_from {
            writeln!(io::stderr().lock(), "{line}")?;
        } else {
            writeln!(io::stdout().lock(), "{line}")?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
