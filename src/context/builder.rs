//! Stepwise construction of a [`LogContext`].
//!
//! Anything not set falls back to a working default: empty catalog, system
//! clock, retaining registry, stderr reporter.

use super::LogContext;
use crate::catalog::{Catalog, MessageCatalog};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::dedup::OnceRegistry;
use crate::fmt::Color;
use crate::internal::{DEFAULT_REPORT_LIMIT, ReportSink, Reporter};
use crate::level::Level;
use crate::registry::{TargetRegistry, Targets};
use crate::target::{ConsoleTarget, FileTarget, JsonTarget, Target};
use std::sync::Arc;

/// Builder for [`LogContext`].
pub struct ContextBuilder {
    catalog: Option<Arc<dyn MessageCatalog>>,
    clock: Option<Arc<dyn Clock>>,
    registry: Option<Arc<dyn TargetRegistry>>,
    targets: Vec<Arc<dyn Target>>,
    ignore_verbosity: u8,
    default_level: Level,
    reporter: Option<Reporter>,
    report_limit: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            clock: None,
            registry: None,
            targets: Vec::new(),
            ignore_verbosity: 1,
            default_level: Level::INFO,
            reporter: None,
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }

    #[must_use]
    pub fn catalog(mut self, catalog: impl MessageCatalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Replaces the default retaining registry, e.g. with [`crate::ClosingTargets`].
    #[must_use]
    pub fn registry(mut self, registry: impl TargetRegistry + 'static) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Registered in order when the context is built.
    #[must_use]
    pub fn target(mut self, target: impl Target + 'static) -> Self {
        self.targets.push(Arc::new(target));
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            target: ConsoleTarget::new(),
        }
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            target: FileTarget::new(),
        }
    }

    #[must_use]
    pub fn json(self) -> JsonBuilder {
        JsonBuilder {
            parent: self,
            target: JsonTarget::new(),
        }
    }

    /// Applies every section of `config`, adding the targets it enables.
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        self.ignore_verbosity = config.ignore_verbosity;
        self.default_level = config.parse_default_level();
        self.report_limit = config.report_limit;

        if config.console.enabled {
            let mut console = self
                .console()
                .threshold(config.parse_console_threshold())
                .colors(config.console.colors)
                .structure(&config.console.structure);
            for (level, color) in config.parse_level_colors() {
                console = console.level_color(level, color);
            }
            self = console.done();
        }

        if config.file.enabled {
            let mut file = self
                .file()
                .threshold(config.parse_file_threshold())
                .path_structure(&config.file.path_structure)
                .filename_structure(&config.file.filename_structure)
                .content_structure(&config.file.content_structure)
                .timestamp_format(&config.file.timestamp_format);
            if let Some(dir) = &config.file.base_dir {
                file = file.base_dir(dir.as_str());
            }
            self = file.done();
        }

        if config.json.enabled {
            let mut json = self.json().threshold(config.parse_json_threshold());
            if let Some(path) = &config.json.path {
                json = json.path(path.as_str());
            }
            self = json.done();
        }

        self
    }

    /// Detail level for `ignore_error` in categories without their own.
    #[must_use]
    pub const fn ignore_verbosity(mut self, tier: u8) -> Self {
        self.ignore_verbosity = tier;
        self
    }

    /// Level for `log` requests the catalog has no level for.
    #[must_use]
    pub const fn default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Ignored when an explicit [`ContextBuilder::reporter`] is set.
    #[must_use]
    pub const fn report_limit(mut self, limit: usize) -> Self {
        self.report_limit = limit;
        self
    }

    /// Targets that fail to open or register are reported and left out.
    #[must_use]
    pub fn build(self) -> Arc<LogContext> {
        let context = LogContext {
            targets: self
                .registry
                .unwrap_or_else(|| Arc::new(Targets::new())),
            once: OnceRegistry::new(),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            catalog: self.catalog.unwrap_or_else(|| Arc::new(Catalog::new())),
            ignore_verbosity: self.ignore_verbosity,
            default_level: self.default_level,
            reporter: self
                .reporter
                .unwrap_or_else(|| Reporter::new(ReportSink::Stderr, self.report_limit)),
        };

        for target in self.targets {
            let name = target.name().to_string();
            if let Err(e) = context.add_shared_target(target) {
                context
                    .reporter
                    .report("CONTEXT", &format!("Target '{name}' not registered: {e}"));
            }
        }

        Arc::new(context)
    }
}

pub struct ConsoleBuilder {
    parent: ContextBuilder,
    target: ConsoleTarget,
}

impl ConsoleBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.target = self.target.with_name(name);
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: Level) -> Self {
        self.target = self.target.with_threshold(level);
        self
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.target = self.target.colors(enabled);
        self
    }

    #[must_use]
    pub fn structure(mut self, template: &str) -> Self {
        self.target = self.target.template(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: &str) -> Self {
        self.target = self.target.timestamp_format(format);
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.target = self.target.level_color(level, color);
        self
    }

    /// Levels from here up go to stderr instead of stdout.
    #[must_use]
    pub fn stderr_from(mut self, level: Level) -> Self {
        self.target = self.target.stderr_from(level);
        self
    }

    #[must_use]
    pub fn done(mut self) -> ContextBuilder {
        self.parent.targets.push(Arc::new(self.target));
        self.parent
    }
}

pub struct FileBuilder {
    parent: ContextBuilder,
    target: FileTarget,
}

impl FileBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.target = self.target.with_name(name);
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: Level) -> Self {
        self.target = self.target.with_threshold(level);
        self
    }

    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.target = self.target.base_dir(dir);
        self
    }

    #[must_use]
    pub fn path_structure(mut self, template: &str) -> Self {
        self.target = self.target.path_structure(template);
        self
    }

    #[must_use]
    pub fn filename_structure(mut self, template: &str) -> Self {
        self.target = self.target.filename_structure(template);
        self
    }

    #[must_use]
    pub fn content_structure(mut self, template: &str) -> Self {
        self.target = self.target.content_structure(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: &str) -> Self {
        self.target = self.target.timestamp_format(format);
        self
    }

    #[must_use]
    pub fn done(mut self) -> ContextBuilder {
        self.parent.targets.push(Arc::new(self.target));
        self.parent
    }
}

pub struct JsonBuilder {
    parent: ContextBuilder,
    target: JsonTarget,
}

impl JsonBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.target = self.target.with_name(name);
        self
    }

    #[must_use]
    pub fn threshold(mut self, level: Level) -> Self {
        self.target = self.target.with_threshold(level);
        self
    }

    /// `~` is expanded at write time.
    #[must_use]
    pub fn path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.target = self.target.path(path);
        self
    }

    #[must_use]
    pub fn done(mut self) -> ContextBuilder {
        self.parent.targets.push(Arc::new(self.target));
        self.parent
    }
}
