//! Turns a [`Request`] into a finished [`LogMessage`].
//!
//! Resolution order for the text of an id:
//! 1. catalog text for the id, formatted with the arguments
//! 2. the id itself as a format string, when fallback-to-format is enabled
//! 3. the id verbatim, reported once as a missing id
//!
//! A template that cannot be formatted with the given arguments is emitted
//! unformatted. Nothing on this path returns an error to the caller.

use super::{Content, LogMessage, Request};
use crate::catalog::MessageCatalog;
use crate::fmt::{Arg, substitute};
use crate::internal::Reporter;
use crate::level::Level;
use std::fmt::Write as _;

/// Call-site facts captured before building: when, where, and on which thread.
#[derive(Debug, Clone)]
pub struct Stamp<'a> {
    pub timestamp: i64,
    pub category: &'a str,
    pub thread: String,
}

pub struct MessageBuilder<'a> {
    catalog: &'a dyn MessageCatalog,
    default_level: Level,
    reporter: &'a Reporter,
}

impl<'a> MessageBuilder<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a dyn MessageCatalog,
        default_level: Level,
        reporter: &'a Reporter,
    ) -> Self {
        Self {
            catalog,
            default_level,
            reporter,
        }
    }

    /// Explicit level, else the catalog's level for the id, else the configured default.
    #[must_use]
    pub fn resolve_level(&self, request: &Request) -> Level {
        if let Some(level) = request.level {
            return level;
        }
        match &request.content {
            Content::Id(id) => self
                .catalog
                .lookup_level(id)
                .unwrap_or(self.default_level),
            Content::Text(_) => self.default_level,
        }
    }

    /// Body text before any attachment or settings are appended.
    #[must_use]
    pub fn resolve_text(&self, request: &Request) -> String {
        let id = match &request.content {
            Content::Text(text) => return text.clone(),
            Content::Id(id) => id,
        };

        if let Some(template) = self.catalog.lookup_text(id) {
            return self.format(id, template, &request.args);
        }

        if request.fallback_to_format.unwrap_or(false) {
            return self.format(id, id, &request.args);
        }

        self.reporter.report_once(
            "CATALOG",
            id,
            &format!("Unknown message id '{id}', logging it verbatim"),
        );
        id.clone()
    }

    /// Without arguments a template that fails to format is plain prose (`"50% off"`), not a failure.
    fn format(&self, id: &str, template: &str, args: &[Arg]) -> String {
        match substitute(template, args) {
            Ok(text) => text,
            Err(_) if args.is_empty() => template.to_string(),
            Err(e) => {
                self.reporter.report(
                    "FORMAT",
                    &format!("Cannot format message '{id}': {e}; logging it unformatted"),
                );
                template.to_string()
            }
        }
    }

    #[must_use]
    pub fn build(&self, request: Request, stamp: Stamp<'_>) -> LogMessage {
        let level = self.resolve_level(&request);
        let mut text = self.resolve_text(&request);

        if let Some(attachment) = &request.attachment {
            text.push('\n');
            text.push_str(&attachment.render());
        }

        if let Some(settings) = &request.settings {
            for (key, value) in settings {
                let _ = write!(text, "\n  {key} = {value}");
            }
        }

        let id = match request.content {
            Content::Id(id) | Content::Text(id) => id,
        };

        LogMessage {
            timestamp: stamp.timestamp,
            category: stamp.category.to_string(),
            thread: stamp.thread,
            level,
            id,
            params: request.args,
            text,
            attachment: request.attachment,
            source: request.source,
            settings: request.settings,
        }
    }
}
