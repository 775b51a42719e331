//! One configuration object per log call.
//!
//! Every axis of a call (content, arguments, attachment, source tag, once flag,
//! level, fallback policy) is an optional field here, so `Category` needs one
//! entry point per severity instead of an overload per combination.

use super::trace::Attachment;
use crate::dedup::DedupKey;
use crate::fmt::Arg;
use crate::level::Level;
use std::collections::BTreeMap;
use std::error::Error as StdError;

/// What the caller wants to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Catalog key, or a format string when fallback-to-format applies.
    Id(String),
    /// Literal text: no catalog lookup, no substitution.
    Text(String),
}

impl Content {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(s) | Self::Text(s) => s,
        }
    }
}

/// Everything one logging call can specify. `&str` and `String` convert into
/// an id request.
#[derive(Debug, Clone)]
#[must_use]
pub struct Request {
    pub(crate) content: Content,
    pub(crate) args: Vec<Arg>,
    pub(crate) attachment: Option<Attachment>,
    pub(crate) source: Option<String>,
    pub(crate) once: bool,
    pub(crate) level: Option<Level>,
    pub(crate) fallback_to_format: Option<bool>,
    pub(crate) settings: Option<BTreeMap<String, String>>,
}

impl Request {
    fn with_content(content: Content) -> Self {
        Self {
            content,
            args: Vec::new(),
            attachment: None,
            source: None,
            once: false,
            level: None,
            fallback_to_format: None,
            settings: None,
        }
    }

    /// Content resolved through the message catalog.
    pub fn id(id: impl Into<String>) -> Self {
        Self::with_content(Content::Id(id.into()))
    }

    /// Content emitted exactly as given.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(Content::Text(text.into()))
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Attaches an error; its cause chain is appended below the text.
    pub fn error(mut self, error: &dyn StdError) -> Self {
        self.attachment = Some(Attachment::error(error));
        self
    }

    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Attaches the current call stack as a decorative trace.
    pub fn call_stack(mut self) -> Self {
        self.attachment = Some(Attachment::call_stack());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Optional variant of [`Request::source`] for pass-through call sites.
    pub fn maybe_source(mut self, source: Option<&str>) -> Self {
        self.source = source.map(ToString::to_string);
        self
    }

    /// Emit at most once per category and content for the lifetime of the context.
    pub const fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Whether an id missing from the catalog is treated as a format string.
    pub const fn fallback_to_format(mut self, enabled: bool) -> Self {
        self.fallback_to_format = Some(enabled);
        self
    }

    /// Key/value snapshot rendered below the text, sorted by key.
    pub fn settings<I, K, V>(mut self, settings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.settings = Some(
            settings
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        );
        self
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub const fn is_once(&self) -> bool {
        self.once
    }

    #[must_use]
    pub const fn explicit_level(&self) -> Option<Level> {
        self.level
    }

    /// Identity used for once-suppression: the id for catalog content, the text itself otherwise.
    #[must_use]
    pub fn dedup_key(&self, category: &str) -> DedupKey {
        DedupKey::new(category, self.content.as_str())
    }

    pub(crate) fn default_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_format.get_or_insert(enabled);
        self
    }
}

impl From<&str> for Request {
    fn from(id: &str) -> Self {
        Self::id(id)
    }
}

impl From<String> for Request {
    fn from(id: String) -> Self {
        Self::id(id)
    }
}

impl From<&String> for Request {
    fn from(id: &String) -> Self {
        Self::id(id.as_str())
    }
}
