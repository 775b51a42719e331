//! Message catalogs map stable message ids to display text and a default level.
//!
//! Call sites log an id such as `NET_CONNECT_FAILED`; the catalog decides what the
//! user reads. A catalog is built in code or loaded from TOML at startup:
//!
//! ```toml
//! [messages]
//! NET_CONNECTED = "Connected to %s"
//!
//! [messages.NET_CONNECT_FAILED]
//! text = "Could not reach %s after %d attempts"
//! level = "error"
//! ```

use crate::fmt::{FormatError, arity};
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Lookup capability the message builder consults for every id.
pub trait MessageCatalog: Send + Sync {
    fn lookup_text(&self, id: &str) -> Option<&str>;

    fn lookup_level(&self, id: &str) -> Option<Level>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub text: String,
    #[serde(default)]
    pub level: Option<Level>,
}

/// Either `ID = "text"` or a full `[messages.ID]` table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Full(CatalogEntry),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CatalogFile {
    messages: HashMap<String, RawEntry>,
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an id whose level comes from the request or the context default.
    #[must_use]
    pub fn message(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text, None);
        self
    }

    /// Adds an id that carries its own level for `Category::log`.
    #[must_use]
    pub fn message_at(
        mut self,
        id: impl Into<String>,
        level: Level,
        text: impl Into<String>,
    ) -> Self {
        self.insert(id, text, Some(level));
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>, level: Option<Level>) {
        self.entries.insert(
            id.into(),
            CatalogEntry {
                text: text.into(),
                level,
            },
        );
    }

    /// Parses the `[messages]` table of a TOML document.
    ///
    /// # Errors
    /// Returns [`crate::Error::CatalogParse`] on malformed TOML or unknown level names.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let file: CatalogFile = toml::from_str(content)?;
        let entries = file
            .messages
            .into_iter()
            .map(|(id, raw)| {
                let entry = match raw {
                    RawEntry::Text(text) => CatalogEntry { text, level: None },
                    RawEntry::Full(entry) => entry,
                };
                (id, entry)
            })
            .collect();
        Ok(Self { entries })
    }

    /// Reads and parses a TOML catalog file. `~` is expanded.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path_str = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        let content = fs::read_to_string(expanded.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Folds `other` into `self`; ids already present keep their current entry.
    pub fn merge(&mut self, other: Self) {
        for (id, entry) in other.entries {
            self.entries.entry(id).or_insert(entry);
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Checks every text's conversion syntax; returns offending ids with their errors, sorted by id.
    #[must_use]
    pub fn validate(&self) -> Vec<(&str, FormatError)> {
        let mut problems: Vec<(&str, FormatError)> = self
            .entries
            .iter()
            .filter_map(|(id, entry)| arity(&entry.text).err().map(|e| (id.as_str(), e)))
            .collect();
        problems.sort_by(|a, b| a.0.cmp(b.0));
        problems
    }
}

impl MessageCatalog for Catalog {
    fn lookup_text(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.text.as_str())
    }

    fn lookup_level(&self, id: &str) -> Option<Level> {
        self.entries.get(id).and_then(|entry| entry.level)
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for std::sync::Arc<C> {
    fn lookup_text(&self, id: &str) -> Option<&str> {
        (**self).lookup_text(id)
    }

    fn lookup_level(&self, id: &str) -> Option<Level> {
        (**self).lookup_level(id)
    }
}
