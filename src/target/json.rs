//! JSON-lines target: one object per message, greppable and `jq`-friendly.

use super::{Target, Threshold, local_time};
use crate::fmt::Arg;
use crate::level::Level;
use crate::message::{Attachment, LogMessage};

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

/// Flat schema. The attachment is repeated as structured data next to the rendered text.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// Time-sortable and unique across concurrent writers.
    id: String,
    ts: String,
    level: Level,
    category: &'a str,
    thread: &'a str,
    msg_id: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "no_params")]
    params: &'a [Arg],
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<&'a Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<&'a BTreeMap<String, String>>,
}

fn no_params(params: &&[Arg]) -> bool {
    params.is_empty()
}

/// Appends one JSON object per message to a JSONL file.
#[derive(Debug)]
pub struct JsonTarget {
    name: String,
    threshold: Threshold,
    file_path: PathBuf,
}

impl Default for JsonTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTarget {
    #[must_use]
    pub fn new() -> Self {
        let file_path = directories::ProjectDirs::from("", "", "catlog").map_or_else(
            || PathBuf::from("catlog.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("catlog.jsonl")
            },
        );

        Self {
            name: "json".to_string(),
            threshold: Threshold::default(),
            file_path,
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
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }
}

impl Target for JsonTarget {
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
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: local_time(message).to_rfc3339(),
            level: message.level,
            category: &message.category,
            thread: &message.thread,
            msg_id: &message.id,
            msg: &message.text,
            params: &message.params,
            source: message.source.as_deref(),
            attachment: message.attachment.as_ref(),
            settings: message.settings.as_ref(),
        };
        let mut json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;
        json.push('\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
