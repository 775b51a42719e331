//! Log messages: the per-call [`Request`], the [`MessageBuilder`] that resolves it,
//! and the finished [`LogMessage`] handed to targets.

mod builder;
mod request;
mod trace;

pub use builder::{MessageBuilder, Stamp};
pub use request::{Content, Request};
pub use trace::{Attachment, CallStack, Failure};

use crate::fmt::Arg;
use crate::level::Level;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a target needs to render one message. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct LogMessage {
    /// Epoch milliseconds from the context clock.
    pub timestamp: i64,
    pub category: String,
    pub thread: String,
    pub level: Level,
    /// Catalog id, format string, or literal text the message was built from.
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Arg>,
    /// Final text: the formatted body, then the attachment trace and settings on following lines.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BTreeMap<String, String>>,
}
