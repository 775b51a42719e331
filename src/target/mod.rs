//! Targets receive finished messages and render them somewhere.
//!
//! The built-in targets cover the console, plain files, JSON lines and in-memory
//! capture. Anything else implements [`Target`] and is registered on the context.

mod console;
mod file;
mod json;
mod memory;
mod null;

pub use console::ConsoleTarget;
pub use file::FileTarget;
pub use json::JsonTarget;
pub use memory::{FailureMode, MemoryTarget};
pub use null::NullTarget;

use crate::fmt::LineValues;
use crate::level::Level;
use crate::message::LogMessage;
use chrono::{DateTime, Local};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// `Send + Sync` so one target can be shared by every thread that logs.
pub trait Target: Send + Sync {
    /// Registry key; unique within a registry.
    fn name(&self) -> &str;

    /// Minimum level this target renders.
    fn threshold(&self) -> Level;

    fn set_threshold(&self, level: Level);

    /// Acquires resources. Targets that need none keep the default.
    ///
    /// # Errors
    /// Implementation-specific.
    fn open(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Releases resources, waiting at most `timeout` for pending output.
    ///
    /// # Errors
    /// Implementation-specific; the default flushes.
    fn close(&self, timeout: Duration) -> Result<(), crate::Error> {
        let _ = timeout;
        self.flush()
    }

    /// Renders one message. Called only for messages the threshold admits.
    ///
    /// # Errors
    /// I/O or serialization errors from the underlying sink. The dispatcher contains them.
    fn render(&self, message: &LogMessage) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<T: Target + ?Sized> Target for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn threshold(&self) -> Level {
        (**self).threshold()
    }

    fn set_threshold(&self, level: Level) {
        (**self).set_threshold(level);
    }

    fn open(&self) -> Result<(), crate::Error> {
        (**self).open()
    }

    fn close(&self, timeout: Duration) -> Result<(), crate::Error> {
        (**self).close(timeout)
    }

    fn render(&self, message: &LogMessage) -> Result<(), crate::Error> {
        (**self).render(message)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}

/// Interior-mutable threshold shared by the built-in targets.
#[derive(Debug)]
pub struct Threshold(RwLock<Level>);

impl Threshold {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(RwLock::new(level))
    }

    #[must_use]
    pub fn get(&self) -> Level {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, level: Level) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

/// Message timestamp in local time. Out-of-range timestamps fall back to now.
pub(crate) fn local_time(message: &LogMessage) -> DateTime<Local> {
    DateTime::from_timestamp_millis(message.timestamp)
        .map_or_else(Local::now, |utc| utc.with_timezone(&Local))
}

/// Template values every text target shares.
pub(crate) fn line_values(message: &LogMessage, timestamp_format: &str) -> LineValues {
    let time = local_time(message);
    LineValues::new()
        .timestamp(time.format(timestamp_format).to_string())
        .level(message.level.name())
        .category(&message.category)
        .thread(&message.thread)
        .source(message.source.as_deref())
        .id(&message.id)
        .msg(&message.text)
        .date(
            &time.format("%Y").to_string(),
            &time.format("%m").to_string(),
            &time.format("%d").to_string(),
        )
}
