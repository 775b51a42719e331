//! Captures messages in memory for tests and for embedding applications that
//! display recent log lines themselves.

use super::{Target, Threshold};
use crate::level::Level;
use crate::message::LogMessage;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// How `render` misbehaves, for exercising failure containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    #[default]
    None,
    /// Every render returns an error.
    Error,
    /// Every render panics.
    Panic,
}

impl FailureMode {
    const fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Error => 1,
            Self::Panic => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Error,
            2 => Self::Panic,
            _ => Self::None,
        }
    }
}

#[derive(Debug)]
struct Inner {
    name: String,
    threshold: Threshold,
    messages: Mutex<Vec<LogMessage>>,
    failure: AtomicU8,
    attempts: AtomicUsize,
    closed: AtomicBool,
}

/// Clones share the same buffer, so a test can keep a handle after registering the target.
#[derive(Debug, Clone)]
pub struct MemoryTarget {
    inner: Arc<Inner>,
}

impl MemoryTarget {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                threshold: Threshold::new(Level::DEBUG2),
                messages: Mutex::new(Vec::new()),
                failure: AtomicU8::new(FailureMode::None.to_u8()),
                attempts: AtomicUsize::new(0),
                closed: AtomicBool::new(false),
            }),
        }
    }

    #[must_use]
    pub fn with_threshold(self, level: Level) -> Self {
        self.inner.threshold.set(level);
        self
    }

    #[must_use]
    pub fn failing(self, mode: FailureMode) -> Self {
        self.set_failure(mode);
        self
    }

    pub fn set_failure(&self, mode: FailureMode) {
        self.inner.failure.store(mode.to_u8(), Ordering::SeqCst);
    }

    /// Snapshot of everything rendered so far.
    #[must_use]
    pub fn messages(&self) -> Vec<LogMessage> {
        self.lock().clone()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|m| m.text.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Render calls received, including failed ones.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.inner.attempts.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogMessage>> {
        self.inner
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Target for MemoryTarget {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn threshold(&self) -> Level {
        self.inner.threshold.get()
    }

    fn set_threshold(&self, level: Level) {
        self.inner.threshold.set(level);
    }

    fn open(&self) -> Result<(), crate::Error> {
        self.inner.closed.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self, _timeout: Duration) -> Result<(), crate::Error> {
        self.inner.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn render(&self, message: &LogMessage) -> Result<(), crate::Error> {
        self.inner.attempts.fetch_add(1, Ordering::SeqCst);
        match FailureMode::from_u8(self.inner.failure.load(Ordering::SeqCst)) {
            FailureMode::None => {
                self.lock().push(message.clone());
                Ok(())
            }
            FailureMode::Error => Err(crate::Error::Target {
                name: self.inner.name.clone(),
                message: "injected render failure".to_string(),
            }),
            FailureMode::Panic => panic!("injected render panic in {}", self.inner.name),
        }
    }
}
