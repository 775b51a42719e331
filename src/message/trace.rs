//! Text attached below a message body.
//!
//! A [`Failure`] is a real error and its cause chain. A [`CallStack`] is a
//! decorative snapshot of where a log call happened. Keeping them as distinct
//! variants means downstream targets never mistake a captured stack for a failure.

use serde::Serialize;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// An error and the chain of errors that caused it, rendered eagerly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    summary: String,
    causes: Vec<String>,
}

impl Failure {
    /// Walks `source()` so the whole chain survives after the borrowed error is gone.
    #[must_use]
    pub fn from_error(error: &dyn StdError) -> Self {
        let mut causes = Vec::new();
        let mut next = error.source();
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }
        Self {
            summary: error.to_string(),
            causes,
        }
    }

    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            causes: Vec::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summary.is_empty() {
            f.write_str("Error: <no description>")?;
        } else {
            write!(f, "Error: {}", self.summary)?;
        }
        for cause in &self.causes {
            write!(f, "\nCaused by: {cause}")?;
        }
        Ok(())
    }
}

/// The call stack at the point of capture. Never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallStack {
    frames: String,
}

impl CallStack {
    /// Captures regardless of `RUST_BACKTRACE`.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            frames: Backtrace::force_capture().to_string(),
        }
    }

    #[must_use]
    pub fn frames(&self) -> &str {
        &self.frames
    }
}

impl fmt::Display for CallStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call stack:\n{}", self.frames.trim_end())
    }
}

/// Trace appended to a message's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
    Failure(Failure),
    CallStack(CallStack),
}

impl Attachment {
    #[must_use]
    pub fn error(error: &dyn StdError) -> Self {
        Self::Failure(Failure::from_error(error))
    }

    #[must_use]
    pub fn call_stack() -> Self {
        Self::CallStack(CallStack::capture())
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Trace section appended below the message text. Never empty.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(failure) => failure.fmt(f),
            Self::CallStack(stack) => stack.fmt(f),
        }
    }
}
