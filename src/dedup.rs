//! Log-once suppression.
//!
//! The registry only grows: it is bounded by the number of distinct
//! `(category, content)` pairs ever logged with once-semantics.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identity of a once-message: the category plus the id (or literal text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    category: String,
    content: String,
}

impl DedupKey {
    #[must_use]
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Keys of once-requests that have already been delivered. Entries are never evicted.
#[derive(Debug, Default)]
pub struct OnceRegistry {
    seen: Mutex<HashSet<DedupKey>>,
}

impl OnceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` and reports whether it was already present.
    ///
    /// Check and record happen under one lock, so of any number of racing
    /// callers with the same key exactly one sees `false`.
    pub fn seen_before(&self, key: DedupKey) -> bool {
        !self.lock().insert(key)
    }

    #[must_use]
    pub fn contains(&self, key: &DedupKey) -> bool {
        self.lock().contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forgets every key. Test teardown only.
    #[cfg(any(test, feature = "test-util"))]
    pub fn reset(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn lock(&self) -> MutexGuard<'_, HashSet<DedupKey>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
