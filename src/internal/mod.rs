//! catlog's own diagnostics: missing catalog ids, unformattable templates and
//! failing targets.
//!
//! Reports never go through targets. A target that fails while rendering a
//! report would otherwise recurse into itself. Output is capped at a fixed
//! number of lines per context so a target failing on every message cannot
//! flood stderr.

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Default cap on reports per context.
pub const DEFAULT_REPORT_LIMIT: usize = 100;

/// Where report lines go.
#[derive(Debug, Default)]
pub enum ReportSink {
    #[default]
    Stderr,
    Silent,
    /// Keeps lines in memory; read them back with [`Reporter::captured`].
    Capture(Mutex<Vec<String>>),
}

/// Bounded writer for catlog's own diagnostics.
#[derive(Debug)]
pub struct Reporter {
    sink: ReportSink,
    limit: usize,
    emitted: AtomicUsize,
    once_keys: Mutex<HashSet<String>>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportSink::Stderr, DEFAULT_REPORT_LIMIT)
    }
}

impl Reporter {
    #[must_use]
    pub fn new(sink: ReportSink, limit: usize) -> Self {
        Self {
            sink,
            limit,
            emitted: AtomicUsize::new(0),
            once_keys: Mutex::new(HashSet::new()),
        }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(ReportSink::Silent, DEFAULT_REPORT_LIMIT)
    }

    #[must_use]
    pub fn capturing(limit: usize) -> Self {
        Self::new(ReportSink::Capture(Mutex::new(Vec::new())), limit)
    }

    /// Emits one line unless the limit is exhausted. The line after the last
    /// allowed one announces the suppression.
    pub fn report(&self, scope: &str, msg: &str) {
        let n = self.emitted.fetch_add(1, Ordering::Relaxed);
        if n < self.limit {
            self.write(&format!("[catlog] {scope}: {msg}"));
        } else if n == self.limit {
            self.write(&format!(
                "[catlog] INTERNAL: report limit of {} reached, suppressing further diagnostics",
                self.limit
            ));
        }
    }

    /// Like [`Reporter::report`], but only the first report for `key` in `scope` is emitted.
    ///
    /// Keys stop being recorded once the limit is exhausted, so the key set
    /// never grows past the number of lines that could be printed.
    pub fn report_once(&self, scope: &str, key: &str, msg: &str) {
        if self.emitted.load(Ordering::Relaxed) >= self.limit {
            self.report(scope, msg);
            return;
        }
        let first = self
            .once_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(format!("{scope}:{key}"));
        if first {
            self.report(scope, msg);
        }
    }

    /// Reports attempted so far, including suppressed ones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Captured lines; empty for non-capturing sinks.
    #[must_use]
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            ReportSink::Capture(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            _ => Vec::new(),
        }
    }

    fn write(&self, line: &str) {
        match &self.sink {
            ReportSink::Stderr => {
                let _ = writeln!(io::stderr(), "{line}");
            }
            ReportSink::Silent => {}
            ReportSink::Capture(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_caps_output_and_announces_once() {
        let reporter = Reporter::capturing(2);
        for i in 0..5 {
            reporter.report("TEST", &format!("report {i}"));
        }
        let lines = reporter.captured();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[catlog] TEST: report 0");
        assert!(lines[2].contains("report limit of 2 reached"));
        assert_eq!(reporter.count(), 5);
    }

    #[test]
    fn report_once_is_keyed_per_scope() {
        let reporter = Reporter::capturing(10);
        reporter.report_once("CATALOG", "A", "missing A");
        reporter.report_once("CATALOG", "A", "missing A");
        reporter.report_once("FORMAT", "A", "bad A");
        assert_eq!(reporter.captured().len(), 2);
    }

    #[test]
    fn report_once_keys_stay_bounded_after_the_limit() {
        let reporter = Reporter::capturing(3);
        for i in 0..10_000 {
            reporter.report_once("CATALOG", &format!("user {i} logged in"), "missing id");
        }

        assert_eq!(reporter.captured().len(), 4);
        assert_eq!(reporter.once_keys.lock().unwrap().len(), 3);
    }
}
