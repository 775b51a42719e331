//! Fan-out of one finished message to every admitting target.
//!
//! A target that errors or panics is reported and skipped; delivery to the
//! remaining targets continues and nothing propagates to the logging caller.

use crate::internal::Reporter;
use crate::message::LogMessage;
use crate::registry::TargetRegistry;
use crate::target::Target;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// What happened to one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    pub delivered: usize,
    /// Targets whose threshold did not admit the level.
    pub skipped: usize,
    pub failed: usize,
}

pub fn dispatch(
    message: &LogMessage,
    registry: &dyn TargetRegistry,
    reporter: &Reporter,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    registry.visit(&mut |target| {
        if !message.level.admits(target.threshold()) {
            report.skipped += 1;
            return;
        }
        match render_contained(target, message) {
            Ok(()) => report.delivered += 1,
            Err(reason) => {
                report.failed += 1;
                reporter.report(
                    "DISPATCH",
                    &format!(
                        "Target '{}' dropped a {} message from {}: {reason}",
                        target.name(),
                        message.level,
                        message.category
                    ),
                );
            }
        }
    });

    report
}

fn render_contained(target: &dyn Target, message: &LogMessage) -> Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(|| target.render(message))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
