//! The root every [`Category`] logs through.
//!
//! A context owns the shared state of one logging setup: target registry,
//! once-registry, clock, message catalog and the internal reporter. Tests build
//! isolated contexts; applications usually install one as the process default.

mod builder;

pub use builder::{ConsoleBuilder, ContextBuilder, FileBuilder, JsonBuilder};

use crate::catalog::MessageCatalog;
use crate::category::Category;
use crate::clock::Clock;
use crate::config::Config;
use crate::dedup::OnceRegistry;
use crate::dispatch::{DispatchReport, dispatch};
use crate::internal::Reporter;
use crate::level::Level;
use crate::message::{LogMessage, MessageBuilder, Request, Stamp};
use crate::registry::TargetRegistry;
use crate::target::Target;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

static DEFAULT_CONTEXT: OnceLock<Arc<LogContext>> = OnceLock::new();

/// Makes `context` the process default used by [`Category::new`].
///
/// # Errors
/// Hands `context` back when a default is already in place, including one
/// created lazily by an earlier [`default_context`] call.
pub fn install(context: Arc<LogContext>) -> Result<(), Arc<LogContext>> {
    DEFAULT_CONTEXT.set(context)
}

/// The process default, built from [`Config::default`] on first use when
/// nothing was installed.
#[must_use]
pub fn default_context() -> Arc<LogContext> {
    Arc::clone(DEFAULT_CONTEXT.get_or_init(|| LogContext::from_config(&Config::default())))
}

/// Everything a category logs through: catalog, clock, once-registry, targets
/// and the internal reporter. Build one with [`LogContext::builder`] or
/// [`LogContext::from_config`].
pub struct LogContext {
    targets: Arc<dyn TargetRegistry>,
    once: OnceRegistry,
    clock: Arc<dyn Clock>,
    catalog: Arc<dyn MessageCatalog>,
    ignore_verbosity: u8,
    default_level: Level,
    reporter: Reporter,
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("targets", &self.targets.list_targets().len())
            .field("once", &self.once.len())
            .field("ignore_verbosity", &self.ignore_verbosity)
            .field("default_level", &self.default_level)
            .finish_non_exhaustive()
    }
}

impl LogContext {
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Console, file and JSON targets as enabled in `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Arc<Self> {
        ContextBuilder::new().config(config).build()
    }

    /// A category bound to this context.
    #[must_use]
    pub fn category(self: &Arc<Self>, name: impl Into<Arc<str>>) -> Category {
        Category::with_context(name, Arc::clone(self))
    }

    /// Opens `target` and registers it.
    ///
    /// # Errors
    /// Fails when the target cannot be opened or the registry refuses it.
    pub fn add_target(&self, target: impl Target + 'static) -> Result<(), crate::Error> {
        self.add_shared_target(Arc::new(target))
    }

    /// Like [`LogContext::add_target`] for a target the caller keeps a handle to.
    ///
    /// # Errors
    /// Fails when the target cannot be opened or the registry refuses it.
    pub fn add_shared_target(&self, target: Arc<dyn Target>) -> Result<(), crate::Error> {
        target.open()?;
        self.targets.add_target(target)
    }

    /// Unregisters a target. Once this returns, the target receives no further
    /// messages; closing it is up to the caller.
    pub fn remove_target(&self, name: &str) -> Option<Arc<dyn Target>> {
        self.targets.remove_target(name)
    }

    #[must_use]
    pub fn targets(&self) -> &dyn TargetRegistry {
        self.targets.as_ref()
    }

    #[must_use]
    pub const fn once_registry(&self) -> &OnceRegistry {
        &self.once
    }

    #[must_use]
    pub const fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    #[must_use]
    pub const fn ignore_verbosity(&self) -> u8 {
        self.ignore_verbosity
    }

    #[must_use]
    pub const fn default_level(&self) -> Level {
        self.default_level
    }

    /// Whether any registered target admits `level`.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        let mut enabled = false;
        self.targets.visit(&mut |target| {
            enabled |= level.admits(target.threshold());
        });
        enabled
    }

    /// Full pipeline for one request: once-check, build, dispatch.
    ///
    /// `None` means nothing was dispatched: the level was OFF or the request was
    /// a repeated once-request.
    pub(crate) fn emit(&self, category: &str, request: Request) -> Option<DispatchReport> {
        if request.explicit_level().is_some_and(Level::is_off) {
            return None;
        }
        // Check-and-record is one atomic step, so racing once-requests deliver exactly one message.
        if request.is_once() && self.once.seen_before(request.dedup_key(category)) {
            return None;
        }

        let message = self.build(category, request);
        if message.level.is_off() {
            return None;
        }
        Some(self.dispatch(&message))
    }

    /// Stamps and builds a message without dispatching or recording it.
    pub(crate) fn build(&self, category: &str, request: Request) -> LogMessage {
        let stamp = Stamp {
            timestamp: self.clock.now_millis(),
            category,
            thread: current_thread_name(),
        };
        MessageBuilder::new(self.catalog.as_ref(), self.default_level, &self.reporter)
            .build(request, stamp)
    }

    /// Sends a finished message to every admitting target.
    pub fn dispatch(&self, message: &LogMessage) -> DispatchReport {
        dispatch(message, self.targets.as_ref(), &self.reporter)
    }

    /// Flushes every target; failures are reported, not returned.
    pub fn flush(&self) {
        self.targets.visit(&mut |target| {
            if let Err(e) = target.flush() {
                self.reporter
                    .report("FLUSH", &format!("Target '{}': {e}", target.name()));
            }
        });
    }

    /// Closes every target, giving each up to `timeout`. Targets stay registered.
    pub fn close(&self, timeout: Duration) {
        self.targets.visit(&mut |target| {
            if let Err(e) = target.close(timeout) {
                self.reporter
                    .report("CLOSE", &format!("Target '{}': {e}", target.name()));
            }
        });
    }
}

fn current_thread_name() -> String {
    let thread = std::thread::current();
    thread
        .name()
        .map_or_else(|| format!("{:?}", thread.id()), ToString::to_string)
}
