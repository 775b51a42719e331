//! Per-subsystem logger handle.
//!
//! A category is a name plus the context it logs through. It holds no mutable
//! state of its own, so it is cheap to clone and share across threads.
//!
//! ```
//! use catlog::{Catalog, LogContext, MemoryTarget, Request};
//!
//! let memory = MemoryTarget::new("memory");
//! let context = LogContext::builder()
//!     .catalog(Catalog::new().message("net.connect", "Connecting to %s"))
//!     .target(memory.clone())
//!     .build();
//!
//! let log = context.category("NET");
//! log.info(Request::id("net.connect").arg("example.org"));
//! log.warn_once("Retrying");
//!
//! assert_eq!(memory.texts(), ["Connecting to example.org", "Retrying"]);
//! ```

use crate::context::{LogContext, default_context};
use crate::dispatch::DispatchReport;
use crate::fmt::Arg;
use crate::level::Level;
use crate::message::{LogMessage, Request};
use std::error::Error as StdError;
use std::sync::Arc;

const IGNORED_PREFIX: &str = "Caught unimportant exception; safe to ignore: ";
const UNEXPECTED_PREFIX: &str = "UnexpectedError: ";

/// A named logger handle. Clones share the same context and once-registry.
#[derive(Debug, Clone)]
pub struct Category {
    name: Arc<str>,
    context: Arc<LogContext>,
    ignore_verbosity: Option<u8>,
}

/// Severity-named entry points: the level is fixed and an id missing from the
/// catalog is used as its own format string.
macro_rules! severity {
    ($($level:ident => $name:ident, $once:ident;)*) => {
        $(
            pub fn $name(&self, request: impl Into<Request>) {
                self.at(Level::$level, request.into());
            }

            pub fn $once(&self, request: impl Into<Request>) {
                self.at(Level::$level, request.into().once());
            }
        )*
    };
}

impl Category {
    /// A category on the process default context.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_context(name, default_context())
    }

    #[must_use]
    pub fn with_context(name: impl Into<Arc<str>>, context: Arc<LogContext>) -> Self {
        Self {
            name: name.into(),
            context,
            ignore_verbosity: None,
        }
    }

    /// Overrides the context's `ignore_error` detail level for this category.
    #[must_use]
    pub const fn with_ignore_verbosity(mut self, tier: u8) -> Self {
        self.ignore_verbosity = Some(tier);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn context(&self) -> &Arc<LogContext> {
        &self.context
    }

    #[must_use]
    pub fn ignore_verbosity(&self) -> u8 {
        self.ignore_verbosity
            .unwrap_or_else(|| self.context.ignore_verbosity())
    }

    /// Whether a message at `level` would reach at least one target.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.context.is_enabled(level)
    }

    /// Level comes from the request, else the catalog, else the context default.
    /// An id missing from the catalog is logged verbatim unless the request
    /// enables fallback-to-format.
    pub fn log(&self, request: impl Into<Request>) {
        self.submit(request.into().default_fallback(false));
    }

    /// [`Category::log`], suppressed after the first call with the same id.
    pub fn log_once(&self, request: impl Into<Request>) {
        self.submit(request.into().once().default_fallback(false));
    }

    severity! {
        DEBUG2 => debug2, debug2_once;
        DEBUG => debug, debug_once;
        VERBOSE => verbose, verbose_once;
        INFO => info, info_once;
        WARN => warn, warn_once;
        ERROR => error, error_once;
        FATAL => fatal, fatal_once;
    }

    /// Records an error that was caught and deliberately dropped.
    ///
    /// Detail depends on [`Category::ignore_verbosity`]: 0 logs nothing, 1 logs
    /// the message at DEBUG, 2 and above log at DEBUG2 with the error chain.
    pub fn ignore_error(&self, message: &str, error: &dyn StdError, source: Option<&str>) {
        let request = match self.ignore_verbosity() {
            0 => return,
            1 => Request::text(format!("{IGNORED_PREFIX}{message}")).level(Level::DEBUG),
            _ => Request::text(format!("{IGNORED_PREFIX}{message}"))
                .level(Level::DEBUG2)
                .error(error),
        };
        self.submit(request.maybe_source(source));
    }

    /// Logs a failure that indicates a bug, at ERROR.
    ///
    /// Without an error the current call stack is attached so the report still
    /// says where it came from.
    pub fn error_unexpected(
        &self,
        message: &str,
        error: Option<&dyn StdError>,
        source: Option<&str>,
    ) {
        let request = Request::text(format!("{UNEXPECTED_PREFIX}{message}")).level(Level::ERROR);
        let request = match error {
            Some(error) => request.error(error),
            None => request.call_stack(),
        };
        self.submit(request.maybe_source(source));
    }

    /// Prefix that [`Category::error_unexpected`] puts before the message.
    #[must_use]
    pub const fn error_unexpected_prefix() -> &'static str {
        UNEXPECTED_PREFIX
    }

    /// Logs a configuration snapshot: the formatted id followed by one
    /// `key = value` line per setting, sorted by key.
    pub fn config<I, K, V>(&self, id: &str, args: &[Arg], settings: I, source: Option<&str>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let request = Request::id(id)
            .args(args.iter().cloned())
            .settings(settings)
            .maybe_source(source)
            .default_fallback(true);
        self.submit(request);
    }

    /// Builds the message a [`Category::log`] call would emit, without
    /// dispatching it or recording a once-key.
    #[must_use]
    pub fn build_message(&self, request: impl Into<Request>) -> LogMessage {
        self.context
            .build(&self.name, request.into().default_fallback(false))
    }

    /// Dispatches a message built earlier, e.g. by [`Category::build_message`].
    pub fn log_message(&self, message: &LogMessage) -> DispatchReport {
        if message.level.is_off() {
            return DispatchReport::default();
        }
        self.context.dispatch(message)
    }

    fn at(&self, level: Level, request: Request) {
        self.submit(request.level(level).default_fallback(true));
    }

    fn submit(&self, request: Request) {
        let _ = self.context.emit(&self.name, request);
    }
}
