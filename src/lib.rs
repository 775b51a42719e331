//! `catlog` - category-based logging with message catalogs.
//!
//! Each subsystem logs through a [`Category`]. A call names a message id (or
//! literal text), optional arguments, an optional error and an optional source
//! tag; the category turns that into a [`LogMessage`] and hands it to every
//! registered [`Target`] whose threshold admits its level.
//!
//! - Message ids resolve through a [`MessageCatalog`]; unknown ids can double as
//!   printf-style format strings
//! - `*_once` calls are delivered at most once per category and id
//! - A failing or panicking target never affects the caller or other targets
//! - Console, plain-file, JSON-lines and in-memory targets are built in
//!
//! # Example
//!
//! ```
//! use catlog::{Catalog, Level, LogContext, Request};
//!
//! let context = LogContext::builder()
//!     .catalog(Catalog::new().message_at("startup", Level::INFO, "Started %s v%s"))
//!     .console()
//!         .threshold(Level::DEBUG)
//!         .colors(false)
//!         .done()
//!     .build();
//!
//! let log = context.category("MAIN");
//! log.log(Request::id("startup").args(["daemon", "1.2"]));
//! log.debug(Request::id("Listening on port %d").arg(8080));
//! log.warn_once("Config file missing, using defaults");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `catlog` command-line tool
//! - `test-util`: `OnceRegistry::reset` outside this crate's own tests

pub mod catalog;
pub mod category;
pub mod clock;
pub mod config;
pub mod context;
pub mod dedup;
pub mod dispatch;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod message;
pub mod registry;
pub mod target;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, CatalogEntry, MessageCatalog};
pub use category::Category;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use context::{ContextBuilder, LogContext, default_context, install};
pub use dedup::{DedupKey, OnceRegistry};
pub use dispatch::DispatchReport;
pub use error::Error;
pub use fmt::{Arg, FormatError};
pub use internal::{ReportSink, Reporter};
pub use level::{Level, ParseLevelError};
pub use message::{Attachment, CallStack, Failure, LogMessage, Request};
pub use registry::{ClosingTargets, TargetRegistry, Targets};
pub use target::{
    ConsoleTarget, FailureMode, FileTarget, JsonTarget, MemoryTarget, NullTarget, Target,
};
