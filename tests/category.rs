//! Tests for the category logging pipeline: text resolution, levels, attachments
//! and the special-purpose operations.

use catlog::{
    Arg, Catalog, Category, Level, LogContext, ManualClock, MemoryTarget, Reporter, Request,
};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

fn setup(catalog: Catalog) -> (Arc<LogContext>, MemoryTarget) {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .catalog(catalog)
        .clock(ManualClock::new(1_700_000_000_000))
        .reporter(Reporter::capturing(100))
        .target(memory.clone())
        .build();
    (context, memory)
}

#[derive(Debug)]
struct ConfigError {
    source: io::Error,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("config unreadable")
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn catalog_text_is_formatted_with_args() {
    let (context, memory) = setup(Catalog::new().message("greet", "Hello %s"));
    let log = context.category("MAIN");

    log.info(Request::id("greet").arg("World"));

    assert_eq!(memory.texts(), ["Hello World"]);
    let message = &memory.messages()[0];
    assert_eq!(message.category, "MAIN");
    assert_eq!(message.id, "greet");
    assert_eq!(message.params, [Arg::from("World")]);
    assert_eq!(message.timestamp, 1_700_000_000_000);
}

#[test]
fn severity_calls_use_unknown_id_as_format() {
    let (context, memory) = setup(Catalog::new());
    context.category("MAIN").info(Request::id("foo %d").arg(42));

    assert_eq!(memory.texts(), ["foo 42"]);
    assert_eq!(memory.messages()[0].level, Level::INFO);
}

#[test]
fn log_emits_unknown_id_verbatim_and_reports_it_once() {
    let (context, memory) = setup(Catalog::new());
    let log = context.category("MAIN");

    log.log(Request::id("net.missing %s").arg("x"));
    log.log(Request::id("net.missing %s").arg("y"));

    assert_eq!(memory.texts(), ["net.missing %s", "net.missing %s"]);
    let reports = context.reporter().captured();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("[catlog] CATALOG:"));
    assert!(reports[0].contains("net.missing %s"));
}

#[test]
fn log_can_opt_into_fallback() {
    let (context, memory) = setup(Catalog::new());
    context
        .category("MAIN")
        .log(Request::id("%d items").arg(3).fallback_to_format(true));

    assert_eq!(memory.texts(), ["3 items"]);
    assert!(context.reporter().captured().is_empty());
}

#[test]
fn log_level_comes_from_catalog_then_default() {
    let catalog = Catalog::new()
        .message_at("disk.full", Level::WARN, "Disk %s is full")
        .message("disk.ok", "Disk %s is fine");
    let (context, memory) = setup(catalog);
    let log = context.category("DISK");

    log.log(Request::id("disk.full").arg("/dev/sda"));
    log.log(Request::id("disk.ok").arg("/dev/sdb"));
    log.log(Request::id("disk.full").arg("/dev/sdc").level(Level::ERROR));

    let levels: Vec<Level> = memory.messages().iter().map(|m| m.level).collect();
    assert_eq!(levels, [Level::WARN, Level::INFO, Level::ERROR]);
}

#[test]
fn default_level_is_configurable() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .default_level(Level::VERBOSE)
        .reporter(Reporter::silent())
        .target(memory.clone())
        .build();

    context.category("MAIN").log("anything");

    assert_eq!(memory.messages()[0].level, Level::VERBOSE);
}

#[test]
fn severity_call_overrides_catalog_level() {
    let (context, memory) = setup(Catalog::new().message_at("x", Level::FATAL, "boom"));
    context.category("MAIN").debug("x");

    assert_eq!(memory.messages()[0].level, Level::DEBUG);
    assert_eq!(memory.texts(), ["boom"]);
}

#[test]
fn unformattable_template_is_emitted_verbatim() {
    let (context, memory) = setup(Catalog::new().message("count", "Count %d"));
    context.category("MAIN").info(Request::id("count").arg("many"));

    assert_eq!(memory.texts(), ["Count %d"]);
    let reports = context.reporter().captured();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("[catlog] FORMAT:"));
}

#[test]
fn zero_position_template_is_emitted_verbatim() {
    let (context, memory) = setup(Catalog::new().message("pair", "%0$s and %1$s"));
    context
        .category("MAIN")
        .info(Request::id("pair").arg("a").arg("b"));

    assert_eq!(memory.texts(), ["%0$s and %1$s"]);
    assert!(context.reporter().captured()[0].starts_with("[catlog] FORMAT:"));
}

#[test]
fn prose_with_percent_and_no_args_is_not_a_failure() {
    let (context, memory) = setup(Catalog::new());
    context.category("SHOP").info("50% off today");

    assert_eq!(memory.texts(), ["50% off today"]);
    assert!(context.reporter().captured().is_empty());
}

#[test]
fn literal_text_skips_catalog_and_substitution() {
    let (context, memory) = setup(Catalog::new().message("greet %s", "from catalog"));
    context.category("MAIN").info(Request::text("greet %s").arg("ignored"));

    assert_eq!(memory.texts(), ["greet %s"]);
}

#[test]
fn error_chain_follows_the_text_on_new_lines() {
    let (context, memory) = setup(Catalog::new());
    let error = ConfigError {
        source: io::Error::other("permission denied"),
    };

    context
        .category("CONFIG")
        .error(Request::id("Cannot load %s").arg("app.toml").error(&error));

    let message = &memory.messages()[0];
    assert_eq!(
        message.text,
        "Cannot load app.toml\nError: config unreadable\nCaused by: permission denied"
    );
    assert!(message.attachment.as_ref().is_some_and(|a| a.is_failure()));
    assert_eq!(message.level, Level::ERROR);
}

#[test]
fn source_tag_and_thread_are_recorded() {
    let (context, memory) = setup(Catalog::new());
    let log = context.category("NET");

    std::thread::Builder::new()
        .name("worker-1".to_string())
        .spawn(move || log.warn(Request::id("Timeout").source("socket")))
        .unwrap()
        .join()
        .unwrap();

    let message = &memory.messages()[0];
    assert_eq!(message.thread, "worker-1");
    assert_eq!(message.source.as_deref(), Some("socket"));
}

#[test]
fn explicit_off_level_is_dropped() {
    let (context, memory) = setup(Catalog::new());
    context
        .category("MAIN")
        .log(Request::id("silenced").level(Level::OFF));

    assert!(memory.is_empty());
    assert_eq!(memory.attempts(), 0);
}

#[test]
fn catalog_off_level_is_dropped() {
    let (context, memory) = setup(Catalog::new().message_at("muted", Level::OFF, "never"));
    context.category("MAIN").log("muted");

    assert_eq!(memory.attempts(), 0);
}

#[test]
fn ignore_error_tier_zero_logs_nothing() {
    let (context, memory) = setup(Catalog::new());
    let error = io::Error::other("gone");

    context
        .category("IO")
        .with_ignore_verbosity(0)
        .ignore_error("socket closed", &error, None);

    assert!(memory.is_empty());
}

#[test]
fn ignore_error_tier_one_logs_debug_without_trace() {
    let (context, memory) = setup(Catalog::new());
    let error = io::Error::other("gone");

    context
        .category("IO")
        .ignore_error("socket closed", &error, Some("reader"));

    let message = &memory.messages()[0];
    assert_eq!(message.level, Level::DEBUG);
    assert_eq!(
        message.text,
        "Caught unimportant exception; safe to ignore: socket closed"
    );
    assert!(message.attachment.is_none());
    assert_eq!(message.source.as_deref(), Some("reader"));
}

#[test]
fn ignore_error_tier_two_logs_debug2_with_trace() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .ignore_verbosity(2)
        .target(memory.clone())
        .build();
    let error = io::Error::other("gone");

    context
        .category("IO")
        .ignore_error("socket closed", &error, None);

    let message = &memory.messages()[0];
    assert_eq!(message.level, Level::DEBUG2);
    assert_eq!(
        message.text,
        "Caught unimportant exception; safe to ignore: socket closed\nError: gone"
    );
}

#[test]
fn category_tier_overrides_context_tier() {
    let context = LogContext::builder().ignore_verbosity(2).build();
    let log = context.category("IO");

    assert_eq!(log.ignore_verbosity(), 2);
    assert_eq!(log.clone().with_ignore_verbosity(0).ignore_verbosity(), 0);
}

#[test]
fn error_unexpected_without_error_attaches_call_stack() {
    let (context, memory) = setup(Catalog::new());
    context
        .category("STATE")
        .error_unexpected("session vanished", None, None);

    let message = &memory.messages()[0];
    assert_eq!(message.level, Level::ERROR);
    assert!(
        message
            .text
            .starts_with("UnexpectedError: session vanished\nCall stack:")
    );
    assert!(message.attachment.as_ref().is_some_and(|a| !a.is_failure()));
}

#[test]
fn error_unexpected_with_error_attaches_failure() {
    let (context, memory) = setup(Catalog::new());
    let error = io::Error::other("bad state");

    context
        .category("STATE")
        .error_unexpected("session vanished", Some(&error), Some("auth"));

    let message = &memory.messages()[0];
    assert_eq!(
        message.text,
        "UnexpectedError: session vanished\nError: bad state"
    );
    assert_eq!(Category::error_unexpected_prefix(), "UnexpectedError: ");
}

#[test]
fn config_appends_sorted_settings() {
    let (context, memory) = setup(Catalog::new().message("cfg.loaded", "Loaded %s"));

    context.category("CONFIG").config(
        "cfg.loaded",
        &[Arg::from("app.toml")],
        [("timeout", "30"), ("mode", "fast")],
        Some("loader"),
    );

    let message = &memory.messages()[0];
    assert_eq!(message.text, "Loaded app.toml\n  mode = fast\n  timeout = 30");
    assert_eq!(message.level, Level::INFO);
    assert_eq!(message.settings.as_ref().map(|s| s.len()), Some(2));
}

#[test]
fn build_message_does_not_dispatch() {
    let (context, memory) = setup(Catalog::new().message("greet", "Hello %s"));
    let log = context.category("MAIN");

    let message = log.build_message(Request::id("greet").arg("there").level(Level::WARN));
    assert_eq!(message.text, "Hello there");
    assert!(memory.is_empty());

    let report = log.log_message(&message);
    assert_eq!(report.delivered, 1);
    assert_eq!(memory.texts(), ["Hello there"]);
}

#[test]
fn is_enabled_reflects_target_thresholds() {
    let memory = MemoryTarget::new("memory").with_threshold(Level::WARN);
    let context = LogContext::builder().target(memory).build();
    let log = context.category("MAIN");

    assert!(!log.is_enabled(Level::INFO));
    assert!(log.is_enabled(Level::WARN));
    assert!(!log.is_enabled(Level::OFF));
}
