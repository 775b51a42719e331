//! Tests for log-once suppression.

use catlog::{Catalog, DedupKey, LogContext, ManualClock, MemoryTarget, Request};
use std::sync::Arc;

#[test]
fn repeated_once_request_is_delivered_once() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder().target(memory.clone()).build();
    let log = context.category("DISK");

    for _ in 0..3 {
        log.warn_once("Disk almost full");
    }

    assert_eq!(memory.texts(), ["Disk almost full"]);
}

#[test]
fn once_keys_separate_categories_and_ids() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder().target(memory.clone()).build();
    let disk = context.category("DISK");
    let net = context.category("NET");

    for _ in 0..2 {
        disk.info_once("a");
        net.info_once("a");
        disk.info_once("b");
    }

    assert_eq!(memory.len(), 3);
    assert!(context.once_registry().contains(&DedupKey::new("NET", "a")));
    assert_eq!(context.once_registry().len(), 3);
}

#[test]
fn once_key_ignores_arguments() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .catalog(Catalog::new().message("conn.lost", "Lost %s"))
        .target(memory.clone())
        .build();
    let log = context.category("NET");

    log.log_once(Request::id("conn.lost").arg("db1"));
    log.log_once(Request::id("conn.lost").arg("db2"));

    assert_eq!(memory.texts(), ["Lost db1"]);
}

#[test]
fn once_and_plain_calls_do_not_interfere() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder().target(memory.clone()).build();
    let log = context.category("MAIN");

    log.info("tick");
    log.info_once("tick");
    log.info_once("tick");
    log.info("tick");

    assert_eq!(memory.len(), 3);
}

#[test]
fn suppressed_request_has_no_side_effects() {
    let clock = Arc::new(ManualClock::new(0));
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .clock(Arc::clone(&clock))
        .target(memory.clone())
        .build();
    let log = context.category("MAIN");

    log.error_once("boom");
    assert_eq!(clock.reads(), 1);

    log.error_once("boom");
    assert_eq!(clock.reads(), 1);
    assert_eq!(memory.attempts(), 1);
}

#[test]
fn contexts_do_not_share_once_state() {
    let first = MemoryTarget::new("memory");
    let second = MemoryTarget::new("memory");
    let a = LogContext::builder().target(first.clone()).build();
    let b = LogContext::builder().target(second.clone()).build();

    a.category("MAIN").info_once("hello");
    b.category("MAIN").info_once("hello");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
