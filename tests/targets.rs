//! Tests for the built-in file, JSON-lines, console and null targets.

use catlog::{
    Catalog, ConsoleTarget, FileTarget, JsonTarget, Level, LogContext, ManualClock, NullTarget,
    Request, Target,
};
use std::fs;
use std::io;
use tempfile::TempDir;

const NOON_UTC: i64 = 1_736_942_400_000;

#[test]
fn file_target_writes_templated_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let base_dir = tmp_dir.path().to_string_lossy().into_owned();

    let context = LogContext::builder()
        .clock(ManualClock::new(NOON_UTC))
        .file()
        .threshold(Level::DEBUG)
        .base_dir(base_dir)
        .path_structure("{category}")
        .filename_structure("out.log")
        .content_structure("{level}|{category}|{source}|{msg}")
        .done()
        .build();

    let log = context.category("NET");
    log.warn(Request::id("Link %s down").arg("eth0").source("monitor"));
    log.debug2("too detailed");
    log.info("Link up");

    let content = fs::read_to_string(tmp_dir.path().join("NET").join("out.log")).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        ["WARN|NET|monitor|Link eth0 down", "INFO|NET||Link up"]
    );
}

#[test]
fn file_target_splits_by_date_and_category() {
    let tmp_dir = TempDir::new().unwrap();
    let target = FileTarget::new()
        .base_dir(tmp_dir.path().to_string_lossy().into_owned())
        .path_structure("{year}/{month}")
        .filename_structure("{category}-{day}.log");

    let context = LogContext::builder()
        .clock(ManualClock::new(NOON_UTC))
        .build();
    let message = context
        .category("DB")
        .build_message(Request::text("query slow").level(Level::WARN));

    let path = target.path_for(&message);
    let relative = path.strip_prefix(tmp_dir.path()).unwrap();
    assert_eq!(relative.components().count(), 3);
    assert!(relative.starts_with("2025"));
    assert!(relative.to_string_lossy().contains("DB-"));

    target.render(&message).unwrap();
    assert!(path.exists());
}

#[test]
fn json_target_writes_one_object_per_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("log.jsonl");

    let context = LogContext::builder()
        .catalog(Catalog::new().message("net.retry", "Retry %d of %d"))
        .clock(ManualClock::new(NOON_UTC))
        .json()
        .threshold(Level::DEBUG2)
        .path(&path)
        .done()
        .build();

    let log = context.category("NET");
    log.warn(Request::id("net.retry").args([1, 3]).source("client"));
    log.error(Request::id("Gave up").error(&io::Error::other("timed out")));

    let content = fs::read_to_string(&path).unwrap();
    let entries: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first["level"], "WARN");
    assert_eq!(first["category"], "NET");
    assert_eq!(first["msg_id"], "net.retry");
    assert_eq!(first["msg"], "Retry 1 of 3");
    assert_eq!(first["params"], serde_json::json!([1, 3]));
    assert_eq!(first["source"], "client");
    assert_eq!(first["id"].as_str().map(str::len), Some(26));

    let second = &entries[1];
    assert_eq!(second["msg"], "Gave up\nError: timed out");
    assert_eq!(second["attachment"]["kind"], "failure");
    assert_eq!(second["attachment"]["summary"], "timed out");
    assert!(second.get("params").is_none());
    assert!(second.get("source").is_none());
}

#[test]
fn json_target_respects_threshold() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("log.jsonl");
    let target = JsonTarget::new().with_threshold(Level::ERROR).path(&path);
    let context = LogContext::builder().target(target).build();

    context.category("MAIN").info("quiet");

    assert!(!path.exists());
}

#[test]
fn console_formats_without_colors() {
    let target = ConsoleTarget::new()
        .colors(false)
        .template("{level}|{category}|{thread}|{msg}");
    let context = LogContext::builder().build();
    let message = std::thread::Builder::new()
        .name("main-loop".to_string())
        .spawn(move || {
            context
                .category("UI")
                .build_message(Request::text("ready").level(Level::INFO))
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(target.format_message(&message), "INFO   |UI|main-loop|ready");
}

#[test]
fn console_colors_the_level() {
    let target = ConsoleTarget::new().template("{level}");
    let context = LogContext::builder().build();
    let message = context
        .category("UI")
        .build_message(Request::text("x").level(Level::ERROR));

    let line = target.format_message(&message);
    assert!(line.starts_with("\x1b["));
    assert!(line.contains("ERROR"));
    assert!(line.ends_with("\x1b[0m"));
}

#[test]
fn null_target_admits_nothing_until_lowered() {
    let null = NullTarget::new("placeholder");
    assert_eq!(null.threshold(), Level::OFF);
    assert!(!Level::FATAL.admits(null.threshold()));

    null.set_threshold(Level::INFO);
    assert!(Level::INFO.admits(null.threshold()));
}
