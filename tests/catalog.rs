//! Tests for catalog construction, TOML loading and validation.

use catlog::{Catalog, Error, FormatError, Level, LogContext, MemoryTarget, MessageCatalog, Request};
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"
[messages]
NET_CONNECTED = "Connected to %s"

[messages.NET_FAILED]
text = "Could not reach %s after %d attempts"
level = "error"

[messages.NET_SLOW]
text = "Latency {0} ms"
level = "Warning"
"#;

#[test]
fn toml_accepts_plain_and_table_entries() {
    let catalog = Catalog::from_toml_str(CATALOG).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.ids(), ["NET_CONNECTED", "NET_FAILED", "NET_SLOW"]);
    assert_eq!(catalog.lookup_text("NET_CONNECTED"), Some("Connected to %s"));
    assert_eq!(catalog.lookup_level("NET_CONNECTED"), None);
    assert_eq!(catalog.lookup_level("NET_FAILED"), Some(Level::ERROR));
    assert_eq!(catalog.lookup_level("NET_SLOW"), Some(Level::WARN));
    assert_eq!(catalog.lookup_text("NET_UNKNOWN"), None);
}

#[test]
fn empty_document_is_an_empty_catalog() {
    let catalog = Catalog::from_toml_str("").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn unknown_level_is_a_parse_error() {
    let result = Catalog::from_toml_str(
        r#"
[messages.X]
text = "x"
level = "loud"
"#,
    );
    assert!(matches!(result, Err(Error::CatalogParse(_))));
}

#[test]
fn load_reads_a_catalog_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("messages.toml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn load_reports_missing_file_as_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let result = Catalog::load(tmp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn validate_lists_broken_templates_by_id() {
    let catalog = Catalog::new()
        .message("ok", "Loaded %d of %d")
        .message("sale", "50% off")
        .message("dangling", "Progress: 100%")
        .message("first", "%0$s joined")
        .message("wide", "Ratio %.100f");

    let problems = catalog.validate();

    assert_eq!(
        problems,
        [
            ("dangling", FormatError::Unterminated),
            ("first", FormatError::ZeroPosition),
            ("sale", FormatError::UnknownConversion(' ')),
            ("wide", FormatError::PrecisionTooLarge),
        ]
    );
}

#[test]
fn merge_keeps_existing_entries() {
    let mut base = Catalog::new().message("greet", "Hello %s");
    let overlay = Catalog::new()
        .message("greet", "Hi %s")
        .message_at("bye", Level::VERBOSE, "Bye %s");

    base.merge(overlay);

    assert_eq!(base.lookup_text("greet"), Some("Hello %s"));
    assert_eq!(base.lookup_level("bye"), Some(Level::VERBOSE));
}

#[test]
fn loaded_catalog_drives_text_and_level() {
    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .catalog(Catalog::from_toml_str(CATALOG).unwrap())
        .target(memory.clone())
        .build();

    context
        .category("NET")
        .log(Request::id("NET_FAILED").arg("db.local").arg(3));

    let message = &memory.messages()[0];
    assert_eq!(message.text, "Could not reach db.local after 3 attempts");
    assert_eq!(message.level, Level::ERROR);
}
