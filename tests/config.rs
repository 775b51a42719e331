//! Tests for `Config` deserialization and context construction from it.

use catlog::fmt::Color;
use catlog::{Config, Level, LogContext, Target};
use tempfile::TempDir;

#[test]
fn empty_table_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.ignore_verbosity, 1);
    assert_eq!(config.parse_default_level(), Level::INFO);
    assert_eq!(config.report_limit, 100);
    assert!(config.console.enabled);
    assert!(!config.file.enabled);
    assert!(!config.json.enabled);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config: Config = toml::from_str(
        r#"
ignore_verbosity = 2
default_level = "verbose"

[console]
threshold = "warn"
colors = false
"#,
    )
    .unwrap();

    assert_eq!(config.ignore_verbosity, 2);
    assert_eq!(config.parse_default_level(), Level::VERBOSE);
    assert_eq!(config.parse_console_threshold(), Level::WARN);
    assert!(!config.console.colors);
    assert!(config.console.enabled);
}

#[test]
fn unknown_level_names_fall_back() {
    let config: Config = toml::from_str(
        r#"
default_level = "chatty"

[file]
threshold = "nope"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_default_level(), Level::INFO);
    assert_eq!(config.parse_file_threshold(), Level::DEBUG);
}

#[test]
fn from_config_registers_enabled_targets() {
    let tmp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.console.enabled = false;
    config.file.enabled = true;
    config.file.base_dir = Some(tmp_dir.path().to_string_lossy().into_owned());
    config.json.enabled = true;
    config.json.path = Some(tmp_dir.path().join("log.jsonl").to_string_lossy().into_owned());
    config.ignore_verbosity = 0;
    config.default_level = "warn".to_string();

    let context = LogContext::from_config(&config);

    let names: Vec<String> = context
        .targets()
        .list_targets()
        .iter()
        .map(|t| t.name().to_string())
        .collect();
    assert_eq!(names, ["file", "json"]);
    assert_eq!(context.ignore_verbosity(), 0);
    assert_eq!(context.default_level(), Level::WARN);
    assert!(context.category("X").is_enabled(Level::DEBUG));
    assert!(!context.category("X").is_enabled(Level::DEBUG2));
}

#[test]
fn level_colors_skip_unknown_levels_and_bad_hex() {
    let config: Config = toml::from_str(
        r##"
[console.level_colors]
warn = "#ffb86c"
shout = "#000000"
error = "red"
"##,
    )
    .unwrap();

    assert_eq!(
        config.parse_level_colors(),
        [(Level::WARN, Color::new(0xff, 0xb8, 0x6c))]
    );
}
