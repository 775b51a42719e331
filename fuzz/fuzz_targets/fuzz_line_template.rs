#![no_main]
use catlog::fmt::{LineTemplate, LineValues};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = LineTemplate::parse(data);

    let values = LineValues::new()
        .timestamp("2025-01-01 00:00:00")
        .level("INFO")
        .category("NET")
        .thread("main")
        .source(Some("fuzz"))
        .id("net.up")
        .msg("test")
        .date("2025", "01", "01");
    let _ = template.render(&values);
});
