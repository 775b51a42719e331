#![no_main]
use catlog::Catalog;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary TOML must parse or fail cleanly, and validation must not panic
    if let Ok(catalog) = Catalog::from_toml_str(data) {
        let _ = catalog.validate();
    }
});
