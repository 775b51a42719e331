//! `catlog check`: catches malformed templates before they reach production,
//! where they would be logged unformatted.

use crate::catalog::Catalog;
use crate::fmt::arity;
use crate::internal::Reporter;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_check(path: &Path, reporter: &Reporter) -> ExitCode {
    let catalog = match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            reporter.report("CLI", &format!("{}: {e}", path.display()));
            return ExitCode::FAILURE;
        }
    };

    for id in catalog.ids() {
        let Some(entry) = catalog.get(id) else {
            continue;
        };
        let level = entry.level.map_or("-", |level| level.name());
        let args = arity(&entry.text).map_or_else(|_| "?".to_string(), |n| n.to_string());
        println!("{id:<32} {level:<8} args={args}");
    }

    let problems = catalog.validate();
    if problems.is_empty() {
        println!("{}: {} messages OK", path.display(), catalog.len());
        return ExitCode::SUCCESS;
    }

    for (id, error) in &problems {
        reporter.report("CHECK", &format!("{id}: {error}"));
    }
    ExitCode::FAILURE
}
