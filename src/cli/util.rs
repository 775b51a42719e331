//! Helpers shared by the subcommands.

use crate::catalog::Catalog;
use crate::fmt::Arg;
use std::path::Path;

/// Command-line arguments arrive as strings; numbers and booleans are recovered
/// so `%d`, `%f` and `%b` conversions accept them.
#[must_use]
pub fn parse_arg(raw: &str) -> Arg {
    if let Ok(n) = raw.parse::<i64>() {
        return Arg::Int(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Arg::UInt(n);
    }
    if raw.contains(['.', 'e', 'E'])
        && let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        return Arg::Float(f);
    }
    match raw {
        "true" => Arg::Bool(true),
        "false" => Arg::Bool(false),
        _ => Arg::Str(raw.to_string()),
    }
}

/// An absent path means an empty catalog.
///
/// # Errors
/// Fails when the file cannot be read or is not a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, crate::Error> {
    path.map_or_else(|| Ok(Catalog::new()), Catalog::load)
}
