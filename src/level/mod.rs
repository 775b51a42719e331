//! Severity levels that gate which messages reach which targets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A named rank on the severity scale.
///
/// Ordering, equality and hashing only look at the rank, so a custom level that
/// shares a rank with a built-in one behaves identically for filtering.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    rank: u32,
    name: &'static str,
}

impl Level {
    /// Extra-detailed diagnostics, below DEBUG. Used for ignored errors at high verbosity.
    pub const DEBUG2: Self = Self::custom(100, "DEBUG2");
    /// Development-time diagnostics.
    pub const DEBUG: Self = Self::custom(200, "DEBUG");
    /// Chatty operational detail, between DEBUG and INFO.
    pub const VERBOSE: Self = Self::custom(300, "VERBOSE");
    /// Normal operational milestones.
    pub const INFO: Self = Self::custom(400, "INFO");
    /// Non-fatal anomalies that may need attention.
    pub const WARN: Self = Self::custom(500, "WARN");
    /// Failures that prevent an operation from completing.
    pub const ERROR: Self = Self::custom(600, "ERROR");
    /// Failures that take the process down.
    pub const FATAL: Self = Self::custom(700, "FATAL");
    /// Sentinel ranked above every real level: a threshold of OFF admits nothing.
    pub const OFF: Self = Self::custom(u32::MAX, "OFF");

    /// Builds a level outside the built-in scale.
    #[must_use]
    pub const fn custom(rank: u32, name: &'static str) -> Self {
        Self { rank, name }
    }

    #[must_use]
    pub const fn rank(self) -> u32 {
        self.rank
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// A message at `self` reaches a target whose threshold is `threshold`.
    #[must_use]
    pub const fn admits(self, threshold: Self) -> bool {
        self.rank != Self::OFF.rank && self.rank >= threshold.rank
    }

    #[must_use]
    pub const fn is_off(self) -> bool {
        self.rank == Self::OFF.rank
    }

    /// The built-in real levels, most verbose first. OFF is not included.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::DEBUG2,
            Self::DEBUG,
            Self::VERBOSE,
            Self::INFO,
            Self::WARN,
            Self::ERROR,
            Self::FATAL,
        ]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug2" => Ok(Self::DEBUG2),
            "debug" => Ok(Self::DEBUG),
            "verbose" => Ok(Self::VERBOSE),
            "info" => Ok(Self::INFO),
            "warn" | "warning" => Ok(Self::WARN),
            "error" | "err" => Ok(Self::ERROR),
            "fatal" => Ok(Self::FATAL),
            "off" => Ok(Self::OFF),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
