//! Unified error type for catlog operations.
//!
//! Logging calls themselves never return these; they surface from setup paths
//! (catalog loading, target registration) and from `Target::render`, where the
//! dispatcher contains them.

/// Error type for catlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML message catalog parsing error.
    CatalogParse(toml::de::Error),
    /// Format/serialization error.
    Format(String),
    /// Invalid log level string.
    InvalidLevel(String),
    /// A target with the same name is already registered.
    DuplicateTarget(String),
    /// A target refused or failed to render a message.
    Target { name: String, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CatalogParse(e) => write!(f, "catalog parse error: {e}"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::DuplicateTarget(name) => write!(f, "target already registered: {name}"),
            Self::Target { name, message } => write!(f, "target {name} failed: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::CatalogParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::CatalogParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.to_string())
    }
}
