//! Error types for createx-core and the crates built on it.
//!
//! Content, site, and CLI crates share this one taxonomy so a failure can
//! travel from the filesystem up to the API boundary without re-wrapping.

use std::path::{Path, PathBuf};

/// Result type alias for CreateX operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the CreateX content pipeline.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem failure, tagged with the path that was being touched.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// A module, translation, or track does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of thing that was looked up ("module", "translation", ...).
        kind: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML front-matter deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Markdown rendering failed and no fallback was applied.
    #[error("Render error: {0}")]
    Render(String),

    /// Static site emission failed.
    #[error("Build error: {0}")]
    Build(String),

    /// A bounded operation ran past its deadline.
    #[error("Operation timed out after {seconds}s")]
    Timeout {
        /// Deadline in seconds.
        seconds: u64,
    },
}

impl Error {
    /// Creates an I/O error tagged with a path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a build error.
    pub fn build<S: Into<String>>(message: S) -> Self {
        Error::Build(message.into())
    }

    /// Returns `true` for absence outcomes that callers surface as 404s.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
