//! Error handling for the surveillance reader.
//!
//! Only source retrieval and configuration can fail hard. Extraction itself
//! never returns an error: structural misses degrade to empty results.

use std::io;
use std::path::PathBuf;

pub mod util;

/// Specialized error type for the surveillance reader
#[derive(Debug, thiserror::Error)]
pub enum SentinelError {
    /// Error opening or reading a source
    #[error("IO error: {context}{}", path_suffix(.path))]
    Io {
        context: String,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// A source that was expected in the snapshot is absent
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    /// A source key that does not name one of the three exports
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    /// Threshold or offset configuration that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl SentinelError {
    /// Wrap an I/O error with context
    pub fn io_error_with_source(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: None,
            source,
        }
    }

    /// Attach the path the failing operation was working on
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io {
                context, source, ..
            } => Self::Io {
                context,
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

impl From<io::Error> for SentinelError {
    fn from(error: io::Error) -> Self {
        Self::io_error_with_source("I/O failure", error)
    }
}

/// Result type for surveillance reader operations
pub type Result<T> = std::result::Result<T, SentinelError>;
