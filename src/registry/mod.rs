//! Source tables of a surveillance snapshot and their extractors
//!
//! A snapshot consists of three exports:
//! - Teiten: current-period values for several diseases, per-point columns
//!   located from a two-row header
//! - ARI: current-period values of the acute respiratory infection syndrome,
//!   in a fixed column
//! - Tougai: weekly history of several diseases in keyword-delimited sections

use std::fmt;

use crate::error::{Result, SentinelError};

pub mod current;
pub mod history;

pub use current::{extract_multi_disease, extract_single_metric};
pub use history::{extract_history, extract_section};

/// The three exports making up a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Current-period multi-disease table
    Teiten,
    /// Current-period ARI syndrome table
    Ari,
    /// Historical multi-disease table
    Tougai,
}

impl SourceKind {
    /// Key used to request the export from a source
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Teiten => "Teiten",
            Self::Ari => "ARI",
            Self::Tougai => "Tougai",
        }
    }

    /// Look a source up by key, ignoring case
    ///
    /// # Errors
    /// Returns `UnknownSource` for any other key.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "teiten" => Ok(Self::Teiten),
            "ari" => Ok(Self::Ari),
            "tougai" => Ok(Self::Tougai),
            _ => Err(SentinelError::UnknownSource(name.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
