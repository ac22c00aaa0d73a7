//! Utility functions for error handling
//!
//! Wraps file reads with error messages that say what the file was for.

use std::io;
use std::path::Path;

use crate::error::{Result, SentinelError};

/// Read a source file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Errors
/// Returns `SourceNotFound` when the path does not exist or is not a file,
/// and an `Io` error for permission and encoding failures.
pub async fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(SentinelError::SourceNotFound(format!(
                "{} is not a file (needed for: {purpose})",
                path.display()
            )));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SentinelError::SourceNotFound(format!(
                "{} (needed for: {purpose})",
                path.display()
            )));
        }
        Err(e) => {
            return Err(SentinelError::io_error_with_source(
                format!("Failed to access file for: {purpose}"),
                e,
            )
            .with_path(path));
        }
    }

    tokio::fs::read_to_string(path).await.map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        SentinelError::io_error_with_source(context, e).with_path(path)
    })
}
