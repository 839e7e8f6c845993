//! Error conversion utilities for CLI.
//!
//! Converts zipguard-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipguard_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::IllegalPath { path } => {
            anyhow!(
                "Security violation: Archive '{}' contains an entry resolving to '{}' \
                 outside the output directory: illegal file path\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ExtractionError::OpenFailed { path, source } => {
            anyhow!(
                "Cannot open '{}' as a zip archive: {source}\n\
                 HINT: Check that the file exists and is a valid zip archive.",
                path.display()
            )
        }
        ExtractionError::ReadFailed { name, source } => {
            anyhow!(
                "Cannot read entry '{name}' of '{}': {source}\n\
                 HINT: The archive may be corrupted or truncated.",
                archive.display()
            )
        }
        err @ ExtractionError::WriteFailed { .. } => anyhow::Error::from(err).context(format!(
            "Failed to write output of '{}' (check permissions and free space)",
            archive.display()
        )),
        err @ ExtractionError::CopyFailed { .. } => anyhow::Error::from(err).context(format!(
            "Failed to copy entry data from '{}'",
            archive.display()
        )),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
