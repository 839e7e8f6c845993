//! High-level public API for archive extraction.

use std::path::Path;

use crate::ExtractOptions;
use crate::ExtractionReport;
use crate::Extractor;
use crate::ProgressCallback;
use crate::Result;

/// Extracts a zip archive into `destination` with default options.
///
/// The destination directory is created if it does not exist, once the
/// archive has been opened successfully.
///
/// # Arguments
///
/// * `source` - Path to the zip archive
/// * `destination` - Directory that receives the archive's contents
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a zip (`OpenFailed`)
/// - An entry resolves outside `destination` (`IllegalPath`)
/// - A directory or file cannot be created (`WriteFailed`)
/// - An entry's data cannot be read (`ReadFailed`, `CopyFailed`)
///
/// # Examples
///
/// ```no_run
/// use zipguard_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("bundle.zip", "/tmp/output")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<ExtractionReport> {
    Extractor::default().extract(source, destination)
}

/// Extracts a zip archive with explicit options.
///
/// # Errors
///
/// Same as [`extract_archive`].
pub fn extract_archive_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    Extractor::new(options.clone()).extract(source, destination)
}

/// Extracts a zip archive with explicit options and progress reporting.
///
/// # Errors
///
/// Same as [`extract_archive`].
///
/// # Examples
///
/// ```no_run
/// use zipguard_core::ExtractOptions;
/// use zipguard_core::NoopProgress;
/// use zipguard_core::extract_archive_with_progress;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut progress = NoopProgress;
/// let report = extract_archive_with_progress(
///     "bundle.zip",
///     "/tmp/output",
///     &ExtractOptions::default(),
///     &mut progress,
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    options: &ExtractOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    Extractor::new(options.clone()).extract_with_progress(source, destination, progress)
}
