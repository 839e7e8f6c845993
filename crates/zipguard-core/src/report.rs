//! Extraction reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Report of an archive extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries processed.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction.
    pub duration: Duration,

    /// Destination path of every entry, in archive order.
    pub extracted_paths: Vec<PathBuf>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    pub(crate) fn record_path(&mut self, path: &Path) {
        self.extracted_paths.push(path.to_path_buf());
    }
}

/// Callback trait for progress reporting during extraction.
///
/// The trait requires `Send` so a callback can be moved to a worker thread
/// together with its extraction call.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipguard_core::ProgressCallback;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("Processing {}/{}: {}", current, total, path.display());
///     }
///
///     fn on_bytes_written(&mut self, bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("Completed: {}", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called after an entry's path was validated, before anything is
    /// written for it.
    ///
    /// * `path` - Destination path of the entry
    /// * `total` - Number of entries in the archive
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called with the number of bytes written for a file entry.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely written and closed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last entry, only when extraction succeeded.
    fn on_complete(&mut self);
}

/// `ProgressCallback` that does nothing.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = ExtractionReport::new();
        assert_eq!(report.files_extracted, 0);
        assert_eq!(report.directories_created, 0);
        assert_eq!(report.bytes_written, 0);
        assert!(report.extracted_paths.is_empty());
    }

    #[test]
    fn test_total_items() {
        let mut report = ExtractionReport::new();
        report.files_extracted = 10;
        report.directories_created = 5;
        assert_eq!(report.total_items(), 15);
    }

    #[test]
    fn test_record_path_keeps_order() {
        let mut report = ExtractionReport::new();
        report.record_path(Path::new("/out/b"));
        report.record_path(Path::new("/out/a"));
        assert_eq!(
            report.extracted_paths,
            vec![PathBuf::from("/out/b"), PathBuf::from("/out/a")]
        );
    }
}
