//! The per-entry extraction loop.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::ExtractOptions;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::types::DestDir;
use crate::types::EntryPath;

use super::entry::create_directory;
use super::entry::file_mode;
use super::entry::is_directory;
use super::entry::write_file;

/// Extracts zip archives into a destination directory.
///
/// Entries are processed in the order the archive stores them. The first
/// failing entry aborts the whole extraction; entries written before it stay
/// on disk. The archive handle lives for the duration of one call and is
/// released on every exit path.
///
/// # Examples
///
/// ```no_run
/// use zipguard_core::ExtractOptions;
/// use zipguard_core::Extractor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = Extractor::new(ExtractOptions::default());
/// let report = extractor.extract("bundle.zip", "/tmp/out")?;
/// for path in &report.extracted_paths {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor with the given options.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Returns the options this extractor was built with.
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extracts `source` into `destination`.
    ///
    /// For each entry the path is checked first, then the entry's content
    /// stream is opened, and only then are its parent directories and output
    /// file created. An entry whose stream cannot be opened therefore leaves
    /// nothing behind for itself; entries before it stay on disk.
    ///
    /// An entry is a directory when its name ends in `/` or its Unix mode
    /// says so. File modes never grant group or other write access.
    ///
    /// # Errors
    ///
    /// - `OpenFailed` if the source cannot be opened or is not a zip; nothing
    ///   is written in that case
    /// - `IllegalPath` if an entry resolves outside `destination`
    /// - `WriteFailed` if a directory or file cannot be created
    /// - `ReadFailed` if an entry's content stream cannot be opened
    /// - `CopyFailed` if copying an entry's bytes fails
    pub fn extract(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<ExtractionReport> {
        self.extract_with_progress(source, destination, &mut NoopProgress)
    }

    /// Extracts `source` into `destination`, reporting progress.
    ///
    /// # Errors
    ///
    /// Same as [`Extractor::extract`].
    pub fn extract_with_progress(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        let source = source.as_ref();

        let mut archive = open_archive(source)?;

        let dest = if self.options.create_destination {
            DestDir::create(destination)?
        } else {
            DestDir::new(destination)?
        };

        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();
        let total = archive.len();

        for index in 0..total {
            self.extract_entry(
                &mut archive,
                index,
                &dest,
                &mut report,
                &mut buffer,
                progress,
            )?;
        }

        report.duration = start.elapsed();
        progress.on_complete();

        Ok(report)
    }

    fn extract_entry(
        &self,
        archive: &mut ZipArchive<BufReader<File>>,
        index: usize,
        dest: &DestDir,
        report: &mut ExtractionReport,
        buffer: &mut CopyBuffer,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()> {
        // Name comes from the central directory, so the path is checked
        // before the entry's local header or data is touched.
        let name = archive
            .name_for_index(index)
            .map(str::to_owned)
            .ok_or_else(|| ExtractionError::ReadFailed {
                name: format!("#{index}"),
                source: ZipError::FileNotFound,
            })?;

        let path = EntryPath::resolve(dest, &name)?;
        report.record_path(path.as_path());
        progress.on_entry_start(path.as_path(), archive.len(), index + 1);

        let mut entry = archive
            .by_index(index)
            .map_err(|source| ExtractionError::ReadFailed {
                name: name.clone(),
                source,
            })?;

        if is_directory(entry.is_dir(), entry.unix_mode()) {
            create_directory(&path, report)?;
        } else {
            // A file can never be written over the destination directory.
            if path.is_root() {
                return Err(ExtractionError::IllegalPath {
                    path: path.into_path_buf(),
                });
            }

            let mode = file_mode(entry.unix_mode(), &self.options);
            let bytes = write_file(&mut entry, &path, mode, &self.options, buffer)?;

            report.files_extracted += 1;
            report.bytes_written = report.bytes_written.saturating_add(bytes);
            progress.on_bytes_written(bytes);
        }
        drop(entry);

        progress.on_entry_complete(path.as_path());
        Ok(())
    }
}

/// Opens `source` and reads its central directory.
fn open_archive(source: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let open_failed = |e: ZipError| ExtractionError::OpenFailed {
        path: source.to_path_buf(),
        source: e,
    };

    let file = File::open(source).map_err(|e| open_failed(ZipError::Io(e)))?;
    ZipArchive::new(BufReader::new(file)).map_err(open_failed)
}
