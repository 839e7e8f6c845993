//! Error types for zip extraction.

use std::fmt;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// The closed set of failure categories an extraction can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Source archive missing, unreadable, or not a zip.
    OpenFailed,
    /// An entry resolved outside the destination directory.
    IllegalPath,
    /// Directory or file creation failed.
    WriteFailed,
    /// An entry's content stream could not be opened.
    ReadFailed,
    /// Byte transfer from an entry to its output file failed.
    CopyFailed,
}

impl ErrorKind {
    /// Returns a stable, upper-case code for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OpenFailed => "OPEN_FAILED",
            Self::IllegalPath => "ILLEGAL_PATH",
            Self::WriteFailed => "WRITE_FAILED",
            Self::ReadFailed => "READ_FAILED",
            Self::CopyFailed => "COPY_FAILED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors that can occur during archive extraction.
///
/// Every variant is fatal: extraction stops at the first error and whatever
/// was written before it stays on disk.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The source archive could not be opened or is not a valid zip.
    #[error("failed to open archive {path}: {source}")]
    OpenFailed {
        /// Path of the source archive.
        path: PathBuf,
        /// Underlying zip/I/O error.
        source: ZipError,
    },

    /// An entry resolves outside the destination directory.
    #[error("{path}: illegal file path")]
    IllegalPath {
        /// The resolved destination path of the offending entry.
        path: PathBuf,
    },

    /// Creating a directory or output file failed.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Path that could not be created or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An entry's content stream could not be opened.
    #[error("failed to read archive entry {name}: {source}")]
    ReadFailed {
        /// Name of the entry as stored in the archive.
        name: String,
        /// Underlying zip error.
        source: ZipError,
    },

    /// Copying an entry's bytes to its output file failed mid-stream.
    #[error("failed to copy archive data into {path}: {source}")]
    CopyFailed {
        /// Output file left partially written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ExtractionError {
    /// Builds a `WriteFailed` error for `path`.
    pub(crate) fn write_failed(path: &Path, source: io::Error) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipguard_core::ErrorKind;
    /// use zipguard_core::ExtractionError;
    ///
    /// let err = ExtractionError::IllegalPath {
    ///     path: PathBuf::from("/tmp/evil.txt"),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::IllegalPath);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OpenFailed { .. } => ErrorKind::OpenFailed,
            Self::IllegalPath { .. } => ErrorKind::IllegalPath,
            Self::WriteFailed { .. } => ErrorKind::WriteFailed,
            Self::ReadFailed { .. } => ErrorKind::ReadFailed,
            Self::CopyFailed { .. } => ErrorKind::CopyFailed,
        }
    }

    /// Returns `true` if this error was raised by the path-traversal check.
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::IllegalPath { .. })
    }

    /// Returns the filesystem path this error is about, if it has one.
    ///
    /// `ReadFailed` identifies an archive entry rather than a path and
    /// returns `None`.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::OpenFailed { path, .. }
            | Self::IllegalPath { path }
            | Self::WriteFailed { path, .. }
            | Self::CopyFailed { path, .. } => Some(path),
            Self::ReadFailed { .. } => None,
        }
    }
}
