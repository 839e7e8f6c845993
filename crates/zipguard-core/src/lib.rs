//! Zip extraction that never writes outside the destination directory.
//!
//! `zipguard-core` extracts zip archives entry by entry, in archive order.
//! Every entry name is resolved against the destination directory and
//! rejected when the result escapes it ("zip slip"). Directories are
//! recreated, file contents are streamed to disk with the entry's permission
//! bits, and each output file is closed before the next entry is processed.
//!
//! # Examples
//!
//! ```no_run
//! use zipguard_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_archive("bundle.zip", "/output/dir")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_archive_with_options;
pub use api::extract_archive_with_progress;
pub use config::ExtractOptions;
pub use error::ErrorKind;
pub use error::ExtractionError;
pub use error::Result;
pub use extraction::Extractor;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryPath;
