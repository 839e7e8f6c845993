//! Extraction of zip archives onto the filesystem.
//!
//! [`Extractor`] drives the per-entry loop; the `entry` module holds the
//! helpers that write one directory or file.

mod entry;
mod extractor;

pub use extractor::Extractor;
