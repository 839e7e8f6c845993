//! Test utilities for building zip archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Signature that starts every local file header.
const LOCAL_HEADER_SIGNATURE: &[u8; 4] = b"PK\x03\x04";

/// Signature that starts every central directory header.
const CENTRAL_HEADER_SIGNATURE: &[u8; 4] = b"PK\x01\x02";

/// Offset of the external file attributes within a central directory header.
const EXTERNAL_ATTRIBUTES_OFFSET: usize = 38;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed
/// with mode 0o644.
///
/// # Examples
///
/// ```
/// use zipguard_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Builder for zip test archives.
///
/// Entry names are written verbatim, so names such as `../evil.txt` end up
/// in the archive exactly as given.
///
/// # Examples
///
/// ```
/// use zipguard_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build();
/// ```
pub struct ZipTestBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored file with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a stored file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(mode);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a DEFLATE-compressed file with mode 0o644.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrites the signature of the `n`th (0-indexed) local file header so
/// the entry's data can no longer be opened, while the central directory
/// still lists it.
///
/// Returns `false` if the archive has fewer than `n + 1` local headers.
pub fn corrupt_local_header(data: &mut [u8], n: usize) -> bool {
    let position = data
        .windows(LOCAL_HEADER_SIGNATURE.len())
        .enumerate()
        .filter(|(_, window)| *window == LOCAL_HEADER_SIGNATURE)
        .nth(n)
        .map(|(position, _)| position);

    match position {
        Some(position) => {
            data[position..position + 4].copy_from_slice(b"XXXX");
            true
        }
        None => false,
    }
}

/// Rewrites the Unix mode (file type and permissions) that the `n`th
/// (0-indexed) central directory header records, without touching the name.
///
/// The zip writer keeps only permission bits, so this is the way to build
/// entries such as a directory mode on a name without a trailing `/`.
///
/// Returns `false` if the archive has fewer than `n + 1` entries.
pub fn set_unix_mode(data: &mut [u8], n: usize, mode: u32) -> bool {
    let position = data
        .windows(CENTRAL_HEADER_SIGNATURE.len())
        .enumerate()
        .filter(|(_, window)| *window == CENTRAL_HEADER_SIGNATURE)
        .nth(n)
        .map(|(position, _)| position);

    match position {
        Some(position) => {
            // "Version made by" host byte: 3 is Unix.
            data[position + 5] = 3;
            let start = position + EXTERNAL_ATTRIBUTES_OFFSET;
            data[start..start + 4].copy_from_slice(&(mode << 16).to_le_bytes());
            true
        }
        None => false,
    }
}

/// Flips one byte of the first occurrence of `needle`, leaving the archive
/// structure intact but breaking the entry's CRC.
///
/// Returns `false` if `needle` does not occur in `data`.
pub fn corrupt_content(data: &mut [u8], needle: &[u8]) -> bool {
    let position = data
        .windows(needle.len())
        .position(|window| window == needle);

    match position {
        Some(position) => {
            data[position] ^= 0xFF;
            true
        }
        None => false,
    }
}
