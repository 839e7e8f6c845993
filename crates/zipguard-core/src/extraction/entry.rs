//! Writers for a single archive entry.
//!
//! Every handle opened here is dropped before the function returns, so no
//! file descriptor outlives the entry it was opened for.

use std::fs::File;
use std::fs::OpenOptions;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::io::{self};
use std::path::Path;

use crate::ExtractOptions;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::COPY_BUFFER_SIZE;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::types::EntryPath;

/// Mode used for files whose entry records no permissions, or when
/// permissions are not preserved.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Permission bits an archive may grant: group and other write are never
/// taken from the archive, matching a process umask of `022`.
const PERMISSION_MASK: u32 = 0o755;

const FILE_TYPE_MASK: u32 = 0o170_000;
const FILE_TYPE_DIRECTORY: u32 = 0o040_000;

/// Returns the permission bits to create a file with.
///
/// File-type, setuid, setgid and sticky bits are dropped, and so are group
/// and other write bits.
pub fn file_mode(unix_mode: Option<u32>, options: &ExtractOptions) -> u32 {
    if !options.preserve_permissions {
        return DEFAULT_FILE_MODE;
    }
    unix_mode.map_or(DEFAULT_FILE_MODE, |mode| mode & PERMISSION_MASK)
}

/// Returns `true` for directory entries: a name ending in `/`, or a Unix
/// mode whose file type is a directory.
pub fn is_directory(name_is_dir: bool, unix_mode: Option<u32>) -> bool {
    name_is_dir || unix_mode.is_some_and(|mode| mode & FILE_TYPE_MASK == FILE_TYPE_DIRECTORY)
}

/// Creates a directory entry and all missing ancestors.
///
/// Idempotent: an existing directory is not an error.
///
/// # Errors
///
/// Returns `WriteFailed` if the directory cannot be created.
pub fn create_directory(path: &EntryPath, report: &mut ExtractionReport) -> Result<()> {
    create_dir_all(path.as_path()).map_err(|e| ExtractionError::write_failed(path.as_path(), e))?;
    report.directories_created += 1;
    Ok(())
}

/// Writes a file entry's contents to its destination.
///
/// Creates missing parent directories, creates or truncates the output file
/// with `mode`, and copies `reader` to it until end-of-stream. The output file
/// is flushed and closed before this returns, on success and on failure. A
/// partially written file is left in place.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// - `WriteFailed` if a parent directory or the output file cannot be
///   created, or its permissions cannot be set
/// - `CopyFailed` if reading the entry or writing the file fails mid-stream
pub fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    path: &EntryPath,
    mode: u32,
    options: &ExtractOptions,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let output_path = path.as_path();

    if let Some(parent) = output_path.parent() {
        create_dir_all(parent).map_err(|e| ExtractionError::write_failed(parent, e))?;
    }

    let output_file =
        open_output(output_path, mode).map_err(|e| ExtractionError::write_failed(output_path, e))?;

    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, output_file);
    let copied = copy_with_buffer(reader, &mut writer, buffer)
        .and_then(|bytes| writer.flush().map(|()| bytes));
    drop(writer);

    let bytes = copied.map_err(|source| ExtractionError::CopyFailed {
        path: output_path.to_path_buf(),
        source,
    })?;

    // The open mode only applies to newly created files; re-apply it so
    // truncated files carry the entry's mode too. `mode` is already masked.
    if options.preserve_permissions {
        apply_mode(output_path, mode).map_err(|e| ExtractionError::write_failed(output_path, e))?;
    }

    Ok(bytes)
}

fn open_output(path: &Path, mode: u32) -> io::Result<File> {
    let mut open_options = OpenOptions::new();
    open_options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open_options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    open_options.open(path)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

// Permission bits have no equivalent outside Unix.
#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
