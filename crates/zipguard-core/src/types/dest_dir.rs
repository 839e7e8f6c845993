//! Validated destination directory type.

use crate::ExtractionError;
use crate::Result;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// The directory an archive is extracted into.
///
/// A `DestDir` always holds an absolute, canonical path to an existing
/// directory. Entry paths are resolved and prefix-checked against this
/// canonical form, so `.`/`..` segments or a symlinked destination given by
/// the caller cannot confuse the path-traversal check.
///
/// # Examples
///
/// ```no_run
/// use zipguard_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/extraction")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Wraps an existing directory.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the path does not exist, is not a directory,
    /// or cannot be canonicalized.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let canonical = path
            .canonicalize()
            .map_err(|e| ExtractionError::write_failed(path, e))?;

        if !canonical.is_dir() {
            return Err(ExtractionError::write_failed(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path is not a directory"),
            ));
        }

        Ok(Self(canonical))
    }

    /// Creates the directory and any missing ancestors, then wraps it.
    ///
    /// Succeeds if the directory already exists.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the directory cannot be created, or if the
    /// path exists and is not a directory.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| ExtractionError::write_failed(path, e))?;
        Self::new(path)
    }

    /// Returns the canonical path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for DestDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_dest_dir_valid() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("dest should be valid");
        assert!(dest.as_path().is_absolute());
    }

    #[test]
    fn test_dest_dir_nonexistent() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let result = DestDir::new(temp.path().join("missing"));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::WriteFailed);
    }

    #[test]
    fn test_dest_dir_not_a_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let result = DestDir::new(&file_path);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::WriteFailed);

        let result = DestDir::create(&file_path);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::WriteFailed);
    }

    #[test]
    fn test_dest_dir_create_nested() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let nested = temp.path().join("a").join("b").join("c");

        let dest = DestDir::create(&nested).expect("should create nested dirs");
        assert!(nested.is_dir());
        assert_eq!(dest.as_path(), nested.canonicalize().unwrap());
    }

    #[test]
    fn test_dest_dir_create_existing_is_ok() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let first = DestDir::create(temp.path()).expect("should wrap existing dir");
        let second = DestDir::create(temp.path()).expect("should be idempotent");
        assert_eq!(first, second);
    }

    #[test]
    fn test_dest_dir_canonicalization() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).expect("failed to create subdir");

        let path_with_dot = subdir.join(".").join("..");
        let dest = DestDir::new(path_with_dot).expect("should create dest dir");

        assert_eq!(dest.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_dest_dir_resolves_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().expect("failed to create temp dir");
        let real_dir = temp.path().join("real");
        fs::create_dir(&real_dir).expect("failed to create real dir");
        let link = temp.path().join("link");
        symlink(&real_dir, &link).expect("failed to create symlink");

        let dest = DestDir::new(&link).expect("should create from symlink");
        assert_eq!(dest.as_path(), real_dir.canonicalize().unwrap());
    }

    #[test]
    fn test_dest_dir_into_path_buf() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("should create");
        let path = dest.clone().into_path_buf();
        assert_eq!(path, dest.as_path());
    }
}
