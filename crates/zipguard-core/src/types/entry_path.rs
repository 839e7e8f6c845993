//! Destination path of a single archive entry.

use crate::ExtractionError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// The resolved destination of one archive entry.
///
/// Built only by [`EntryPath::resolve`], which joins the entry name onto the
/// destination directory, normalizes `.` and `..` lexically, and checks that
/// the result is the destination itself or lies beneath it.
///
/// # Examples
///
/// ```no_run
/// use zipguard_core::types::DestDir;
/// use zipguard_core::types::EntryPath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/out")?;
///
/// let path = EntryPath::resolve(&dest, "docs/readme.txt")?;
/// assert!(path.as_path().starts_with(dest.as_path()));
///
/// // Zip slip is rejected
/// assert!(EntryPath::resolve(&dest, "../evil.txt").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath {
    path: PathBuf,
    is_root: bool,
}

impl EntryPath {
    /// Resolves an archive entry name against `dest`.
    ///
    /// The name is split on `/`, the separator zip archives use on every
    /// platform, and each segment is appended with the host's path rules.
    /// Empty and `.` segments are dropped and `..` removes the last
    /// component, so a leading `/` or a doubled `//` never produces an
    /// absolute path.
    ///
    /// # Errors
    ///
    /// Returns `IllegalPath` carrying the resolved path when it is not equal
    /// to or beneath `dest`, or when a segment carries a root or drive prefix
    /// (`C:` or `\` on Windows).
    pub fn resolve(dest: &DestDir, name: &str) -> Result<Self> {
        let root = dest.as_path();
        let mut resolved = root.to_path_buf();

        for segment in name.split('/') {
            for component in Path::new(segment).components() {
                match component {
                    Component::Normal(part) => resolved.push(part),
                    Component::CurDir => {}
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    Component::RootDir | Component::Prefix(_) => {
                        return Err(ExtractionError::IllegalPath {
                            path: root.join(name),
                        });
                    }
                }
            }
        }

        // Component-wise comparison: `/out` does not contain `/outside`.
        if !resolved.starts_with(root) {
            return Err(ExtractionError::IllegalPath { path: resolved });
        }

        let is_root = resolved.as_path() == root;
        Ok(Self {
            path: resolved,
            is_root,
        })
    }

    /// Returns `true` when the entry resolves to the destination directory
    /// itself.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns the absolute destination path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for EntryPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
