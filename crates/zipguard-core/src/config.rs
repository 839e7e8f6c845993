//! Extraction options.

/// Options controlling how an archive is written to disk.
///
/// The path-traversal check is not configurable; these options only decide
/// how much of the archive's metadata is applied and whether the destination
/// directory may be created.
///
/// # Examples
///
/// ```
/// use zipguard_core::ExtractOptions;
///
/// // Defaults: apply entry modes, create the destination directory
/// let options = ExtractOptions::default();
/// assert!(options.preserve_permissions);
///
/// // Require an existing destination
/// let strict = ExtractOptions {
///     create_destination: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Apply each entry's recorded permission bits to the file it produces.
    ///
    /// When `false`, files are created with mode `0o644` regardless of what
    /// the archive records.
    pub preserve_permissions: bool,

    /// Create the destination directory (and its ancestors) before the first
    /// entry is processed.
    ///
    /// When `false`, a missing destination is a `WriteFailed` error.
    pub create_destination: bool,
}

impl Default for ExtractOptions {
    /// Default values:
    /// - `preserve_permissions`: true
    /// - `create_destination`: true
    fn default() -> Self {
        Self {
            preserve_permissions: true,
            create_destination: true,
        }
    }
}

impl ExtractOptions {
    /// Options that ignore archive modes and never create the destination.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            preserve_permissions: false,
            create_destination: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert!(options.preserve_permissions);
        assert!(options.create_destination);
    }

    #[test]
    fn test_strict_options() {
        let options = ExtractOptions::strict();
        assert!(!options.preserve_permissions);
        assert!(!options.create_destination);
    }
}
