//! Path types used during extraction.
//!
//! Both types are validated on construction and cannot be built from raw
//! paths without going through validation. An `EntryPath` can only be
//! produced by resolving an entry name against a `DestDir`, so holding one
//! means the path-traversal check has passed.

pub mod dest_dir;
pub mod entry_path;

pub use dest_dir::DestDir;
pub use entry_path::EntryPath;
