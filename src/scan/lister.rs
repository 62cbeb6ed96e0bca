//! Single-directory expansion: list the immediate children of one directory.
//!
//! Each call opens its own `ReadDir` handle and releases it before returning,
//! on the error paths included. No handle outlives a call, so concurrent
//! read-only listings from different threads never share state.

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, ScanError};

/// One immediate child of a scanned directory.
///
/// Produced fresh on every scan and never cached across scans. `.` and `..`
/// are never represented. A symlink is reported with `is_directory: false`
/// even when it targets a directory, so traversal never follows links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Full path: the scanned directory joined with `name`.
    pub path: std::path::PathBuf,
    /// Bare entry name.
    pub name: String,
    /// Whether the entry is a real subdirectory (symlinks excluded).
    pub is_directory: bool,
}

/// List the immediate children of `dir`, in the order the OS reports them.
///
/// Fails with [`ScanError::DirectoryUnavailable`] when `dir` cannot be opened
/// for enumeration (missing, access denied, or a regular file), and with
/// [`ScanError::Io`] when a read fails after the directory opened.
/// Classification comes from each entry's own dirent file type; the joined
/// path is never re-resolved.
pub fn list_children(dir: &Path) -> Result<Vec<Entry>> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| ScanError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let file_type = entry.file_type()?;
        children.push(Entry {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().to_string(),
            is_directory: file_type.is_dir(),
        });
    }
    Ok(children)
}

/// Like [`list_children`], but sorted lexicographically by name.
///
/// Buffers the whole listing before returning; used where stable output
/// order matters (the eager collector, tests).
pub fn list_children_sorted(dir: &Path) -> Result<Vec<Entry>> {
    let mut children = list_children(dir)?;
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}
