//! Non-throwing filesystem probes and thin metadata wrappers.
//!
//! Probes answer "is this path usable as X right now" with a plain bool and
//! swallow the underlying error; the Result-returning wrappers keep it. Both
//! re-check the filesystem on every call and cache nothing.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

/// Whether the path currently names an accessible directory.
///
/// Follows symlinks, like the traversal root check does.
pub fn is_directory(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether the path currently names a regular file.
pub fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Whether the path itself is a symbolic link (not followed).
pub fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Whether the path exists at all, following symlinks.
pub fn exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Size of a file in bytes.
pub fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// Last modification time of a file or directory.
pub fn modified(path: &Path) -> Result<SystemTime> {
    Ok(std::fs::metadata(path)?.modified()?)
}

/// Target a symbolic link points at.
pub fn read_link_target(path: &Path) -> Result<PathBuf> {
    Ok(std::fs::read_link(path)?)
}

/// Format a size in bytes to human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
