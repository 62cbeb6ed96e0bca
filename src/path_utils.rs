//! Path normalization and validation helpers.

use std::path::{Component, Path, PathBuf};

use crate::error::{MAX_PATH_LEN, Result, ScanError};

/// Strip trailing directory separators from a path.
///
/// A bare filesystem root keeps its separator; anything else loses every
/// trailing one, so `"/a/b///"` becomes `"/a/b"` and `"/"` stays `"/"`.
///
/// # Example
///
/// ```
/// use dirscan::path_utils::normalize;
///
/// assert_eq!(normalize("/tmp/scans//"), std::path::PathBuf::from("/tmp/scans"));
/// assert_eq!(normalize("/"), std::path::PathBuf::from("/"));
/// ```
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let s = path.to_string_lossy();
    let trimmed = s.trim_end_matches(std::path::MAIN_SEPARATOR);
    if trimmed.is_empty() {
        if s.is_empty() {
            // empty stays empty; validation rejects it downstream
            return PathBuf::new();
        }
        // the whole string was separators: a root
        return PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(trimmed)
}

/// Validate an input path before it reaches the OS.
///
/// Rejects empty paths and embedded NUL bytes with
/// [`ScanError::InvalidPath`], and paths longer than
/// [`MAX_PATH_LEN`] with [`ScanError::NameTooLong`].
pub fn validate(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ScanError::InvalidPath {
            reason: "path is empty".to_string(),
        });
    }
    let len = path.as_os_str().len();
    if len > MAX_PATH_LEN {
        return Err(ScanError::NameTooLong {
            len,
            max: MAX_PATH_LEN,
        });
    }
    if path.to_string_lossy().contains('\0') {
        return Err(ScanError::InvalidPath {
            reason: "path contains an embedded NUL".to_string(),
        });
    }
    Ok(())
}

/// Whether a path has any relative components (`.` or `..`).
pub fn has_relative_components(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::CurDir | Component::ParentDir))
}
