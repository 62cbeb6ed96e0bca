//! Error types for directory scanning and traversal.

use std::path::PathBuf;
use thiserror::Error;

/// Longest accepted input path, in bytes.
///
/// Paths over this length are rejected up front with [`ScanError::NameTooLong`]
/// instead of being handed to the OS.
pub const MAX_PATH_LEN: usize = 4096;

/// Errors produced by listing and traversal operations.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The path does not name a directory that can be opened for enumeration:
    /// it does not exist, is a regular file, or access was denied.
    #[error("cannot open directory '{path}' for enumeration")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input path (empty, or containing an embedded NUL).
    #[error("invalid path: {reason}")]
    InvalidPath { reason: String },

    /// Input path exceeds [`MAX_PATH_LEN`].
    #[error("path of {len} bytes exceeds the {max}-byte ceiling")]
    NameTooLong { len: usize, max: usize },

    /// A read failed mid-listing, after the directory was opened.
    #[error("I/O error while listing directory")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
