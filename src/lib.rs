//! Dirscan - portable directory enumeration with cancellable tree traversal

pub mod error;
pub mod path_utils;
pub mod probe;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{MAX_PATH_LEN, Result, ScanError};
pub use scan::{
    Entry, FileCollection, PathFilter, ScanConfig, TraversalEngine, UnreadablePolicy,
    list_children, list_children_sorted,
};
