//! Eager file collection: traverse first, query the snapshot afterward.
//!
//! Thin layer over [`TraversalEngine`] for callers that want the whole
//! result set materialized instead of a per-file callback. Listings are
//! sorted so repeated scans of an unchanged tree produce identical output.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::path_utils;
use crate::probe;

use super::config::ScanConfig;
use super::engine::TraversalEngine;
use super::filter::PathFilter;

/// Accumulates every file discovered under a configured root, in discovery
/// order, with no filtering or cancellation during the scan.
///
/// Re-running a scan, or changing the root with [`set_root`](Self::set_root),
/// clears previously accumulated results first.
#[derive(Debug, Clone)]
pub struct FileCollection {
    root: PathBuf,
    files: Vec<PathBuf>,
    engine: TraversalEngine,
}

impl FileCollection {
    /// Collection rooted at `root`. Trailing separators are stripped
    /// (a bare filesystem root is kept as-is).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: path_utils::normalize(root),
            files: Vec::new(),
            engine: TraversalEngine::with_config(ScanConfig {
                sorted: true,
                ..ScanConfig::default()
            }),
        }
    }

    /// Change the root. Accumulated results are discarded.
    pub fn set_root(&mut self, root: impl AsRef<Path>) {
        self.root = path_utils::normalize(root);
        self.files.clear();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the configured root is presently accessible as a directory.
    ///
    /// Purely advisory: re-checked on every call, never cached, and scans
    /// report their own errors regardless of what this returned earlier.
    pub fn is_open(&self) -> bool {
        probe::is_directory(&self.root)
    }

    /// Recursively scan the whole tree under the root, replacing any
    /// previously accumulated results. Returns the number of files found.
    ///
    /// Unreadable subdirectories are skipped; an unavailable root is an
    /// error.
    pub fn scan_tree(&mut self) -> Result<usize> {
        self.rescan(true)
    }

    /// Scan only the root's immediate children, replacing any previously
    /// accumulated results. Returns the number of files found.
    pub fn scan_level(&mut self) -> Result<usize> {
        self.rescan(false)
    }

    fn rescan(&mut self, recurse: bool) -> Result<usize> {
        self.files.clear();
        let mut collected = Vec::new();
        let sink = |path: &Path| {
            collected.push(path.to_path_buf());
            true
        };
        if recurse {
            self.engine.traverse(&self.root, sink, &PathFilter::All)?;
        } else {
            self.engine.visit(&self.root, sink, &PathFilter::All)?;
        }
        self.files = collected;
        Ok(self.files.len())
    }

    /// Every collected file path, in discovery order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The sub-sequence of collected paths matching an extension, with or
    /// without its leading dot, preserving relative order.
    pub fn with_extension(&self, ext: &str) -> Vec<PathBuf> {
        let filter = PathFilter::with_extension(ext);
        self.files
            .iter()
            .filter(|p| filter.accepts(p))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
