//! Worklist-driven directory traversal.
//!
//! One engine, two shapes: `visit` expands exactly the root, `traverse`
//! recurses the whole reachable subtree. Both run the same synchronous loop
//! to completion on the calling thread; the only cancellation mechanism is
//! the handler returning `false`, honored at the next entry boundary.

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::path_utils;

use super::config::{ScanConfig, UnreadablePolicy};
use super::filter::PathFilter;
use super::lister::{Entry, list_children, list_children_sorted};

/// Directory-tree traversal with per-file filtering and handler-driven abort.
///
/// The worklist is a stack: each directory's files are fully dispatched
/// before any of its subdirectories expand, and subdirectories pop in
/// reverse discovery order. This is not level-by-level BFS; it reproduces
/// the order of the eager [`FileCollection`](super::FileCollection) when
/// [`ScanConfig::sorted`] is set.
#[derive(Debug, Clone, Default)]
pub struct TraversalEngine {
    config: ScanConfig,
}

impl TraversalEngine {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Single-level mode: expand exactly `root`, dispatch its files through
    /// `filter` then `handler`, ignore its subdirectories entirely.
    ///
    /// Returns `Ok(true)` when the full listing was dispatched, `Ok(false)`
    /// when the handler aborted; once aborted no further entries are
    /// dispatched, siblings included.
    pub fn visit<H>(&self, root: &Path, handler: H, filter: &PathFilter) -> Result<bool>
    where
        H: FnMut(&Path) -> bool,
    {
        self.run(root, handler, filter, false)
    }

    /// Recursive mode: walk the whole subtree under `root`.
    ///
    /// Files reaching the handler are exactly those accepted by `filter`;
    /// the filter never gates which subdirectories are descended. A handler
    /// returning `false` aborts the entire traversal immediately and the
    /// remaining worklist is dropped.
    pub fn traverse<H>(&self, root: &Path, handler: H, filter: &PathFilter) -> Result<bool>
    where
        H: FnMut(&Path) -> bool,
    {
        self.run(root, handler, filter, true)
    }

    fn run<H>(&self, root: &Path, mut handler: H, filter: &PathFilter, recurse: bool) -> Result<bool>
    where
        H: FnMut(&Path) -> bool,
    {
        path_utils::validate(root)?;
        let root = path_utils::normalize(root);

        // Worklist of pending directories, LIFO. Primed with the root,
        // owned by this call, empty again on every successful return.
        let mut worklist: Vec<PathBuf> = vec![root];
        let mut expanded = 0usize;
        let mut dispatched = 0usize;

        while let Some(dir) = worklist.pop() {
            trace!(dir = %dir.display(), "expanding directory");
            let children = match self.list(&dir) {
                Ok(children) => children,
                // expanded == 0 means this is the root: always an error
                Err(err)
                    if expanded > 0 && self.config.on_unreadable == UnreadablePolicy::Skip =>
                {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                    continue;
                }
                Err(err) => return Err(err),
            };
            expanded += 1;

            for child in children {
                if child.is_directory {
                    if !recurse {
                        continue;
                    }
                    if self.config.skip_trailing_dot && ends_with_dot(&child.path) {
                        trace!(dir = %child.path.display(), "trailing-dot guard skipped directory");
                        continue;
                    }
                    worklist.push(child.path);
                } else if filter.accepts(&child.path) {
                    dispatched += 1;
                    if !handler(&child.path) {
                        debug!(expanded, dispatched, "traversal aborted by handler");
                        return Ok(false);
                    }
                }
            }
        }

        debug!(expanded, dispatched, "traversal complete");
        Ok(true)
    }

    fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        if self.config.sorted {
            list_children_sorted(dir)
        } else {
            list_children(dir)
        }
    }
}

fn ends_with_dot(path: &Path) -> bool {
    path.to_string_lossy().ends_with('.')
}
