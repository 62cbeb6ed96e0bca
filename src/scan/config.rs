//! Configuration types for traversal behavior.

/// What to do when a directory discovered mid-traversal cannot be listed.
///
/// The traversal root is not covered by this policy: a root that cannot be
/// opened is always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadablePolicy {
    /// Drop the directory and continue with the rest of the worklist.
    #[default]
    Skip,
    /// Abort the whole traversal with the listing error.
    Propagate,
}

/// Configuration for traversal behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Sort each directory listing lexicographically by name before
    /// dispatching. Costs a buffer per directory; buys deterministic order.
    pub sorted: bool,
    /// Policy for subdirectories that fail to list mid-traversal.
    pub on_unreadable: UnreadablePolicy,
    /// Skip subdirectories whose joined path ends in a literal `.`.
    ///
    /// Inherited guard against re-walking `.`/`..` from an era before the
    /// lister excluded them. Those pseudo-entries never reach the engine
    /// anymore, so with this flag on the only effect is that a directory
    /// genuinely named with a trailing dot (`archive.`) is not descended.
    /// Defaults to `true` to match the historical traversal; set `false`
    /// for the corrected behavior.
    pub skip_trailing_dot: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sorted: false,
            on_unreadable: UnreadablePolicy::Skip,
            skip_trailing_dot: true,
        }
    }
}
