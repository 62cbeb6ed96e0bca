//! Directory listing and traversal.
//!
//! Two ways to consume a directory tree:
//!
//! - `TraversalEngine`: push-style, streams each accepted file to a handler
//!   whose return value doubles as the cancellation signal
//! - `FileCollection`: pull-style, eagerly materializes the whole result set
//!   for querying afterward

mod collection;
mod config;
mod engine;
mod filter;
mod lister;

// Re-export public types
pub use collection::FileCollection;
pub use config::{ScanConfig, UnreadablePolicy};
pub use engine::TraversalEngine;
pub use filter::PathFilter;
pub use lister::{Entry, list_children, list_children_sorted};
