//! File filtering for traversal.

use std::path::Path;

/// Predicate gating which discovered files reach the handler.
///
/// Filters apply to files only; directory recursion is never pruned by a
/// filter. The extension variant is an anchored suffix match on the path's
/// string form, dot included, not a true extension parse: `report.cpp`
/// matches `with_extension("cpp")`, a file named `xcpp` does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathFilter {
    /// Accept every candidate.
    #[default]
    All,
    /// Accept candidates ending with the stored dot-prefixed suffix.
    Extension(String),
}

impl PathFilter {
    /// Build an extension filter, accepting the extension with or without
    /// its leading dot: `with_extension("cpp")` and `with_extension(".cpp")`
    /// are the same filter.
    pub fn with_extension(ext: &str) -> Self {
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        };
        Self::Extension(ext)
    }

    /// Whether the candidate passes the filter.
    pub fn accepts(&self, candidate: &Path) -> bool {
        match self {
            Self::All => true,
            Self::Extension(ext) => candidate.to_string_lossy().ends_with(ext.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_accepts_everything() {
        let filter = PathFilter::All;
        assert!(filter.accepts(Path::new("/a/b.rs")));
        assert!(filter.accepts(Path::new("no_extension")));
        assert!(filter.accepts(Path::new("")));
    }

    #[test]
    fn test_extension_dot_normalization() {
        let bare = PathFilter::with_extension("cpp");
        let dotted = PathFilter::with_extension(".cpp");
        assert_eq!(bare, dotted);

        for candidate in ["/src/report.cpp", "lib.cpp", "a/b/c.cpp"] {
            assert!(bare.accepts(Path::new(candidate)));
            assert!(dotted.accepts(Path::new(candidate)));
        }
    }

    #[test]
    fn test_extension_match_is_anchored() {
        let filter = PathFilter::with_extension("cpp");
        assert!(!filter.accepts(Path::new("/src/xcpp")), "dot is required");
        assert!(!filter.accepts(Path::new("/src/report.cpp.bak")));
        assert!(!filter.accepts(Path::new("/src/report.c")));
    }

    #[test]
    fn test_extension_suffix_not_true_parse() {
        // suffix semantics: the final extension is what matters
        let filter = PathFilter::with_extension("gz");
        assert!(filter.accepts(Path::new("archive.tar.gz")));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(PathFilter::default(), PathFilter::All);
    }
}
