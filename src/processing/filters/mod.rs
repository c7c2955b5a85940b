//! Provides a trait and implementations for transforming file content.

use std::fmt;

mod comments;
mod lines;

// Re-export the standalone functions
pub use comments::strip_comments;
pub use lines::{filter_lines, split_physical_lines, LineFilter, NamespaceState};

/// A trait for content transformation filters.
///
/// Filters are applied sequentially to the content of each source file.
pub trait ContentFilter: Send + Sync {
    /// Applies the filter to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

// Implement Debug manually for Box<dyn ContentFilter> by using the name method.
impl fmt::Debug for Box<dyn ContentFilter> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

// --- Filter Implementations ---

/// Filter removing `//`, `/* */` and `///` comments.
#[derive(Debug)]
pub struct StripCommentsFilter;

impl ContentFilter for StripCommentsFilter {
    fn apply(&self, content: &str) -> String {
        comments::strip_comments(content)
    }
    fn name(&self) -> &'static str {
        "StripCommentsFilter"
    }
}

/// Filter dropping blank lines, using-directives and namespace wrappers.
#[derive(Debug)]
pub struct DirectiveLineFilter;

impl ContentFilter for DirectiveLineFilter {
    fn apply(&self, content: &str) -> String {
        lines::filter_lines(content)
    }
    fn name(&self) -> &'static str {
        "DirectiveLineFilter"
    }
}

/// The filter chain every source file goes through, in order.
pub fn default_filters() -> Vec<Box<dyn ContentFilter>> {
    vec![Box::new(StripCommentsFilter), Box::new(DirectiveLineFilter)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let names: Vec<_> = default_filters().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["StripCommentsFilter", "DirectiveLineFilter"]);
    }

    #[test]
    fn test_comment_filter_apply() {
        assert_eq!(StripCommentsFilter.apply("x; // y"), "x; ");
    }

    #[test]
    fn test_line_filter_apply() {
        assert_eq!(DirectiveLineFilter.apply("using A;\n\nx;"), "x;\n");
    }

    #[test]
    fn test_debug_uses_name() {
        let filter: Box<dyn ContentFilter> = Box::new(DirectiveLineFilter);
        assert_eq!(format!("{:?}", filter), "ContentFilter(\"DirectiveLineFilter\")");
    }
}
