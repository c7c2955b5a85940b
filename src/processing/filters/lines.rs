//! Line-level filtering: blank lines, using-directives and namespace wrappers.

use crate::constants::{NAMESPACE_DECLARATION_PREFIX, USING_DIRECTIVE_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Where the filter stands relative to the file's namespace declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceState {
    /// No namespace declaration seen yet.
    #[default]
    OutsideNamespace,
    /// A namespace declaration was seen. Never left for the rest of the file.
    InsideNamespace,
}

/// Per-file line filter.
///
/// A line is dropped when its trimmed form is empty, starts with `using `,
/// starts with `namespace ` (which also enters `InsideNamespace`), or, once
/// inside a namespace, is exactly `{`. Kept lines are not modified.
///
/// Nesting is not tracked: after the namespace declaration every bare `{`
/// line of the file is dropped, not only the one opening the namespace.
#[derive(Debug, Default)]
pub struct LineFilter {
    state: NamespaceState,
}

impl LineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NamespaceState {
        self.state
    }

    /// Feeds one physical line; returns `true` if it is kept.
    pub fn accept(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(USING_DIRECTIVE_PREFIX) {
            return false;
        }
        if trimmed.starts_with(NAMESPACE_DECLARATION_PREFIX) {
            self.state = NamespaceState::InsideNamespace;
            return false;
        }
        !(self.state == NamespaceState::InsideNamespace && trimmed == "{")
    }
}

/// Splits on CRLF, CR or LF. A trailing break yields a final empty line.
pub fn split_physical_lines(content: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK_RE.split(content)
}

/// Runs a fresh [`LineFilter`] over `content` and joins the kept lines, each
/// terminated by `\n`.
///
/// # Examples
/// ```
/// use slncat::processing::filters::filter_lines;
///
/// let input = "using System;\r\nnamespace App\r\n{\r\n\r\n    class Foo {}\r\n}\r\n";
/// assert_eq!(filter_lines(input), "    class Foo {}\n}\n");
/// ```
pub fn filter_lines(content: &str) -> String {
    let mut filter = LineFilter::new();
    let mut result = String::with_capacity(content.len());
    for line in split_physical_lines(content) {
        if filter.accept(line) {
            result.push_str(line);
            result.push('\n');
        }
    }
    result
}
