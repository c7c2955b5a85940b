use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// `//` to end of line, in multi-line mode.
static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").unwrap());

/// `/* ... */` (non-greedy, spanning lines) or a `///` doc line.
static BLOCK_OR_DOC_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s:/\*.*?\*/)|(?m:///.*$)").unwrap());

/// Removes C#-style comments with two regex passes.
///
/// First every `//` comment is cut to the end of its line, then every
/// `/* ... */` block and `///` doc line is removed. Line breaks outside block
/// comments survive, so a comment-only line becomes an empty line.
///
/// The passes are purely textual: comment markers inside string literals are
/// treated as comments too, and a `//` inside a block comment is cut before
/// the block pass runs.
///
/// # Examples
/// ```
/// use slncat::processing::filters::strip_comments;
///
/// let code = "int x = 1; // one\n/* block\n comment */int y = 2;\n";
/// assert_eq!(strip_comments(code), "int x = 1; \nint y = 2;\n");
///
/// // Known limitation: string contents are not protected.
/// assert_eq!(strip_comments(r#"var url = "http://host";"#), r#"var url = "http:"#);
/// ```
pub fn strip_comments(content: &str) -> String {
    let without_line_comments = LINE_COMMENT_RE.replace_all(content, "");
    let result = BLOCK_OR_DOC_COMMENT_RE
        .replace_all(&without_line_comments, "")
        .into_owned();

    debug!(
        "Comment removal applied. Original len: {}, New len: {}",
        content.len(),
        result.len()
    );
    result
}
