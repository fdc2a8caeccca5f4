//! Markdown stripping for generated text.
//!
//! Upstream writers are told not to emit markdown, but they do anyway. These
//! rewrites remove heading markers and simple emphasis wrappers. They are a
//! heuristic, not a markdown parser: nested or malformed spans are handled on
//! a best-effort basis.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of 1-6 `#` at the very start of a line, plus trailing whitespace.
static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s*").expect("heading marker regex"));

/// `*x*` or `**x**` around a non-empty span without asterisks.
static STAR_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*{1,2}([^*]+)\*{1,2}").expect("star emphasis regex"));

/// `_x_` or `__x__`, only when the underscores are not glued to a word on
/// their outer side, so identifiers like `snake_case_name` survive.
static UNDERSCORE_EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^\w])_{1,2}([^_]+)_{1,2}([^\w]|$)").expect("underscore emphasis regex")
});

/// Strip heading markers and emphasis wrappers from a single line.
///
/// The rewrite runs until the line stops changing, so the result is a fixed
/// point: `strip_markdown(&strip_markdown(s)) == strip_markdown(s)`.
///
/// # Example
///
/// ```
/// use writedocx::parser::strip_markdown;
///
/// assert_eq!(strip_markdown("## **Title**"), "Title");
/// assert_eq!(strip_markdown("1.1 引言"), "1.1 引言");
/// ```
pub fn strip_markdown(line: &str) -> String {
    let mut current = strip_once(line);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Remove a leading heading marker, if present.
pub fn strip_heading_marker(line: &str) -> String {
    HEADING_MARKER.replace(line, "").into_owned()
}

/// Collapse emphasis wrappers to the wrapped text (one pass).
pub fn strip_emphasis(line: &str) -> String {
    let starless = STAR_EMPHASIS.replace_all(line, "$1");
    UNDERSCORE_EMPHASIS
        .replace_all(&starless, "${1}${2}${3}")
        .into_owned()
}

fn strip_once(line: &str) -> String {
    strip_emphasis(&strip_heading_marker(line))
}
