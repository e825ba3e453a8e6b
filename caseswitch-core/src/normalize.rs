//! Separator and whitespace normalization

use regex::Regex;
use std::sync::LazyLock;

static HYPHEN_UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("valid separator pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static LINE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\r\n]+").expect("valid line break pattern"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid space pattern"));

/// Treat `-` and `_` as word separators: each run of them becomes a space,
/// then every whitespace run collapses to a single space.
///
/// Leading and trailing whitespace is collapsed, not removed.
pub fn normalize_separators(text: &str) -> String {
    let spaced = HYPHEN_UNDERSCORE_RUN.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").into_owned()
}

/// Collapse tab/CR/LF runs and repeated spaces, then trim both ends.
pub fn collapse_spaces(text: &str) -> String {
    let joined = LINE_BREAK_RUN.replace_all(text, " ");
    let collapsed = SPACE_RUN.replace_all(&joined, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphens_and_underscores_become_spaces() {
        assert_eq!(normalize_separators("foo-bar_baz"), "foo bar baz");
        assert_eq!(normalize_separators("foo--__bar"), "foo bar");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize_separators("a \t\n b"), "a b");
        assert_eq!(normalize_separators("a - b"), "a b");
    }

    #[test]
    fn test_outer_whitespace_is_kept_as_single_space() {
        assert_eq!(normalize_separators("  hello  "), " hello ");
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        assert_eq!(normalize_separators("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("  hello   world \n\n again\t"), "hello world again");
        assert_eq!(collapse_spaces("\r\n"), "");
    }

    #[test]
    fn test_collapse_spaces_keeps_separators() {
        assert_eq!(collapse_spaces("foo-bar  baz_qux"), "foo-bar baz_qux");
    }
}
