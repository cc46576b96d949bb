//! Line and inline recognizers for the supported Markdown subset.
//!
//! Each line-oriented matcher answers a yes/no question about a single line
//! and hands back the semantically useful capture, so callers never touch
//! raw regex groups. Inline patterns are exported for iteration with match
//! offsets by the renderer and escaping logic.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.+)$").expect("valid list item regex"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("valid ordered item regex"));

static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*(.+)$").expect("valid blockquote regex"));

static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|.+\|$").expect("valid table row regex"));

static SEPARATOR_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[:\-| ]+\s*$").expect("valid separator row regex"));

/// Bold spans: `**text**`, `__text__`, or the ambiguous single `*text*`.
///
/// Groups 2, 4 and 6 carry the span text for the three alternatives in that
/// order; exactly one participates per match.
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\*\*)(.*?)\*\*|(__)(.*?)__|(\*)([^*\n]+?)(\*)").expect("valid bold regex")
});

/// Italic spans: `_text_` only. Asterisk italics are not recognized here to
/// keep the grammar unambiguous against bold.
pub static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\n]+?)_").expect("valid italic regex"));

/// Strikethrough spans: `~~text~~`.
pub static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?)~~").expect("valid strikethrough regex"));

/// Inline code spans: a single backtick pair with no embedded backtick or
/// newline.
pub static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid inline code regex"));

/// Links: `[text](url)`. Group 1 is the label, group 2 the URL.
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link regex"));

/// The fence marker opening or closing a code block.
pub const FENCE: &str = "```";

/// Return the heading level and title text when the line is an ATX heading.
#[must_use]
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1).map_or(0, |m| m.as_str().len());
    let text = caps.get(2).map_or("", |m| m.as_str());
    Some((level, text))
}

/// Return the item text when the line is an unordered list item.
#[must_use]
pub fn list_item(line: &str) -> Option<&str> {
    LIST_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return the item text when the line is an ordered (`N.`) list item.
#[must_use]
pub fn ordered_item(line: &str) -> Option<&str> {
    ORDERED_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return the quoted text when the line is a blockquote line.
#[must_use]
pub fn blockquote(line: &str) -> Option<&str> {
    BLOCKQUOTE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check whether the line is a table row (starts and ends with `|`).
#[must_use]
pub fn is_table_row(line: &str) -> bool {
    TABLE_ROW_RE.is_match(line)
}

/// Check whether the line is a table separator row (only `:`, `-`, `|` and
/// spaces).
#[must_use]
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW_RE.is_match(line)
}

/// Check whether the line opens or closes a fenced code block.
#[must_use]
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Return the language tag of an opening fence line, if any.
#[must_use]
pub fn fence_language(line: &str) -> Option<&str> {
    line.strip_prefix(FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_extracts_level_and_text() {
        assert_eq!(heading("# Title"), Some((1, "Title")));
        assert_eq!(heading("### Deep"), Some((3, "Deep")));
        assert_eq!(heading("####### Too deep"), None);
        assert_eq!(heading("#NoSpace"), None);
        assert_eq!(heading("plain"), None);
    }

    #[test]
    fn list_items_match_both_markers() {
        assert_eq!(list_item("- item"), Some("item"));
        assert_eq!(list_item("* item"), Some("item"));
        assert_eq!(list_item("  - indented"), Some("indented"));
        assert_eq!(list_item("-no space"), None);
        assert_eq!(ordered_item("1. first"), Some("first"));
        assert_eq!(ordered_item("12. twelfth"), Some("twelfth"));
        assert_eq!(ordered_item("1.missing"), None);
    }

    #[test]
    fn table_rows_require_both_pipes() {
        assert!(is_table_row("| a | b |"));
        assert!(!is_table_row("| a | b"));
        assert!(!is_table_row("a | b |"));
    }

    #[test]
    fn separator_rows_allow_alignment_colons() {
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :--- | ---: |"));
        assert!(!is_separator_row("| a | b |"));
    }

    #[test]
    fn fence_language_is_the_fence_suffix() {
        assert_eq!(fence_language("```rust"), Some("rust"));
        assert_eq!(fence_language("```"), Some(""));
        assert_eq!(fence_language("code"), None);
    }
}
