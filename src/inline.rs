//! Inline formatting translation to the target dialect.
//!
//! Bold collapses to single asterisks, underscores stay italic, double
//! tildes collapse to single, and inline code is preserved as-is. The
//! ambiguous single-asterisk span is treated as italic; `**` and `__` are
//! the only bold spellings.

use regex::Captures;

use crate::patterns::{BOLD_RE, INLINE_CODE_RE, ITALIC_RE, STRIKE_RE};

fn replace_bold(caps: &Captures<'_>) -> String {
    if let Some(m) = caps.get(2) {
        format!("*{}*", m.as_str().trim())
    } else if let Some(m) = caps.get(4) {
        format!("*{}*", m.as_str().trim())
    } else if let Some(m) = caps.get(6) {
        format!("_{}_", m.as_str().trim())
    } else {
        caps[0].to_string()
    }
}

/// Translate inline formatting markers to the target dialect.
#[must_use]
pub fn translate_inline(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, |caps: &Captures<'_>| replace_bold(caps));
    let text = ITALIC_RE.replace_all(&text, |caps: &Captures<'_>| {
        format!("_{}_", caps[1].trim())
    });
    let text = INLINE_CODE_RE.replace_all(&text, "`$1`");
    let text = STRIKE_RE.replace_all(&text, |caps: &Captures<'_>| format!("~{}~", &caps[1]));
    text.into_owned()
}
