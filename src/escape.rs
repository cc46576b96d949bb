//! Reserved-character escaping for the MarkdownV2 dialect.
//!
//! A single policy lives here and every block renderer consults it, so the
//! Title, List, Quote and Text paths cannot drift apart. Two operations
//! exist: [`escape_all`] for the strict level, and [`escape_non_format`]
//! for the basic level, which leaves balanced formatting delimiters alone.

/// Characters reserved by the target dialect.
pub const RESERVED: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Formatting delimiter classes subject to the balanced-delimiter rule.
const FORMAT_CHARS: [char; 4] = ['*', '_', '~', '`'];

/// Escape every reserved character, disabling all formatting.
#[must_use]
pub fn escape_all(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Report which formatting classes appear an odd number of unescaped times.
///
/// An unbalanced delimiter cannot be trusted to pair, so formatting is
/// disabled for that character class in the whole unit.
fn unbalanced_classes(text: &str) -> [bool; FORMAT_CHARS.len()] {
    let mut counts = [0usize; FORMAT_CHARS.len()];
    let mut escaped = false;
    for ch in text.chars() {
        if ch == '\\' {
            escaped = !escaped;
            continue;
        }
        if !escaped {
            if let Some(i) = FORMAT_CHARS.iter().position(|&f| f == ch) {
                counts[i] += 1;
            }
        }
        escaped = false;
    }
    let mut odd = [false; FORMAT_CHARS.len()];
    for (i, count) in counts.iter().enumerate() {
        odd[i] = count % 2 == 1;
    }
    odd
}

/// Escape reserved characters while preserving balanced formatting spans.
///
/// Formatting delimiters whose class is balanced in `text` pass through
/// untouched; an unbalanced class has all of its occurrences escaped. All
/// other reserved characters are escaped, with two exceptions: a decimal
/// point directly between two digits, and anything already preceded by a
/// backslash. A bullet glyph at the start of a line is escaped so input
/// text cannot masquerade as rendered list output.
#[must_use]
pub fn escape_non_format(text: &str) -> String {
    let unbalanced = unbalanced_classes(text);
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut escaped = false;

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\\' {
            escaped = !escaped;
            out.push(ch);
            continue;
        }
        if escaped {
            out.push(ch);
            escaped = false;
            continue;
        }

        if let Some(class) = FORMAT_CHARS.iter().position(|&f| f == ch) {
            if unbalanced[class] {
                out.push('\\');
            }
            out.push(ch);
            continue;
        }

        if ch == '•' && (i == 0 || chars[i - 1] == '\n') {
            out.push('\\');
            out.push(ch);
            continue;
        }

        if RESERVED.contains(&ch) {
            let numeric_dot = ch == '.'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if !numeric_dot {
                out.push('\\');
            }
        }
        out.push(ch);
    }

    out
}
