//! Length-aware splitting of long input.
//!
//! [`break_long_text`] partitions raw input into parts that fit the
//! message limit without ever cutting a fenced code block open: fenced
//! content is buffered across blank-line boundaries and re-wrapped with
//! its opening fence and language tag in every sub-part it is divided
//! into. All lengths are rune counts, not byte counts.

use tracing::debug;

use crate::{config::TELEGRAM_MAX_LENGTH, patterns};

/// Headroom reserved for escape characters added during rendering.
pub(crate) const SAFETY_MARGIN: usize = 256;

fn rune_len(s: &str) -> usize {
    s.chars().count()
}

/// Slice a string into chunks of at most `limit` runes.
fn slice_runes(s: &str, limit: usize) -> Vec<String> {
    let runes: Vec<char> = s.chars().collect();
    runes
        .chunks(limit.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Count the fence lines in a paragraph; an odd count toggles code mode.
fn fence_lines(paragraph: &str) -> usize {
    paragraph
        .split('\n')
        .filter(|line| patterns::is_fence(line))
        .count()
}

/// Whether the paragraph is a self-contained fenced code block.
fn is_code_paragraph(paragraph: &str) -> bool {
    let lines: Vec<&str> = paragraph.split('\n').collect();
    lines.len() >= 2
        && lines.first().is_some_and(|l| patterns::is_fence(l))
        && lines.last().is_some_and(|l| patterns::is_fence(l))
        && fence_lines(paragraph) % 2 == 0
}

/// Split a long plain paragraph on word boundaries; a single word longer
/// than the limit is sliced by character position.
fn split_paragraph(paragraph: &str, limit: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let word_len = rune_len(word);
        if word_len > limit {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            parts.extend(slice_runes(word, limit));
        } else if !current.is_empty() && rune_len(&current) + 1 + word_len > limit {
            parts.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn wrap_code(chunk: &str, language: &str) -> String {
    format!("```{language}\n{chunk}\n```")
}

/// Split an oversized fenced code block into fence-wrapped sub-parts.
///
/// The opening fence's language tag is re-emitted on every sub-part, and
/// the per-part budget shrinks by the fence overhead. A single content
/// line longer than the budget is sliced by character position.
fn split_code_block(content: &str, limit: usize) -> Vec<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < 2 {
        return vec![content.to_string()];
    }

    let language = lines
        .first()
        .and_then(|l| patterns::fence_language(l))
        .unwrap_or("");
    let body = &lines[1..lines.len() - 1];

    // Opening fence, language tag, both newlines, and the closing fence.
    let overhead = 8 + rune_len(language);
    let budget = limit.saturating_sub(overhead).max(1);

    let mut parts = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for line in body {
        let line_len = rune_len(line);
        if line_len > budget {
            if !current.is_empty() {
                parts.push(wrap_code(&current.join("\n"), language));
                current.clear();
                current_len = 0;
            }
            for chunk in slice_runes(line, budget) {
                parts.push(wrap_code(&chunk, language));
            }
            continue;
        }

        let cost = line_len + usize::from(!current.is_empty());
        if current_len + cost > budget {
            parts.push(wrap_code(&current.join("\n"), language));
            current.clear();
            current_len = 0;
        }
        current_len += line_len + usize::from(!current.is_empty());
        current.push(line);
    }

    if !current.is_empty() {
        parts.push(wrap_code(&current.join("\n"), language));
    }
    parts
}

/// Close an open code unit, synthesizing the closing fence when the input
/// ended before one appeared.
fn finish_code_unit(buffer: &[&str]) -> String {
    let unit = buffer.join("\n\n");
    if unit.split('\n').next_back().is_some_and(patterns::is_fence) && fence_lines(&unit) % 2 == 0 {
        unit
    } else {
        format!("{unit}\n{}", patterns::FENCE)
    }
}

/// Byte offset of the trailing unmatched fence opener in a paragraph with
/// an odd fence count, or 0 when the paragraph starts with it.
///
/// Any earlier, balanced fences stay in the head and are packed as prose;
/// an oversized head is word-split like any other paragraph.
fn trailing_fence_offset(paragraph: &str) -> usize {
    paragraph.rfind("\n```").map_or(0, |pos| pos + 1)
}

fn flush_current(current: &mut String, parts: &mut Vec<String>) {
    if !current.is_empty() {
        parts.push(std::mem::take(current));
    }
}

/// Append a plain paragraph to the running part, starting a new part when
/// the limit would be exceeded and word-splitting oversized paragraphs.
fn pack_plain(paragraph: &str, effective: usize, current: &mut String, parts: &mut Vec<String>) {
    let paragraph_len = rune_len(paragraph);
    if paragraph_len > effective {
        flush_current(current, parts);
        parts.extend(split_paragraph(paragraph, effective));
    } else if !current.is_empty() && rune_len(current) + 2 + paragraph_len > effective {
        parts.push(std::mem::take(current));
        current.push_str(paragraph);
    } else {
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }
}

/// Partition input into parts of at most `max_length` runes.
///
/// Paragraphs (blank-line delimited) are packed greedily; fenced code
/// blocks are kept whole where possible and otherwise handed to the
/// code-aware sub-splitter. The only outputs allowed to exceed the limit
/// are single indivisible units the sub-splitters cannot reduce.
#[must_use]
pub fn break_long_text(input: &str, max_length: usize) -> Vec<String> {
    let max_length = if max_length == 0 {
        TELEGRAM_MAX_LENGTH
    } else {
        max_length
    };
    let effective = if max_length > SAFETY_MARGIN {
        max_length - SAFETY_MARGIN
    } else {
        max_length
    };

    if rune_len(input) <= effective {
        return vec![input.to_string()];
    }

    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut code_buffer: Vec<&str> = Vec::new();
    let mut in_code = false;

    let emit_code = |unit: String, parts: &mut Vec<String>| {
        if rune_len(&unit) <= effective {
            parts.push(unit);
        } else {
            parts.extend(split_code_block(&unit, effective));
        }
    };

    for paragraph in input.split("\n\n") {
        if in_code {
            code_buffer.push(paragraph);
            if fence_lines(paragraph) % 2 == 1 {
                in_code = false;
                let unit = finish_code_unit(&code_buffer);
                code_buffer.clear();
                flush_current(&mut current, &mut parts);
                emit_code(unit, &mut parts);
            }
            continue;
        }

        if is_code_paragraph(paragraph) {
            flush_current(&mut current, &mut parts);
            emit_code(paragraph.to_string(), &mut parts);
            continue;
        }

        if fence_lines(paragraph) % 2 == 1 {
            // The paragraph's last fence opens a block; text before it is
            // ordinary prose.
            let (head, tail) = paragraph.split_at(trailing_fence_offset(paragraph));
            let head = head.trim_end();
            if !head.is_empty() {
                pack_plain(head, effective, &mut current, &mut parts);
            }
            code_buffer.push(tail);
            in_code = true;
            continue;
        }

        pack_plain(paragraph, effective, &mut current, &mut parts);
    }

    if !code_buffer.is_empty() {
        let unit = finish_code_unit(&code_buffer);
        flush_current(&mut current, &mut parts);
        emit_code(unit, &mut parts);
    }
    flush_current(&mut current, &mut parts);

    debug!(parts = parts.len(), "split input");
    parts
}
