//! Block renderer.
//!
//! [`render_block`] is a pure function of a block and the configuration,
//! safe to fan out across worker threads. Every path consults the shared
//! escaping policy in [`crate::escape`].

use tracing::debug;

use crate::{
    config::{Config, SafetyLevel},
    escape::{escape_all, escape_non_format},
    inline::translate_inline,
    patterns,
    table::render_table,
    tokenize::{Block, BlockKind},
};

/// Render a single block into the target dialect.
#[must_use]
pub fn render_block(block: &Block, config: &Config) -> String {
    if config.enable_debug_logs {
        debug!(kind = ?block.kind, len = block.content.len(), "rendering block");
    }
    match block.kind {
        BlockKind::Code => render_code(&block.content, config.safety_level),
        BlockKind::Text => render_text(&block.content, config.safety_level),
        BlockKind::Table => {
            let lines: Vec<&str> = block.content.split('\n').collect();
            render_table(
                &lines,
                config.align_table_columns,
                config.ignore_table_separator,
            )
        }
        BlockKind::Title => render_title(&block.content, config.safety_level),
        BlockKind::List => render_list(&block.content, config.safety_level),
        BlockKind::Quote => render_quote(&block.content, config.safety_level),
    }
}

/// Pass code through with fence normalization; strict mode escapes the
/// whole block, fences included.
fn render_code(content: &str, level: SafetyLevel) -> String {
    if level == SafetyLevel::Strict {
        return escape_all(content);
    }
    let lines: Vec<&str> = content.split('\n').collect();
    let closed = lines.len() >= 2 && lines.last().is_some_and(|l| patterns::is_fence(l));
    if closed {
        content.to_string()
    } else {
        format!("{content}\n{}", patterns::FENCE)
    }
}

fn render_text(content: &str, level: SafetyLevel) -> String {
    match level {
        SafetyLevel::Strict => escape_all(content),
        SafetyLevel::None => process_links(content, level),
        SafetyLevel::Basic => {
            // Embedded fence markers in a Text block mean the tokenizer saw
            // them mid-line; treat the odd segments as opaque code.
            let segments: Vec<String> = content
                .split(patterns::FENCE)
                .enumerate()
                .map(|(i, segment)| {
                    if i % 2 == 1 {
                        escape_all(segment)
                    } else {
                        process_links(segment, level)
                    }
                })
                .collect();
            segments.join(patterns::FENCE)
        }
    }
}

/// Translate and escape text around links, leaving URLs untouched and link
/// labels translated without their structural brackets being escaped.
fn process_links(text: &str, level: SafetyLevel) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in patterns::LINK_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&process_span(&text[last..m.start()], level));
        let label = translate_inline(caps.get(1).map_or("", |g| g.as_str()));
        let label = if level == SafetyLevel::None {
            label
        } else {
            escape_non_format(&label)
        };
        out.push('[');
        out.push_str(&label);
        out.push_str("](");
        out.push_str(caps.get(2).map_or("", |g| g.as_str()));
        out.push(')');
        last = m.end();
    }
    out.push_str(&process_span(&text[last..], level));
    out
}

/// Translate a link-free span, then escape it with inline-code contents
/// escaped fully inside their preserved backticks.
fn process_span(span: &str, level: SafetyLevel) -> String {
    let translated = translate_inline(span);
    if level == SafetyLevel::None {
        return translated;
    }
    let mut out = String::with_capacity(translated.len());
    let mut last = 0;
    for caps in patterns::INLINE_CODE_RE.captures_iter(&translated) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&escape_non_format(&translated[last..m.start()]));
        out.push('`');
        out.push_str(&escape_all(caps.get(1).map_or("", |g| g.as_str())));
        out.push('`');
        last = m.end();
    }
    out.push_str(&escape_non_format(&translated[last..]));
    out
}

/// Map heading levels 1-2 to bold and 3-6 to italic.
fn render_title(content: &str, level: SafetyLevel) -> String {
    if level == SafetyLevel::Strict {
        return escape_all(content);
    }
    let Some((depth, text)) = patterns::heading(content) else {
        return render_text(content, level);
    };
    let title = translate_inline(text.trim());
    let title = if level == SafetyLevel::None {
        title
    } else {
        escape_non_format(&title)
    };
    if depth <= 2 {
        format!("*{title}*")
    } else {
        format!("_{title}_")
    }
}

fn render_item(item: &str, level: SafetyLevel) -> String {
    let translated = translate_inline(item);
    if level == SafetyLevel::None {
        translated
    } else {
        escape_non_format(&translated)
    }
}

/// Replace list markers with a bullet glyph or a renumbered counter.
///
/// The counter restarts at 1 for every contiguous run of ordered items.
/// Blank lines and interleaved plain lines are preserved with spacing that
/// keeps runs visually separate.
fn render_list(content: &str, level: SafetyLevel) -> String {
    if level == SafetyLevel::Strict {
        return escape_all(content);
    }

    let mut out = String::new();
    let mut counter = 1usize;
    let mut first = true;
    let mut last_was_item = false;

    for line in content.split('\n') {
        if line.trim().is_empty() {
            if last_was_item {
                out.push_str("\n\n");
                last_was_item = false;
            } else {
                out.push('\n');
            }
            first = true;
            counter = 1;
            continue;
        }

        if let Some(item) = patterns::list_item(line) {
            if !first && last_was_item {
                out.push('\n');
            }
            out.push_str("• ");
            out.push_str(&render_item(item, level));
            first = false;
            last_was_item = true;
        } else if let Some(item) = patterns::ordered_item(line) {
            if !first && last_was_item {
                out.push('\n');
            }
            if level == SafetyLevel::None {
                out.push_str(&format!("{counter}. "));
            } else {
                out.push_str(&format!("{counter}\\. "));
            }
            out.push_str(&render_item(item, level));
            counter += 1;
            first = false;
            last_was_item = true;
        } else {
            if last_was_item {
                out.push_str("\n\n");
            } else if !first {
                out.push('\n');
            }
            if level == SafetyLevel::Basic {
                out.push_str(&escape_non_format(line));
            } else {
                out.push_str(line);
            }
            counter = 1;
            first = false;
            last_was_item = false;
        }
    }

    out.trim().to_string()
}

/// Keep the `>` marker and translate the quoted text.
fn render_quote(content: &str, level: SafetyLevel) -> String {
    if level == SafetyLevel::Strict {
        return escape_all(content);
    }
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            patterns::blockquote(line).map_or_else(
                || line.to_string(),
                |quoted| format!("> {}", render_item(quoted, level)),
            )
        })
        .collect();
    lines.join("\n")
}
