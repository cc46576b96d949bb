//! Block tokenizer.
//!
//! Scans input line by line and groups contiguous lines of the same
//! semantic class into [`Block`]s. Classification priority is fixed:
//! fence, table row, heading, list item, blockquote, plain text.

use crate::patterns;

/// Semantic classification of a block. The set is closed; blocks never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Code,
    Table,
    Title,
    List,
    Quote,
}

/// A maximal contiguous run of input lines sharing one classification.
///
/// `content` is newline-joined and whitespace-trimmed, except for `Code`
/// blocks which keep their fence lines verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
}

fn flush(blocks: &mut Vec<Block>, buffer: &mut Vec<&str>, kind: &mut BlockKind) {
    if buffer.is_empty() {
        return;
    }
    let joined = buffer.join("\n");
    let content = if *kind == BlockKind::Code {
        joined
    } else {
        joined.trim().to_string()
    };
    if !content.is_empty() {
        blocks.push(Block {
            kind: *kind,
            content,
        });
    }
    buffer.clear();
    *kind = BlockKind::Text;
}

/// Tokenize input into an ordered sequence of blocks.
///
/// Inside a fenced code block every line is swallowed verbatim until the
/// closing fence. A fence left open at end of input closes implicitly and
/// the buffered lines still form a `Code` block.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Block> {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut blocks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut kind = BlockKind::Text;
    let mut in_code = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if patterns::is_fence(line) {
            if in_code {
                buffer.push(line);
                flush(&mut blocks, &mut buffer, &mut kind);
                in_code = false;
            } else {
                flush(&mut blocks, &mut buffer, &mut kind);
                kind = BlockKind::Code;
                buffer.push(line);
                in_code = true;
            }
            i += 1;
            continue;
        }

        if in_code {
            buffer.push(line);
            i += 1;
            continue;
        }

        if patterns::is_table_row(line) {
            flush(&mut blocks, &mut buffer, &mut kind);
            let mut table = vec![line];
            while i + 1 < lines.len() && patterns::is_table_row(lines[i + 1]) {
                i += 1;
                table.push(lines[i]);
            }
            blocks.push(Block {
                kind: BlockKind::Table,
                content: table.join("\n"),
            });
            i += 1;
            continue;
        }

        if patterns::heading(line).is_some() {
            flush(&mut blocks, &mut buffer, &mut kind);
            blocks.push(Block {
                kind: BlockKind::Title,
                content: line.trim().to_string(),
            });
            i += 1;
            continue;
        }

        if patterns::list_item(line).is_some() || patterns::ordered_item(line).is_some() {
            if kind != BlockKind::List {
                flush(&mut blocks, &mut buffer, &mut kind);
                kind = BlockKind::List;
            }
            buffer.push(line);
            i += 1;
            continue;
        }

        if patterns::blockquote(line).is_some() {
            if kind != BlockKind::Quote {
                flush(&mut blocks, &mut buffer, &mut kind);
                kind = BlockKind::Quote;
            }
            buffer.push(line);
            i += 1;
            continue;
        }

        if line.trim().is_empty() && kind != BlockKind::Text {
            flush(&mut blocks, &mut buffer, &mut kind);
        }

        buffer.push(line);
        i += 1;
    }

    flush(&mut blocks, &mut buffer, &mut kind);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<BlockKind> {
        tokenize(input).into_iter().map(|b| b.kind).collect()
    }

    #[test]
    fn plain_text_is_one_block() {
        let blocks = tokenize("hello\nworld");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Text);
        assert_eq!(blocks[0].content, "hello\nworld");
    }

    #[test]
    fn headings_never_merge_with_neighbours() {
        assert_eq!(
            kinds("text\n# One\n## Two\nmore"),
            vec![
                BlockKind::Text,
                BlockKind::Title,
                BlockKind::Title,
                BlockKind::Text,
            ]
        );
    }

    #[test]
    fn mixed_list_markers_accumulate() {
        let blocks = tokenize("- a\n* b\n1. c");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::List);
    }

    #[test]
    fn code_fence_swallows_classifiable_lines() {
        let blocks = tokenize("```\n# not a heading\n- not a list\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Code);
        assert_eq!(blocks[0].content, "```\n# not a heading\n- not a list\n```");
    }

    #[test]
    fn unterminated_fence_closes_at_end_of_scan() {
        let blocks = tokenize("text\n\n```rust\nlet x = 1;");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::Code);
        assert_eq!(blocks[1].content, "```rust\nlet x = 1;");
    }
}
