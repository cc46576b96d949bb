//! Table rendering.
//!
//! Tables become bullet-prefixed rows joined by escaped pipes, optionally
//! padded so every column lines up. Alignment hints come from the
//! separator row (`:---`, `:---:`, `---:`) unless separator parsing is
//! disabled.

use crate::{escape::escape_non_format, inline::translate_inline, patterns};

/// Per-column alignment parsed from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Split a table row into cells, honouring `\|` escapes inside cells.
fn split_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if chars.peek() == Some(&'|') {
                chars.next();
                current.push('|');
                continue;
            }
            current.push(ch);
            continue;
        }
        if ch == '|' {
            cells.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    cells.push(current.trim().to_string());
    cells
}

/// Parse alignment hints from a separator row.
fn parse_alignment(line: &str) -> Vec<Alignment> {
    let trimmed = line.trim().trim_matches('|');
    trimmed
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            let left = cell.starts_with(':');
            let right = cell.ends_with(':');
            match (left, right) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                _ => Alignment::Left,
            }
        })
        .collect()
}

fn rune_len(s: &str) -> usize {
    s.chars().count()
}

/// Natural column widths as rune counts.
fn column_widths(rows: &[Vec<String>], max_cols: usize) -> Vec<usize> {
    let mut widths = vec![0usize; max_cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(rune_len(cell));
        }
    }
    widths
}

/// Pad a cell to `width` (floor 5) according to its alignment. Centering
/// puts the extra space on the right for odd remainders.
fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let width = width.max(5);
    let pad = width.saturating_sub(rune_len(cell));
    match alignment {
        Alignment::Center => {
            let left = pad / 2;
            let right = pad - left;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
        }
        Alignment::Right => format!("{}{cell}", " ".repeat(pad)),
        Alignment::Left => format!("{cell}{}", " ".repeat(pad)),
    }
}

/// Render a table block.
///
/// Rows are prefixed with an escaped bullet and joined with escaped pipes;
/// aligned mode pads cells and uses a double-space prefix, unaligned mode
/// a single space.
#[must_use]
pub fn render_table(lines: &[&str], align: bool, ignore_separators: bool) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut max_cols = 0;
    let mut alignments: Vec<Alignment> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if patterns::is_separator_row(line) {
            if !ignore_separators && i == 1 && i < lines.len() - 1 {
                alignments = parse_alignment(line);
            }
            continue;
        }
        let cells: Vec<String> = split_cells(line)
            .iter()
            .map(|cell| translate_inline(cell))
            .collect();
        if !cells.is_empty() {
            max_cols = max_cols.max(cells.len());
            rows.push(cells);
        }
    }

    alignments.resize(max_cols, Alignment::default());
    let widths = column_widths(&rows, max_cols);

    let prefix = if align { "\\•  " } else { "\\• " };
    let rendered: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = (0..max_cols)
                .map(|i| {
                    let cell = row.get(i).map_or("", String::as_str);
                    let cell = if align {
                        pad_cell(cell, widths[i], alignments[i])
                    } else {
                        cell.to_string()
                    };
                    escape_non_format(&cell)
                })
                .collect();
            format!("{prefix}{}", cells.join(" \\| "))
                .trim_end()
                .to_string()
        })
        .collect();

    rendered.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_rows_are_bullet_prefixed() {
        let lines = vec!["| A | B |", "|---|---|", "| 1 | 2 |"];
        assert_eq!(
            render_table(&lines, false, false),
            "\\• A \\| B\n\\• 1 \\| 2"
        );
    }

    #[test]
    fn aligned_rows_pad_to_floor_width() {
        let lines = vec!["| A | B |", "| 1 | 2 |"];
        // Both columns are one rune wide, so the floor of 5 applies.
        assert_eq!(
            render_table(&lines, true, false),
            "\\•  A     \\| B\n\\•  1     \\| 2"
        );
    }

    #[test]
    fn separator_alignment_hints_are_parsed() {
        assert_eq!(
            parse_alignment("| :--- | :---: | ---: |"),
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
    }

    #[test]
    fn center_padding_favours_the_right() {
        assert_eq!(pad_cell("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(pad_cell("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn escaped_pipe_stays_inside_a_cell() {
        assert_eq!(split_cells(r"| a \| b | c |"), vec!["a | b", "c"]);
    }

    #[test]
    fn cell_formatting_is_translated() {
        let lines = vec!["| **bold** | _it_ |"];
        assert_eq!(
            render_table(&lines, false, false),
            "\\• *bold* \\| _it_"
        );
    }

    #[test]
    fn ragged_rows_pad_with_empty_cells() {
        let lines = vec!["| a | b | c |", "| 1 |"];
        let out = render_table(&lines, false, false);
        assert_eq!(out, "\\• a \\| b \\| c\n\\• 1 \\|  \\|");
    }
}
