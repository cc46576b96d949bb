//! Table rendering integration tests.

use mdtelegram::{Config, convert_text, render_table};
use rstest::rstest;

#[rstest]
fn unaligned_table_renders_bullet_rows() {
    let config = Config::new().with_table_alignment(false);
    let out = convert_text("| A | B |\n|---|---|\n| 1 | 2 |", &config).expect("conversion");
    assert_eq!(out, "\\• A \\| B\n\\• 1 \\| 2");
}

#[rstest]
fn aligned_table_pads_columns() {
    let out =
        convert_text("| A | B |\n|---|---|\n| 1 | 2 |", &Config::new()).expect("conversion");
    assert_eq!(out, "\\•  A     \\| B\n\\•  1     \\| 2");
}

#[rstest]
fn separator_hints_drive_alignment() {
    let lines = vec!["| aa | bb |", "| ---: | :---: |", "| c | d |"];
    assert_eq!(
        render_table(&lines, true, false),
        "\\•     aa \\|  bb\n\\•      c \\|   d"
    );
}

#[rstest]
fn ignoring_separators_leaves_columns_left_aligned() {
    let lines = vec!["| aa | bb |", "| ---: | :---: |", "| c | d |"];
    assert_eq!(
        render_table(&lines, true, true),
        "\\•  aa    \\| bb\n\\•  c     \\| d"
    );
}

#[rstest]
fn cell_formatting_is_translated_and_digits_stay_bare() {
    let out = convert_text("| **sum** | 42 |", &Config::new().with_table_alignment(false))
        .expect("conversion");
    assert_eq!(out, "\\• *sum* \\| 42");
}

#[rstest]
fn table_between_paragraphs_keeps_block_spacing() {
    let config = Config::new().with_table_alignment(false);
    let out = convert_text("before\n\n| a | b |\n\nafter", &config).expect("conversion");
    assert_eq!(out, "before\n\n\\• a \\| b\n\nafter");
}
