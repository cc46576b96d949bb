//! Utility helpers shared across integration tests.

/// Build a `Vec<String>` from a list of string slices.
#[allow(unused_macros)]
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Rune count of a string, matching the splitter's length accounting.
#[allow(dead_code)]
pub fn rune_len(s: &str) -> usize {
    s.chars().count()
}

/// Assert that every part respects the length limit and that part indexes
/// are contiguous starting at 1.
#[allow(dead_code)]
pub fn assert_parts_well_formed(response: &mdtelegram::MessageResponse, limit: usize) {
    assert_eq!(response.total_parts, response.parts.len());
    for (i, part) in response.parts.iter().enumerate() {
        assert_eq!(part.part, i + 1);
        assert!(
            rune_len(&part.content) <= limit,
            "part {} exceeds limit: {} runes",
            part.part,
            rune_len(&part.content)
        );
    }
}
