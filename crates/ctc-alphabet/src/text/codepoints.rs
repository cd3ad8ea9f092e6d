//! # Codepoint Splitting

/// Split text into single-codepoint substrings.
///
/// Each item is exactly one Unicode scalar value (1-4 UTF-8 bytes),
/// in order, borrowed from `text`.
pub fn split_codepoints(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(move |(idx, c)| &text[idx..idx + c.len_utf8()])
}

/// The number of codepoints in `text`.
pub fn codepoint_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_codepoints() {
        let text = "a\u{e9}\u{4f60}\u{1f600}";
        let cps: Vec<&str> = split_codepoints(text).collect();
        assert_eq!(cps, vec!["a", "\u{e9}", "\u{4f60}", "\u{1f600}"]);
        assert_eq!(
            cps.iter().map(|c| c.len()).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(codepoint_count(text), 4);
        assert_eq!(cps.concat(), text);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_codepoints("").count(), 0);
        assert_eq!(codepoint_count(""), 0);
    }
}
