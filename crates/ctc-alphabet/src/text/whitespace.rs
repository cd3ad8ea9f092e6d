//! # Whitespace Classification
//!
//! The space label is assigned to a config line holding exactly one
//! whitespace codepoint. Whitespace here is the general categories
//! ``Zs``, ``Zl``, ``Zp``, plus the ASCII control spaces ``U+0009..=U+000D``
//! and ``U+0085``.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Is `c` a whitespace codepoint?
pub fn is_space_char(c: char) -> bool {
    match c {
        '\u{0009}'..='\u{000D}' | '\u{0085}' => true,
        _ => matches!(
            get_general_category(c),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        ),
    }
}

/// Is `token` exactly one codepoint, and is that codepoint whitespace?
///
/// Tokens which are not valid UTF-8 are never whitespace.
pub fn is_single_space_codepoint(token: &[u8]) -> bool {
    let Ok(text) = core::str::from_utf8(token) else {
        return false;
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_space_char(c),
        _ => false,
    }
}
