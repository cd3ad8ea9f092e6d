//! # Byte Token Splitter

use crate::{splitters::TokenSplitter, types::LabelType, vocab::LabelVocab};

/// Splits text into single-byte tokens.
///
/// Every token and every text is reported encodable, regardless of the
/// vocab; encoding a byte the vocab lacks still fails with
/// [`AlphabetError::UnknownToken`](crate::errors::AlphabetError::UnknownToken).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteSplitter;

impl ByteSplitter {
    /// Split arbitrary bytes, valid UTF-8 or not, into single-byte tokens.
    pub fn split_bytes<'a>(
        &self,
        bytes: &'a [u8],
    ) -> impl Iterator<Item = &'a [u8]> + 'a {
        bytes.chunks(1)
    }
}

impl TokenSplitter for ByteSplitter {
    fn split_tokens<'a>(
        &self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a [u8]> + 'a {
        text.as_bytes().chunks(1)
    }

    fn can_encode_token<L: LabelType>(
        &self,
        _vocab: &LabelVocab<L>,
        _token: &[u8],
    ) -> bool {
        true
    }

    fn can_encode<L: LabelType>(
        &self,
        _vocab: &LabelVocab<L>,
        _text: &str,
    ) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        let text = "a\u{e9}";
        let tokens: Vec<&[u8]> = ByteSplitter.split_tokens(text).collect();
        assert_eq!(tokens, vec![&b"a"[..], &[0xc3_u8][..], &[0xa9_u8][..]]);
    }

    #[test]
    fn test_split_bytes() {
        let tokens: Vec<&[u8]> = ByteSplitter.split_bytes(&[0xff, b'a']).collect();
        assert_eq!(tokens, vec![&[0xff_u8][..], &b"a"[..]]);
        assert_eq!(ByteSplitter.split_bytes(&[]).count(), 0);
    }

    #[test]
    fn test_always_encodable() {
        let vocab: LabelVocab<u32> = LabelVocab::default();
        assert!(ByteSplitter.can_encode_token(&vocab, b"zz"));
        assert!(ByteSplitter.can_encode(&vocab, "anything \u{1f600}"));
    }
}
