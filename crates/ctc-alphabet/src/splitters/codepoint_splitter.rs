//! # Codepoint Token Splitter

use crate::{
    splitters::TokenSplitter,
    text::split_codepoints,
    types::LabelType,
    vocab::LabelVocab,
};

/// Splits text into single-codepoint tokens.
///
/// A token is encodable iff it is present in the vocab.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodepointSplitter;

impl TokenSplitter for CodepointSplitter {
    fn split_tokens<'a>(
        &self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a [u8]> + 'a {
        split_codepoints(text).map(str::as_bytes)
    }

    fn can_encode_token<L: LabelType>(
        &self,
        vocab: &LabelVocab<L>,
        token: &[u8],
    ) -> bool {
        vocab.contains_token(token)
    }
}
