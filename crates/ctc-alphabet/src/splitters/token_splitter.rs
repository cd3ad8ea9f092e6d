//! # Token Splitter Trait

use core::fmt::Debug;

use crate::{types::LabelType, vocab::LabelVocab};

/// Tokenization strategy for an alphabet.
pub trait TokenSplitter: Debug + Default + Clone + PartialEq + Send + Sync {
    /// Split text into tokens, in order.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// An iterator over token byte slices borrowed from `text`.
    fn split_tokens<'a>(
        &self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a [u8]> + 'a;

    /// Can this token be encoded with `vocab`?
    fn can_encode_token<L: LabelType>(
        &self,
        vocab: &LabelVocab<L>,
        token: &[u8],
    ) -> bool;

    /// Can every token of `text` be encoded with `vocab`?
    fn can_encode<L: LabelType>(
        &self,
        vocab: &LabelVocab<L>,
        text: &str,
    ) -> bool {
        self.split_tokens(text)
            .all(|token| self.can_encode_token(vocab, token))
    }
}
