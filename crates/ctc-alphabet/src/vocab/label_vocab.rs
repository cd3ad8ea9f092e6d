//! # Label/Token Bijection Table

use core::fmt::Debug;

use crate::{
    errors::{ACResult, AlphabetError},
    text::is_single_space_codepoint,
    types::{LabelType, Token, hash_map_with_capacity},
    vocab::{LabelTokenMap, TokenLabelMap},
};

/// ``{ L <-> Vec<u8> }`` Label/Token Bijection Table.
///
/// Every label decodes to its token. A token repeated under several
/// labels encodes to the most recently bound of them; every token which
/// encodes to a label also decodes back from it.
///
/// `size` is the declared alphabet size. For tables built from a
/// config it equals the number of assigned labels; for tables read
/// from a binary buffer it is the header count, which a crafted buffer
/// can make disagree with [`LabelVocab::len`].
#[derive(Clone, PartialEq)]
pub struct LabelVocab<L: LabelType> {
    label_tokens: LabelTokenMap<L>,
    token_labels: TokenLabelMap<L>,
    size: usize,
    space_label: Option<L>,
}

impl<L: LabelType> Debug for LabelVocab<L> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("LabelVocab")
            .field("size", &self.size)
            .field("space_label", &self.space_label)
            .field("entries", &self.len())
            .finish()
    }
}

impl<L: LabelType> Default for LabelVocab<L> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<L: LabelType> LabelVocab<L> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            label_tokens: hash_map_with_capacity(capacity),
            token_labels: hash_map_with_capacity(capacity),
            size: 0,
            space_label: None,
        }
    }

    /// Build a vocab assigning sequential labels, from 0, to `tokens`.
    ///
    /// A token which is exactly one whitespace codepoint becomes the
    /// space label; if several are present, the last one wins.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in label order.
    ///
    /// ## Returns
    /// A `Result` containing the new vocab, or
    /// [`AlphabetError::LabelOutOfRange`] if a label does not fit `L`.
    pub fn from_token_sequence<I, B>(tokens: I) -> ACResult<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<Token>,
    {
        let tokens = tokens.into_iter();
        let mut vocab = Self::with_capacity(tokens.size_hint().0);
        for token in tokens {
            vocab.push_token(token.into())?;
        }
        Ok(vocab)
    }

    /// Build the 256-entry byte identity vocab: byte `b` <-> label `b`.
    ///
    /// The space label is the label of `0x20`.
    pub fn byte_identity() -> ACResult<Self> {
        Self::from_token_sequence((0..=u8::MAX).map(|b| vec![b]))
    }

    /// Assign the next sequential label to `token`.
    pub(crate) fn push_token(
        &mut self,
        token: Token,
    ) -> ACResult<L> {
        let label = L::from_usize(self.size).ok_or(AlphabetError::LabelOutOfRange {
            label: self.size as u64,
        })?;
        if is_single_space_codepoint(&token) {
            self.space_label = Some(label);
        }
        self.insert(label, token);
        self.size += 1;
        Ok(label)
    }

    /// Bind `label` and `token` in both directions.
    ///
    /// A label already bound to another token is re-bound, and its old
    /// token no longer encodes to it. A token already bound to another
    /// label now encodes to `label`; the other label still decodes to it.
    ///
    /// ## Returns
    /// `true` if an earlier binding of either side was replaced.
    pub(crate) fn insert(
        &mut self,
        label: L,
        token: Token,
    ) -> bool {
        let mut replaced = false;
        if let Some(old_token) = self.label_tokens.remove(&label) {
            if old_token != token && self.token_labels.get(&old_token) == Some(&label) {
                self.token_labels.remove(&old_token);
            }
            replaced = old_token != token;
        }
        if let Some(old_label) = self.token_labels.get(&token).copied()
            && old_label != label
        {
            log::warn!(
                "alphabet token {:?} repeated: label {old_label} decodes to it, encoding yields {label}",
                String::from_utf8_lossy(&token)
            );
            replaced = true;
        }

        self.label_tokens.insert(label, token.clone());
        self.token_labels.insert(token, label);
        replaced
    }

    pub(crate) fn set_size(
        &mut self,
        size: usize,
    ) {
        self.size = size;
    }

    pub(crate) fn set_space_label(
        &mut self,
        label: L,
    ) {
        self.space_label = Some(label);
    }

    /// The declared alphabet size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of label/token entries present.
    pub fn len(&self) -> usize {
        self.label_tokens.len()
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.label_tokens.is_empty()
    }

    /// The label of the whitespace token, if one was defined.
    pub fn space_label(&self) -> Option<L> {
        self.space_label
    }

    /// Look up the label for a token.
    pub fn lookup_label(
        &self,
        token: &[u8],
    ) -> Option<L> {
        self.token_labels.get(token).copied()
    }

    /// Look up the token for a label.
    pub fn lookup_token(
        &self,
        label: L,
    ) -> Option<&[u8]> {
        self.label_tokens.get(&label).map(Vec::as_slice)
    }

    /// Is `token` present?
    pub fn contains_token(
        &self,
        token: &[u8],
    ) -> bool {
        self.token_labels.contains_key(token)
    }

    /// Is `label` present?
    pub fn contains_label(
        &self,
        label: L,
    ) -> bool {
        self.label_tokens.contains_key(&label)
    }

    /// The highest label present, if any.
    pub fn max_label(&self) -> Option<L> {
        self.label_tokens.keys().max().copied()
    }

    /// All ``(label, token)`` entries, sorted by label.
    pub fn sorted_entries(&self) -> Vec<(L, &[u8])> {
        let mut entries: Vec<(L, &[u8])> = self
            .label_tokens
            .iter()
            .map(|(&label, token)| (label, token.as_slice()))
            .collect();
        entries.sort_by_key(|&(label, _)| label);
        entries
    }

    /// Are the labels exactly ``0..len()``?
    pub fn is_dense(&self) -> bool {
        self.sorted_entries()
            .iter()
            .enumerate()
            .all(|(idx, &(label, _))| label.to_usize() == Some(idx))
    }
}
