//! # Alphabet Table

use std::{io::BufRead, path::Path};

use crate::{
    errors::{ACResult, AlphabetError},
    io::{
        alphabet_binary_bytes,
        load_alphabet_binary_path,
        load_alphabet_config_path,
        read_alphabet_binary,
        read_alphabet_config,
    },
    splitters::{ByteSplitter, CodepointSplitter, TokenSplitter},
    text::string_from_utf8_lossy,
    types::LabelType,
    vocab::LabelVocab,
};

/// A label/token alphabet with a tokenization strategy.
///
/// Built once, from a config or a binary buffer; read-only afterward,
/// and safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet<L: LabelType, S: TokenSplitter = CodepointSplitter> {
    vocab: LabelVocab<L>,
    splitter: S,
}

/// An [`Alphabet`] which tokenizes text into raw bytes.
pub type ByteAlphabet<L> = Alphabet<L, ByteSplitter>;

impl<L: LabelType, S: TokenSplitter> From<LabelVocab<L>> for Alphabet<L, S> {
    fn from(vocab: LabelVocab<L>) -> Self {
        Self::new(vocab)
    }
}

impl<L: LabelType, S: TokenSplitter> AsRef<LabelVocab<L>> for Alphabet<L, S> {
    fn as_ref(&self) -> &LabelVocab<L> {
        &self.vocab
    }
}

impl<L: LabelType, S: TokenSplitter> Alphabet<L, S> {
    /// Wrap a [`LabelVocab`] with the default splitter.
    pub fn new(vocab: LabelVocab<L>) -> Self {
        Self::with_splitter(vocab, S::default())
    }

    /// Wrap a [`LabelVocab`] with a splitter.
    pub fn with_splitter(
        vocab: LabelVocab<L>,
        splitter: S,
    ) -> Self {
        Self { vocab, splitter }
    }

    /// Load an alphabet from a config file.
    ///
    /// ## Arguments
    /// * `path` - The config file path.
    ///
    /// ## Returns
    /// A `Result` containing the alphabet, or [`AlphabetError::Io`] if
    /// the file cannot be read.
    pub fn from_config_path<P: AsRef<Path>>(path: P) -> ACResult<Self> {
        Ok(Self::new(load_alphabet_config_path(path)?))
    }

    /// Read an alphabet from a config stream.
    ///
    /// See [`crate::io::config`] for the format.
    pub fn from_config_reader<R: BufRead>(reader: R) -> ACResult<Self> {
        Ok(Self::new(read_alphabet_config(reader)?))
    }

    /// Read an alphabet from a binary buffer.
    ///
    /// ## Arguments
    /// * `buf` - The serialized alphabet.
    ///
    /// ## Returns
    /// A `Result` containing the alphabet, or [`AlphabetError::Truncated`]
    /// if the buffer ends early.
    pub fn from_buffer(buf: &[u8]) -> ACResult<Self> {
        Ok(Self::new(read_alphabet_binary(buf)?))
    }

    /// Load an alphabet from a binary file.
    pub fn from_binary_path<P: AsRef<Path>>(path: P) -> ACResult<Self> {
        Ok(Self::new(load_alphabet_binary_path(path)?))
    }

    /// Serialize to the binary format.
    ///
    /// See [`crate::io::binary`] for the format.
    pub fn serialize(&self) -> ACResult<Vec<u8>> {
        alphabet_binary_bytes(&self.vocab)
    }

    /// Rebuild with a different tokenization strategy, over the same table.
    pub fn into_splitter<S2: TokenSplitter>(self) -> Alphabet<L, S2> {
        Alphabet::new(self.vocab)
    }

    /// The underlying [`LabelVocab`].
    pub fn vocab(&self) -> &LabelVocab<L> {
        &self.vocab
    }

    /// Unwrap the underlying [`LabelVocab`].
    pub fn into_vocab(self) -> LabelVocab<L> {
        self.vocab
    }

    /// The tokenization strategy.
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// The declared alphabet size.
    pub fn size(&self) -> usize {
        self.vocab.size()
    }

    /// The label of the whitespace token, if one was defined.
    pub fn space_label(&self) -> Option<L> {
        self.vocab.space_label()
    }

    /// Can this token be encoded?
    pub fn can_encode_token(
        &self,
        token: &[u8],
    ) -> bool {
        self.splitter.can_encode_token(&self.vocab, token)
    }

    /// Can every token of `text` be encoded?
    pub fn can_encode(
        &self,
        text: &str,
    ) -> bool {
        self.splitter.can_encode(&self.vocab, text)
    }

    /// Look up the label of a token.
    ///
    /// ## Returns
    /// A `Result` containing the label, or [`AlphabetError::UnknownToken`].
    pub fn encode_token(
        &self,
        token: &[u8],
    ) -> ACResult<L> {
        self.vocab
            .lookup_label(token)
            .ok_or_else(|| AlphabetError::unknown_token(token))
    }

    /// Look up the token of a label.
    ///
    /// ## Returns
    /// A `Result` containing the token bytes, or [`AlphabetError::UnknownLabel`].
    pub fn decode_label(
        &self,
        label: L,
    ) -> ACResult<&[u8]> {
        self.vocab
            .lookup_token(label)
            .ok_or_else(|| AlphabetError::UnknownLabel(label.to_u64().unwrap_or(u64::MAX)))
    }

    /// Encode text, appending labels to a target buffer.
    ///
    /// On error, `labels` may hold a partial encoding.
    pub fn encode_append(
        &self,
        text: &str,
        labels: &mut Vec<L>,
    ) -> ACResult<()> {
        for token in self.splitter.split_tokens(text) {
            labels.push(self.encode_token(token)?);
        }
        Ok(())
    }

    /// Encode text into one label per token.
    pub fn encode(
        &self,
        text: &str,
    ) -> ACResult<Vec<L>> {
        let mut labels = Vec::with_capacity(text.len());
        self.encode_append(text, &mut labels)?;
        Ok(labels)
    }

    /// Decode labels, appending token bytes to a target buffer.
    pub fn decode_append(
        &self,
        labels: &[L],
        buf: &mut Vec<u8>,
    ) -> ACResult<()> {
        for &label in labels {
            buf.extend_from_slice(self.decode_label(label)?);
        }
        Ok(())
    }

    /// Decode labels into the concatenation of their tokens.
    pub fn decode_to_bytes(
        &self,
        labels: &[L],
    ) -> ACResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(labels.len());
        self.decode_append(labels, &mut buf)?;
        Ok(buf)
    }

    /// Decode labels into text.
    ///
    /// Token bytes are concatenated before UTF-8 conversion, so byte-level
    /// labels re-assemble multi-byte codepoints; invalid sequences are
    /// replaced with ``U+FFFD``.
    pub fn decode(
        &self,
        labels: &[L],
    ) -> ACResult<String> {
        self.decode_to_bytes(labels).map(string_from_utf8_lossy)
    }
}

impl<L: LabelType> ByteAlphabet<L> {
    /// Encode raw bytes, which need not be valid UTF-8, appending labels
    /// to a target buffer.
    ///
    /// On error, `labels` may hold a partial encoding.
    pub fn encode_bytes_append(
        &self,
        bytes: &[u8],
        labels: &mut Vec<L>,
    ) -> ACResult<()> {
        for token in self.splitter.split_bytes(bytes) {
            labels.push(self.encode_token(token)?);
        }
        Ok(())
    }

    /// Encode raw bytes into one label per byte.
    ///
    /// ## Arguments
    /// * `bytes` - The content to encode; need not be valid UTF-8.
    ///
    /// ## Returns
    /// A `Result` containing the labels, or [`AlphabetError::UnknownToken`]
    /// for a byte missing from the table.
    pub fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> ACResult<Vec<L>> {
        let mut labels = Vec::with_capacity(bytes.len());
        self.encode_bytes_append(bytes, &mut labels)?;
        Ok(labels)
    }
}
