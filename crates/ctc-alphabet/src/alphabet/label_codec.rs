//! # Label Codec Trait

use crate::{
    alphabet::Alphabet,
    errors::ACResult,
    splitters::TokenSplitter,
    text::string_from_utf8_lossy,
    types::LabelType,
};

/// Text <-> label sequence conversion, as consumed by a decoder.
pub trait LabelCodec<L: LabelType>: Send + Sync {
    /// Can every token of `text` be encoded?
    fn can_encode(
        &self,
        text: &str,
    ) -> bool;

    /// Encode text into labels.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the labels, or an unknown token error.
    fn try_encode(
        &self,
        text: &str,
    ) -> ACResult<Vec<L>>;

    /// Decode labels into the concatenation of their tokens.
    ///
    /// ## Arguments
    /// * `labels` - The labels to decode.
    ///
    /// ## Returns
    /// A `Result` containing the bytes, or an unknown label error.
    fn try_decode_to_bytes(
        &self,
        labels: &[L],
    ) -> ACResult<Vec<u8>>;

    /// Decode labels into text.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_to_string(
        &self,
        labels: &[L],
    ) -> ACResult<String> {
        self.try_decode_to_bytes(labels)
            .map(string_from_utf8_lossy)
    }

    /// Encode a batch of texts.
    ///
    /// Fails on the first text with an unknown token.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> ACResult<Vec<Vec<L>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }

    /// Decode a batch of label sequences into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[L]],
    ) -> ACResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|labels| self.try_decode_to_bytes(labels))
            .collect()
    }

    /// Decode a batch of label sequences into text.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[L]],
    ) -> ACResult<Vec<String>> {
        batch
            .iter()
            .map(|labels| self.try_decode_to_string(labels))
            .collect()
    }
}

impl<L: LabelType, S: TokenSplitter> LabelCodec<L> for Alphabet<L, S> {
    fn can_encode(
        &self,
        text: &str,
    ) -> bool {
        Alphabet::can_encode(self, text)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> ACResult<Vec<L>> {
        self.encode(text)
    }

    fn try_decode_to_bytes(
        &self,
        labels: &[L],
    ) -> ACResult<Vec<u8>> {
        self.decode_to_bytes(labels)
    }
}
