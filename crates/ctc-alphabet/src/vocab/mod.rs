//! # Vocabulary
//!
//! The label/token bijection underlying every alphabet.
//!
//! * [`LabelVocab`] - ``{ L <-> Vec<u8> }``, plus the declared size and the space label.
//!
//! A [`LabelVocab`] is populated once, by [`crate::io`] config or binary readers,
//! or by [`LabelVocab::from_token_sequence`] / [`LabelVocab::byte_identity`];
//! it is read-only afterward.

pub mod label_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use label_vocab::LabelVocab;
#[doc(inline)]
pub use vocab_types::{LabelTokenMap, TokenLabelMap};
