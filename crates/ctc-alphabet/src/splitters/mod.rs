//! # Token Splitters
//!
//! A [`TokenSplitter`] is the tokenization strategy of an
//! [`Alphabet`](crate::alphabet::Alphabet):
//! * [`CodepointSplitter`] - one token per Unicode codepoint; encodability
//!   is table membership.
//! * [`ByteSplitter`] - one token per raw byte; everything is encodable.

pub mod byte_splitter;
pub mod codepoint_splitter;
pub mod token_splitter;

#[doc(inline)]
pub use byte_splitter::ByteSplitter;
#[doc(inline)]
pub use codepoint_splitter::CodepointSplitter;
#[doc(inline)]
pub use token_splitter::TokenSplitter;
