//! # Alphabets
//!
//! An [`Alphabet`] pairs a [`LabelVocab`](crate::vocab::LabelVocab) with a
//! [`TokenSplitter`](crate::splitters::TokenSplitter) strategy:
//! * [`Alphabet<L>`] - codepoint tokenization.
//! * [`ByteAlphabet<L>`] - raw byte tokenization.
//!
//! Both implement [`LabelCodec`], the interface a decoder consumes.
//!
//! ## Example
//!
//! ```rust
//! use ctc_alphabet::alphabet::Alphabet;
//!
//! let alphabet: Alphabet<u32> =
//!     Alphabet::from_config_reader("a\nb\n \n#comment\n\\#\n".as_bytes()).unwrap();
//!
//! assert_eq!(alphabet.size(), 4);
//! assert_eq!(alphabet.space_label(), Some(2));
//! assert_eq!(alphabet.encode("ab").unwrap(), vec![0, 1]);
//! assert_eq!(alphabet.decode(&[1, 0, 2]).unwrap(), "ba ");
//! ```

pub mod alphabet_table;
pub mod label_codec;

#[doc(inline)]
pub use alphabet_table::{Alphabet, ByteAlphabet};
#[doc(inline)]
pub use label_codec::LabelCodec;
