//! # `ctc-alphabet` Label Alphabets
//!
//! A bidirectional mapping between text tokens and dense integer labels,
//! used as the symbol table of a sequence decoder.
//!
//! See:
//! * [`alphabet`] to encode text into labels, and decode labels into text.
//! * [`io`] to read and write the config and binary alphabet formats.
//! * [`vocab`] for the underlying label/token bijection.
//! * [`splitters`] for the codepoint and byte tokenization strategies.
//!
//! ## Loading An Alphabet
//!
//! ```rust,no_run
//! use ctc_alphabet::alphabet::{Alphabet, ByteAlphabet, LabelCodec};
//!
//! fn example() -> ctc_alphabet::ACResult<()> {
//!     type L = u32;
//!
//!     let alphabet: Alphabet<L> = Alphabet::from_config_path("alphabet.txt")?;
//!     let labels = alphabet.encode("hello world")?;
//!     assert_eq!(alphabet.decode(&labels)?, "hello world");
//!
//!     let buf = alphabet.serialize()?;
//!     let bytes: ByteAlphabet<L> = ByteAlphabet::from_buffer(&buf)?;
//!     assert!(bytes.can_encode("anything"));
//!
//!     #[cfg(feature = "rayon")]
//!     {
//!         let codec = ctc_alphabet::rayon::ParallelRayonCodec::new(alphabet);
//!         let batch = codec.try_encode_batch(&["hello", "world"])?;
//!         assert_eq!(batch.len(), 2);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod alphabet;
pub mod errors;
pub mod io;
pub mod splitters;
pub mod text;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use alphabet::{Alphabet, ByteAlphabet, LabelCodec};
#[doc(inline)]
pub use errors::{ACResult, AlphabetError};
#[doc(inline)]
pub use vocab::LabelVocab;
