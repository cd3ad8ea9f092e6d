//! # Alphabet IO
//!
//! ## Config Format
//!
//! Line-oriented text; see [`config`].
//!
//! ## Binary Format
//!
//! Compact little-endian ``(label, token)`` records; see [`binary`].
//!
//! ## Loading An Alphabet
//!
//! ```rust,no_run
//! use ctc_alphabet::{
//!     alphabet::Alphabet,
//!     io::{alphabet_binary_bytes, load_alphabet_config_path},
//! };
//!
//! fn example() -> ctc_alphabet::ACResult<Vec<u8>> {
//!     let alphabet: Alphabet<u32> = Alphabet::new(load_alphabet_config_path("alphabet.txt")?);
//!     alphabet_binary_bytes(alphabet.vocab())
//! }
//! ```

pub mod binary;
pub mod byte_cursor;
pub mod config;
pub mod line_reader;

#[doc(inline)]
pub use binary::*;
#[doc(inline)]
pub use byte_cursor::ByteCursor;
#[doc(inline)]
pub use config::*;
#[doc(inline)]
pub use line_reader::LineReader;
