//! # Text Utilities
//!
//! Codepoint splitting, whitespace classification, and string conversion.

pub mod codepoints;
pub mod strings;
pub mod whitespace;

#[doc(inline)]
pub use codepoints::{codepoint_count, split_codepoints};
#[doc(inline)]
pub use strings::string_from_utf8_lossy;
#[doc(inline)]
pub use whitespace::{is_single_space_codepoint, is_space_char};
