//! # String Utilities

/// Convert decoded bytes to a [`String`], replacing invalid UTF-8 sequences.
///
/// Reuses the allocation when `v` is already valid UTF-8.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    String::from_utf8(v)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
