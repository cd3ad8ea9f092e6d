//! # Error Types

/// Errors from alphabet operations.
#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    /// The config or binary source could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A binary buffer ended before a field could be read.
    #[error(
        "truncated alphabet buffer: {field} at offset {offset} needs {needed} bytes, {available} available"
    )]
    Truncated {
        /// The field being read.
        field: &'static str,

        /// The buffer offset of the field.
        offset: usize,

        /// The number of bytes the field needs.
        needed: usize,

        /// The number of bytes left in the buffer.
        available: usize,
    },

    /// A token is not present in the alphabet.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),

    /// A label is not present in the alphabet.
    #[error("unknown label: {0}")]
    UnknownLabel(u64),

    /// A label does not fit the label type, or the 16-bit wire field.
    #[error("label {label} out of range")]
    LabelOutOfRange {
        /// The offending label value.
        label: u64,
    },

    /// A token is too long for the 16-bit wire length field.
    #[error("token length ({len}) exceeds the 16-bit length field")]
    TokenTooLong {
        /// The token length in bytes.
        len: usize,
    },

    /// The alphabet size does not fit the 16-bit wire count field.
    #[error("alphabet size ({size}) exceeds the 16-bit count field")]
    SizeOverflow {
        /// The alphabet size.
        size: usize,
    },

    /// The alphabet cannot be written in the line config format.
    #[error("{0}")]
    Unrepresentable(String),
}

impl AlphabetError {
    /// Build an [`AlphabetError::UnknownToken`] from raw token bytes.
    pub fn unknown_token(token: &[u8]) -> Self {
        Self::UnknownToken(String::from_utf8_lossy(token).into_owned())
    }

    /// Is this an unknown token or unknown label error?
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::UnknownToken(_) | Self::UnknownLabel(_))
    }
}

/// Result type for alphabet operations.
pub type ACResult<T> = core::result::Result<T, AlphabetError>;
