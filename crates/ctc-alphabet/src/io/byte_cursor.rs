//! # Bounded Byte Cursor

use crate::errors::{ACResult, AlphabetError};

/// A forward-only reader over a borrowed byte slice.
///
/// Every read is checked against the remaining length; a short read
/// fails with [`AlphabetError::Truncated`] and consumes nothing.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// The current read offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Returns `true` if every byte has been read.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read `len` raw bytes.
    ///
    /// ## Arguments
    /// * `len` - The number of bytes.
    /// * `field` - The field name, for error reporting.
    pub fn read_bytes(
        &mut self,
        len: usize,
        field: &'static str,
    ) -> ACResult<&'a [u8]> {
        let available = self.remaining();
        if available < len {
            return Err(AlphabetError::Truncated {
                field,
                offset: self.offset,
                needed: len,
                available,
            });
        }
        let bytes = &self.buf[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Read a little-endian `u16`.
    pub fn read_u16_le(
        &mut self,
        field: &'static str,
    ) -> ACResult<u16> {
        let bytes = self.read_bytes(2, field)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads() {
        let data = [0x34, 0x12, b'h', b'i', 0xff];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u16_le("count").unwrap(), 0x1234);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.read_bytes(2, "token").unwrap(), b"hi");
        assert_eq!(cursor.remaining(), 1);
        assert!(!cursor.is_exhausted());

        assert_eq!(cursor.read_bytes(0, "token").unwrap(), b"");
        assert_eq!(cursor.read_bytes(1, "token").unwrap(), &[0xff]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_short_read() {
        let data = [0x01];
        let mut cursor = ByteCursor::new(&data);

        match cursor.read_u16_le("label") {
            Err(AlphabetError::Truncated {
                field,
                offset,
                needed,
                available,
            }) => {
                assert_eq!(field, "label");
                assert_eq!(offset, 0);
                assert_eq!(needed, 2);
                assert_eq!(available, 1);
            }
            other => panic!("expected truncation, got {:?}", other),
        }

        // Failed reads consume nothing.
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.read_bytes(1, "token").unwrap(), &[0x01]);
    }
}
