//! # Cross-Platform Line Reader

use std::io::{BufRead, ErrorKind};

/// A line reader accepting ``\n``, ``\r``, and ``\r\n`` terminators.
///
/// Unlike [`BufRead::lines`], a bare ``\r`` ends a line, and lines are
/// yielded as raw bytes without UTF-8 validation.
///
/// A stream ending exactly at a terminator yields no trailing empty line;
/// unterminated trailing data is yielded as a final line.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a [`BufRead`] stream.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next line into `line`, replacing its contents.
    ///
    /// ## Returns
    /// `Ok(false)` when the stream is exhausted; `Ok(true)` when a line,
    /// possibly empty, was read.
    pub fn read_line(
        &mut self,
        line: &mut Vec<u8>,
    ) -> std::io::Result<bool> {
        line.clear();
        loop {
            let (used, terminator) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(!line.is_empty());
                }
                match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(idx) => {
                        line.extend_from_slice(&buf[..idx]);
                        (idx + 1, Some(buf[idx]))
                    }
                    None => {
                        line.extend_from_slice(buf);
                        (buf.len(), None)
                    }
                }
            };
            self.reader.consume(used);

            match terminator {
                Some(b'\r') => {
                    self.skip_newline()?;
                    return Ok(true);
                }
                Some(_) => return Ok(true),
                None => {}
            }
        }
    }

    /// Read the next line.
    ///
    /// ## Returns
    /// `Ok(None)` when the stream is exhausted.
    pub fn next_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        Ok(self.read_line(&mut line)?.then_some(line))
    }

    /// Consume a ``\n`` directly following a ``\r``, if present.
    fn skip_newline(&mut self) -> std::io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    if buf.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
