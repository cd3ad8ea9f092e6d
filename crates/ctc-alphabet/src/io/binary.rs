//! # Alphabet Binary IO
//!
//! The binary format is little-endian, with no magic number or version:
//! ```terminaloutput
//! [count: u16]
//! count * {
//!     [label: u16]
//!     [token_length: u16]
//!     [token: token_length bytes]
//! }
//! ```
//!
//! Entries are written in label order, so logically identical alphabets
//! serialize to identical bytes. Readers accept any entry order.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{ACResult, AlphabetError},
    io::ByteCursor,
    text::is_single_space_codepoint,
    types::LabelType,
    vocab::LabelVocab,
};

/// Load a [`LabelVocab`] from an alphabet binary file.
///
/// ## Arguments
/// * `path` - the path to the binary file.
pub fn load_alphabet_binary_path<L, P>(path: P) -> ACResult<LabelVocab<L>>
where
    L: LabelType,
    P: AsRef<Path>,
{
    let buf = std::fs::read(path)?;
    read_alphabet_binary(&buf)
}

/// Read a [`LabelVocab`] from an alphabet binary buffer.
///
/// Every field is bounds-checked; a buffer which ends early fails with
/// [`AlphabetError::Truncated`]. Bytes after the last declared entry
/// are ignored.
///
/// The declared `count` becomes [`LabelVocab::size`], even when a crafted
/// buffer repeats labels (later entries displace earlier ones).
/// A token repeated under several labels encodes to the highest one,
/// matching a config which repeats a line.
///
/// ## Arguments
/// * `buf` - the serialized alphabet.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(buf)))]
pub fn read_alphabet_binary<L>(buf: &[u8]) -> ACResult<LabelVocab<L>>
where
    L: LabelType,
{
    let mut cursor = ByteCursor::new(buf);

    let count = cursor.read_u16_le("count")? as usize;
    let mut vocab = LabelVocab::with_capacity(count);
    vocab.set_size(count);

    for _ in 0..count {
        let raw_label = cursor.read_u16_le("label")?;
        let token_len = cursor.read_u16_le("token length")? as usize;
        let token = cursor.read_bytes(token_len, "token")?;

        let label = L::from_u16(raw_label).ok_or(AlphabetError::LabelOutOfRange {
            label: raw_label as u64,
        })?;
        if is_single_space_codepoint(token) {
            vocab.set_space_label(label);
        }
        vocab.insert(label, token.to_vec());
    }

    if !cursor.is_exhausted() {
        log::debug!(
            "ignoring {} trailing bytes after alphabet entries",
            cursor.remaining()
        );
    }
    log::debug!(
        "read alphabet binary: size {}, {} entries, space label {:?}",
        vocab.size(),
        vocab.len(),
        vocab.space_label()
    );
    Ok(vocab)
}

/// Serialize a [`LabelVocab`] to a new buffer.
///
/// See [`write_alphabet_binary`].
pub fn alphabet_binary_bytes<L: LabelType>(vocab: &LabelVocab<L>) -> ACResult<Vec<u8>> {
    let capacity = 2 + vocab
        .sorted_entries()
        .iter()
        .map(|(_, token)| 4 + token.len())
        .sum::<usize>();
    let mut buf = Vec::with_capacity(capacity);
    write_alphabet_binary(vocab, &mut buf)?;
    Ok(buf)
}

/// Save a [`LabelVocab`] to an alphabet binary file.
///
/// See [`write_alphabet_binary`].
///
/// ## Arguments
/// * `vocab` - the vocab to save.
/// * `path` - the path to save the buffer to.
pub fn save_alphabet_binary_path<L, P>(
    vocab: &LabelVocab<L>,
    path: P,
) -> ACResult<()>
where
    L: LabelType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_alphabet_binary(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`LabelVocab`] in the alphabet binary format.
///
/// The header count is the number of entries written. Labels must fit
/// a `u16`, and tokens must be at most `u16::MAX` bytes.
///
/// ## Arguments
/// * `vocab` - the vocab to write.
/// * `writer` - the writer to target.
pub fn write_alphabet_binary<L, W>(
    vocab: &LabelVocab<L>,
    writer: &mut W,
) -> ACResult<()>
where
    L: LabelType,
    W: Write,
{
    let entries = vocab.sorted_entries();
    let count = u16::try_from(entries.len()).map_err(|_| AlphabetError::SizeOverflow {
        size: entries.len(),
    })?;
    if entries.len() != vocab.size() {
        log::warn!(
            "alphabet declares size {} but holds {} entries; writing {}",
            vocab.size(),
            entries.len(),
            entries.len()
        );
    }

    writer.write_all(&count.to_le_bytes())?;
    for (label, token) in entries {
        let wire_label = label.to_u16().ok_or(AlphabetError::LabelOutOfRange {
            label: label.to_u64().unwrap_or(u64::MAX),
        })?;
        let token_len =
            u16::try_from(token.len()).map_err(|_| AlphabetError::TokenTooLong { len: token.len() })?;

        writer.write_all(&wire_label.to_le_bytes())?;
        writer.write_all(&token_len.to_le_bytes())?;
        writer.write_all(token)?;
    }

    Ok(())
}
