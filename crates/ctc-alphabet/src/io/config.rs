//! # Alphabet Config IO
//!
//! The config format is one token per line, UTF-8:
//! ```terminaloutput
//! # comment lines start with '#'
//! a
//! b
//! \#
//!
//! ```
//! * a line starting with ``#`` is a comment, and takes no label;
//! * a line of exactly ``\#`` is the literal token ``#``;
//! * empty lines take no label;
//! * a line of exactly one whitespace codepoint marks the space label;
//! * every other line is a token, and takes the next label, from 0.
//!
//! ``\n``, ``\r``, and ``\r\n`` are all accepted as line terminators.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{ACResult, AlphabetError},
    io::LineReader,
    types::LabelType,
    vocab::LabelVocab,
};

/// The comment marker.
pub const COMMENT_MARKER: u8 = b'#';

/// The config line which encodes a literal ``#`` token.
pub const ESCAPED_COMMENT_MARKER: &[u8] = b"\\#";

/// Load a [`LabelVocab`] from an alphabet config file.
///
/// ## Arguments
/// * `path` - the path to the config file.
pub fn load_alphabet_config_path<L, P>(path: P) -> ACResult<LabelVocab<L>>
where
    L: LabelType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_alphabet_config(reader)
}

/// Read a [`LabelVocab`] from an alphabet config stream.
///
/// ## Arguments
/// * `reader` - the config stream.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(reader)))]
pub fn read_alphabet_config<L, R>(reader: R) -> ACResult<LabelVocab<L>>
where
    L: LabelType,
    R: BufRead,
{
    let mut vocab = LabelVocab::default();
    let mut lines = LineReader::new(reader);
    let mut line = Vec::new();
    let mut skipped = 0_usize;

    while lines.read_line(&mut line)? {
        let token: &[u8] = if line == ESCAPED_COMMENT_MARKER {
            &[COMMENT_MARKER]
        } else if line.first() == Some(&COMMENT_MARKER) || line.is_empty() {
            skipped += 1;
            continue;
        } else {
            &line
        };
        vocab.push_token(token.to_vec())?;
    }

    log::debug!(
        "read alphabet config: {} labels, {} lines skipped, space label {:?}",
        vocab.size(),
        skipped,
        vocab.space_label()
    );
    Ok(vocab)
}

/// Save a [`LabelVocab`] to an alphabet config file.
///
/// See [`write_alphabet_config`].
///
/// ## Arguments
/// * `vocab` - the vocab to save.
/// * `path` - the path to save the config to.
pub fn save_alphabet_config_path<L, P>(
    vocab: &LabelVocab<L>,
    path: P,
) -> ACResult<()>
where
    L: LabelType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_alphabet_config(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`LabelVocab`] as an alphabet config.
///
/// Reading the output back yields the same labels and tokens.
/// Only dense vocabs (labels exactly ``0..len``) are writable, and only
/// tokens a config line can express: no line terminators, no empty
/// tokens, and no ``#``-prefixed tokens other than ``#`` itself.
///
/// ## Arguments
/// * `vocab` - the vocab to write.
/// * `writer` - the writer to target.
pub fn write_alphabet_config<L, W>(
    vocab: &LabelVocab<L>,
    writer: &mut W,
) -> ACResult<()>
where
    L: LabelType,
    W: Write,
{
    if !vocab.is_dense() {
        return Err(AlphabetError::Unrepresentable(
            "config alphabets require contiguous labels from 0".to_string(),
        ));
    }

    for (label, token) in vocab.sorted_entries() {
        if token == [COMMENT_MARKER] {
            writer.write_all(ESCAPED_COMMENT_MARKER)?;
        } else if token.is_empty()
            || token[0] == COMMENT_MARKER
            || token == ESCAPED_COMMENT_MARKER
            || token.iter().any(|&b| b == b'\n' || b == b'\r')
        {
            return Err(AlphabetError::Unrepresentable(format!(
                "label {label}: token {:?} cannot be written as a config line",
                String::from_utf8_lossy(token)
            )));
        } else {
            writer.write_all(token)?;
        }
        writer.write_all(b"\n")?;
    }

    Ok(())
}
