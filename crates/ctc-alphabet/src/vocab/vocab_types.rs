//! # Vocabulary Types

use crate::types::{ACHashMap, Token};

/// `{ L -> Vec<u8> }` map.
///
/// ## Style Hints
/// Instance names should prefer `label_tokens`, or `label_token_map`.
pub type LabelTokenMap<L> = ACHashMap<L, Token>;

/// `{ Vec<u8> -> L }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_labels`, or `token_label_map`.
pub type TokenLabelMap<L> = ACHashMap<Token, L>;
