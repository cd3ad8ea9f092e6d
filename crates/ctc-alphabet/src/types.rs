//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a label in an alphabet.
///
/// These are constrained to be unsigned primitive integers;
/// the decoder picks the width, the alphabet only requires that
/// every assigned label fits.
pub trait LabelType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> LabelType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A token: the raw bytes of one alphabet entry.
pub type Token = Vec<u8>;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type ACHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ACHashMap<K, V> {
            ACHashMap::with_capacity(capacity)
        }
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type ACHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ACHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type ACHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ACHashMap<K, V> {
            ACHashMap::with_capacity(capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_label_types() {
        struct IsLabel<T: LabelType>(PhantomData<T>);

        let _: IsLabel<u8>;
        let _: IsLabel<u16>;
        let _: IsLabel<u32>;
        let _: IsLabel<u64>;
        let _: IsLabel<usize>;
    }

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: ACHashMap<u32, Token> = hash_map_with_capacity(4);
        map.insert(1, b"a".to_vec());
        assert_eq!(map.get(&1).map(Vec::as_slice), Some(&b"a"[..]));
    }
}
