//! # Rayon Batch Parallelism
//!
//! Alphabets are read-only after construction, so batches can be
//! encoded and decoded across threads without synchronization.

pub mod rayon_codec;

#[doc(inline)]
pub use rayon_codec::ParallelRayonCodec;
