//! # Parallel Codec

use core::marker::PhantomData;

use rayon::prelude::*;

use crate::{alphabet::LabelCodec, errors::ACResult, types::LabelType};

/// Batch-Level Parallel [`LabelCodec`] Wrapper.
///
/// Single-item calls pass through; batch calls run on the ``rayon`` pool.
#[derive(Clone)]
pub struct ParallelRayonCodec<L: LabelType, C: LabelCodec<L>> {
    /// Wrapped codec.
    pub inner: C,

    _marker: PhantomData<L>,
}

impl<L, C> ParallelRayonCodec<L, C>
where
    L: LabelType,
    C: LabelCodec<L>,
{
    /// Create a new parallel codec.
    ///
    /// ## Arguments
    /// * `inner` - The codec to wrap.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<L, C> LabelCodec<L> for ParallelRayonCodec<L, C>
where
    L: LabelType,
    C: LabelCodec<L>,
{
    fn can_encode(
        &self,
        text: &str,
    ) -> bool {
        self.inner.can_encode(text)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> ACResult<Vec<L>> {
        self.inner.try_encode(text)
    }

    fn try_decode_to_bytes(
        &self,
        labels: &[L],
    ) -> ACResult<Vec<u8>> {
        self.inner.try_decode_to_bytes(labels)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> ACResult<Vec<Vec<L>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[L]],
    ) -> ACResult<Vec<Vec<u8>>> {
        batch
            .par_iter()
            .map(|labels| self.inner.try_decode_to_bytes(labels))
            .collect()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[L]],
    ) -> ACResult<Vec<String>> {
        batch
            .par_iter()
            .map(|labels| self.inner.try_decode_to_string(labels))
            .collect()
    }
}
