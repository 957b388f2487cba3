//! Chunk-batching dispatch.
//!
//! Selects the four-lane chunk batch (see [`crate::kernels::simd`]) when
//! at least that many whole chunks are available, falling back to the
//! portable scalar kernel chunk-by-chunk otherwise.

use crate::kernels::simd::{self, Compress4xFn, LANES};
use crate::types::CHUNK_LEN;

/// Bytes a single chunk group ([`LANES`] chunks) spans; used by the
/// streaming hasher to decide how much input to batch before handing it
/// to the batch kernel.
pub const CHUNK_GROUP_LEN: usize = CHUNK_LEN * LANES;

/// Returns the 4-way batch kernel. Always `Some`; see [`crate::kernels::simd`].
#[must_use]
pub fn get_compress4x() -> Option<Compress4xFn> {
    simd::detect()
}

/// Returns the name of the active chunk-compression backend, for
/// diagnostics and tests.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    if get_compress4x().is_some() {
        "Portable (4x batched)"
    } else {
        "Portable"
    }
}
