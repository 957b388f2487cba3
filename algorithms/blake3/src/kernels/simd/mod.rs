//! Four-way chunk batching.
//!
//! This is not a hand-vectorized kernel: it batches four chunk
//! compressions into one call by looping over [`portable::chunk_cv`].
//! There is no transposed-lane G-function and no `core::arch` intrinsic
//! use here — the gain (such as it is) is fewer, larger units of work
//! handed to [`crate::streaming::Hasher::update`] and to `rayon` under
//! the `multithread` feature, not SIMD throughput. A real vectorized
//! kernel (SSE2/AVX2 transposed words, byte-shuffle rotations) would
//! slot in behind the same [`Compress4xFn`] signature without the
//! callers above needing to change.

use crate::kernels::portable;
use crate::types::ChunkKernelFn;

/// Number of chunks processed per [`compress4x`] call.
pub const LANES: usize = 4;

/// Always available: this is a pure-Rust batching loop, not a
/// hardware-dispatched kernel, so there is nothing to detect.
#[must_use]
pub fn detect() -> Option<Compress4xFn> {
    Some(compress4x)
}

/// Signature of a 4-way chunk-compression batch.
pub type Compress4xFn =
    fn(chunks: [&[u8]; LANES], key: &[u32; 8], first_counter: u64, flags: u32) -> [[u32; 8]; LANES];

/// Compress four chunks, one after another, through the scalar kernel.
fn compress4x(
    chunks: [&[u8]; LANES],
    key: &[u32; 8],
    first_counter: u64,
    flags: u32,
) -> [[u32; 8]; LANES] {
    core::array::from_fn(|lane| portable::chunk_cv(chunks[lane], key, first_counter + lane as u64, flags))
}

/// Type-erased single-chunk kernel handed to [`crate::tree::TreeStack`]
/// when it falls back to scalar leaf hashing (fewer than [`LANES`] whole
/// chunks remaining).
pub const PORTABLE_CHUNK_KERNEL: ChunkKernelFn = portable::chunk_cv;
