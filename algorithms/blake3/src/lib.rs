#![cfg_attr(not(feature = "std"), no_std)]

//! # blake3
//!
//! An implementation of the BLAKE3 cryptographic hash function: plain
//! hashing, keyed hashing (MAC), key derivation, and extensible output,
//! with a four-chunk batching fast path (and, with the `multithread`
//! feature, thread-pool fan-out across batches).
//!
//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = blake3::hash(b"Performance Matters");
//! println!("{digest:x?}");
//!
//! // 2. Constant-time verification
//! assert!(blake3::verify(b"Performance Matters", &digest));
//!
//! // 3. Streaming (large inputs / files)
//! use blake3::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"Chunk 1");
//! hasher.update(b"Chunk 2");
//! let digest = hasher.finalize().read32();
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Re-exported publicly but hidden from docs: useful for benchmarks and
// conformance tests that need to reach past the dispatcher.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod output;
mod streaming;
mod tree;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use oneshot::{
    derive_key, derive_key_into, hash, hash_into, keyed_hash, keyed_hash_into, verify, verify_mac,
};
pub use output::OutputReader;
pub use streaming::Hasher;
pub use types::{Error, OUT_LEN};

/// Returns the name of the active chunk-compression backend, for
/// diagnostics and cross-backend conformance tests.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
