//! Streaming hasher.
//!
//! Accepts input incrementally with O(1) buffering per chunk and
//! O(log n) tree state, batching four chunks per call (and, with the
//! `multithread` feature, spreading batches across a thread pool)
//! whenever enough complete chunks are available at once.

use crate::engine::dispatcher::{self, CHUNK_GROUP_LEN};
use crate::kernels::portable;
use crate::kernels::simd::{Compress4xFn, LANES};
use crate::output::OutputReader;
use crate::tree::TreeStack;
use crate::types::{Error, Mode, CHUNK_LEN};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// The incremental hashing object. Construct with [`Hasher::new`],
/// [`Hasher::new_keyed`], or [`Hasher::new_derive_key`]; feed data with
/// [`update`](Self::update); read output with [`finalize`](Self::finalize).
#[derive(Clone, Debug)]
pub struct Hasher {
    buffer: Vec<u8>,
    tree: TreeStack,
    key: [u32; 8],
    base_flags: u32,
    compress4x: Option<Compress4xFn>,
}

impl Hasher {
    /// Plain, unkeyed hashing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_and_flags(crate::kernels::constants::IV, Mode::Hash.base_flags())
    }

    /// Keyed hashing (MAC). `key` must be exactly 32 bytes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn new_keyed(key: &[u8]) -> Result<Self, Error> {
        let words = key_words(key)?;
        Ok(Self::with_key_and_flags(words, Mode::KeyedHash.base_flags()))
    }

    /// Key derivation. Derives a context key from `context` (hashed under
    /// `DERIVE_KEY_CONTEXT`), then returns a hasher in `DERIVE_KEY_MATERIAL`
    /// mode ready to absorb key material.
    #[must_use]
    pub fn new_derive_key(context: &str) -> Self {
        let mut context_hasher =
            Self::with_key_and_flags(crate::kernels::constants::IV, crate::types::Flag::DeriveKeyContext.bit());
        context_hasher.update(context.as_bytes());
        let context_key = context_hasher.finalize().read32();
        let words = le_bytes_to_words(&context_key);
        Self::with_key_and_flags(words, Mode::DeriveKeyMaterial.base_flags())
    }

    fn with_key_and_flags(key: [u32; 8], base_flags: u32) -> Self {
        Self {
            buffer: Vec::with_capacity(CHUNK_LEN),
            tree: TreeStack::new(key, base_flags),
            key,
            base_flags,
            compress4x: dispatcher::get_compress4x(),
        }
    }

    /// Absorb more input. May be called any number of times, with any
    /// chunking of the caller's choosing — the result depends only on
    /// the concatenation of all bytes passed so far.
    pub fn update(&mut self, mut input: &[u8]) {
        // A previously buffered full chunk can only be closed once we
        // know for certain it wasn't the last chunk of the whole input.
        if self.buffer.len() == CHUNK_LEN && !input.is_empty() {
            self.close_buffered_chunk();
        }

        if self.buffer.is_empty() {
            input = self.consume_whole_groups(input);
            input = self.consume_whole_chunks(input);
        }

        while !input.is_empty() {
            if self.buffer.len() == CHUNK_LEN {
                self.close_buffered_chunk();
            }
            let want = CHUNK_LEN - self.buffer.len();
            let take = want.min(input.len());
            self.buffer.extend_from_slice(&input[..take]);
            input = &input[take..];
        }
    }

    fn close_buffered_chunk(&mut self) {
        let counter = self.tree.next_chunk_counter();
        let cv = portable::chunk_cv(&self.buffer, &self.key, counter, self.base_flags);
        self.tree.push_chunk_cv(cv);
        self.buffer.clear();
    }

    /// Consume as many whole [`LANES`]-chunk groups as possible via the
    /// batch kernel, always holding back at least one trailing byte so
    /// the true final chunk is never closed speculatively. Returns the
    /// unconsumed remainder of `input`.
    fn consume_whole_groups<'a>(&mut self, input: &'a [u8]) -> &'a [u8] {
        let Some(kernel4x) = self.compress4x else {
            return input;
        };
        let mut remaining = input;
        #[cfg(feature = "multithread")]
        {
            let n_groups = remaining.len().saturating_sub(1) / CHUNK_GROUP_LEN;
            if n_groups >= 2 {
                let bulk_len = n_groups * CHUNK_GROUP_LEN;
                let (bulk, rest) = remaining.split_at(bulk_len);
                let first_counter = self.tree.next_chunk_counter();
                let cvs = hash_groups_parallel(bulk, n_groups, self.key, self.base_flags, first_counter, kernel4x);
                for cv in cvs {
                    self.tree.push_chunk_cv(cv);
                }
                remaining = rest;
            }
        }
        while remaining.len() > CHUNK_GROUP_LEN {
            let (group, rest) = remaining.split_at(CHUNK_GROUP_LEN);
            let counter = self.tree.next_chunk_counter();
            let chunks = [
                &group[0..CHUNK_LEN],
                &group[CHUNK_LEN..2 * CHUNK_LEN],
                &group[2 * CHUNK_LEN..3 * CHUNK_LEN],
                &group[3 * CHUNK_LEN..4 * CHUNK_LEN],
            ];
            let cvs = kernel4x(chunks, &self.key, counter, self.base_flags);
            for cv in cvs {
                self.tree.push_chunk_cv(cv);
            }
            remaining = rest;
        }
        remaining
    }

    /// Consume whole single chunks scalar-wise, again always holding
    /// back at least one trailing byte.
    fn consume_whole_chunks<'a>(&mut self, mut input: &'a [u8]) -> &'a [u8] {
        while input.len() > CHUNK_LEN {
            let (chunk, rest) = input.split_at(CHUNK_LEN);
            let counter = self.tree.next_chunk_counter();
            let cv = portable::chunk_cv(chunk, &self.key, counter, self.base_flags);
            self.tree.push_chunk_cv(cv);
            input = rest;
        }
        input
    }

    /// Finalize and return an output reader. Does not consume the
    /// hasher: further `update` calls (to extend a running digest) and
    /// repeated `finalize` calls are both valid, matching the real
    /// BLAKE3 API.
    #[must_use]
    pub fn finalize(&self) -> OutputReader {
        let root = self.tree.clone().finalize(&self.buffer);
        OutputReader::new(root)
    }

    /// Write the default 32-byte digest into `out`.
    ///
    /// # Errors
    /// Returns [`Error::OutputTooShort`] if `out` is shorter than 32 bytes.
    pub fn finalize_into(&self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() < crate::types::OUT_LEN {
            return Err(Error::OutputTooShort {
                requested: crate::types::OUT_LEN,
                available: out.len(),
            });
        }
        out[..crate::types::OUT_LEN].copy_from_slice(&self.finalize().read32());
        Ok(())
    }

    /// Reset the hasher to its initial state (same key/mode), for reuse.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.tree = TreeStack::new(self.key, self.base_flags);
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "multithread")]
fn hash_groups_parallel(
    bulk: &[u8],
    n_groups: usize,
    key: [u32; 8],
    flags: u32,
    first_counter: u64,
    kernel4x: Compress4xFn,
) -> Vec<[u32; 8]> {
    use rayon::prelude::*;
    (0..n_groups)
        .into_par_iter()
        .flat_map_iter(|g| {
            let group = &bulk[g * CHUNK_GROUP_LEN..(g + 1) * CHUNK_GROUP_LEN];
            let chunks = [
                &group[0..CHUNK_LEN],
                &group[CHUNK_LEN..2 * CHUNK_LEN],
                &group[2 * CHUNK_LEN..3 * CHUNK_LEN],
                &group[3 * CHUNK_LEN..4 * CHUNK_LEN],
            ];
            let counter = first_counter + (g * LANES) as u64;
            kernel4x(chunks, &key, counter, flags).into_iter()
        })
        .collect()
}

fn key_words(key: &[u8]) -> Result<[u32; 8], Error> {
    if key.len() != 32 {
        return Err(Error::InvalidKeyLength { got: key.len() });
    }
    Ok(le_bytes_to_words(key.try_into().expect("checked length above")))
}

fn le_bytes_to_words(key: &[u8; 32]) -> [u32; 8] {
    let mut words = [0u32; 8];
    for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

#[cfg(feature = "digest-trait")]
mod digest_impl {
    use super::{key_words, Hasher};
    use crypto_common::{Key, KeySizeUser};
    use digest::typenum::U32;
    use digest::{FixedOutput, HashMarker, KeyInit, Output, OutputSizeUser, Reset, Update};

    impl OutputSizeUser for Hasher {
        type OutputSize = U32;
    }

    impl KeySizeUser for Hasher {
        type KeySize = U32;
    }

    impl Update for Hasher {
        fn update(&mut self, data: &[u8]) {
            self.update(data);
        }
    }

    impl FixedOutput for Hasher {
        fn finalize_into(self, out: &mut Output<Self>) {
            out.copy_from_slice(&self.finalize().read32());
        }
    }

    impl Reset for Hasher {
        fn reset(&mut self) {
            self.reset();
        }
    }

    impl HashMarker for Hasher {}

    impl KeyInit for Hasher {
        #[allow(clippy::expect_used)]
        fn new(key: &Key<Self>) -> Self {
            let words = key_words(key.as_slice()).expect("KeySize guarantees 32 bytes");
            Self::with_key_and_flags(words, crate::types::Mode::KeyedHash.base_flags())
        }
    }
}
