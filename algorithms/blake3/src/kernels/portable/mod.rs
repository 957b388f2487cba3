//! Portable (scalar) implementation of the compression primitive.
//!
//! Fully self-contained: this module alone can hash any input size.
//! [`crate::kernels::simd`] batches four of the chunk calls defined here
//! per call; it never changes the result, only the call granularity.

use self::utils::{bytes_from_words, counter_words, rotr, words_from_block};
use crate::kernels::constants::{BLOCK_LEN, CHUNK_LEN, IV, MSG_PERMUTATION, ROTATIONS, ROUNDS};
use crate::types::Flag;

pub mod utils;

// =============================================================================
// ROOT NODE
// =============================================================================

/// The inputs to the single compression that produced either the final
/// 32-byte digest or the seed for an XOF read.
///
/// Re-running [`RootNode::output_block`] with successive `output_counter`
/// values is how [`crate::output::OutputReader`] produces output longer
/// than one block.
#[derive(Clone, Copy)]
pub struct RootNode {
    pub(crate) cv: [u32; 8],
    pub(crate) block_words: [u32; 16],
    pub(crate) block_len: u8,
    pub(crate) flags: u32,
}

impl RootNode {
    /// Produce the 64-byte output block for output-block index `output_counter`.
    #[must_use]
    pub fn output_block(&self, output_counter: u64) -> [u8; 64] {
        let words = compress_words(
            &self.cv,
            &self.block_words,
            output_counter,
            self.block_len,
            self.flags,
        );
        bytes_from_words(&words)
    }

    /// The first 32 bytes of this node's output, i.e. the default digest.
    #[must_use]
    pub fn first_32_bytes(&self) -> [u8; 32] {
        let block = self.output_block(0);
        let mut out = [0u8; 32];
        out.copy_from_slice(&block[..32]);
        out
    }
}

// =============================================================================
// THE COMPRESSION FUNCTION
// =============================================================================

/// The G mixing function, operating on four words of the state by index.
#[inline(always)]
fn g(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, mx: u32, my: u32) {
    state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
    state[d] = rotr(state[d] ^ state[a], ROTATIONS[0]);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = rotr(state[b] ^ state[c], ROTATIONS[1]);

    state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
    state[d] = rotr(state[d] ^ state[a], ROTATIONS[2]);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = rotr(state[b] ^ state[c], ROTATIONS[3]);
}

fn round(state: &mut [u32; 16], msg: &[u32; 16]) {
    // Column step.
    g(state, 0, 4, 8, 12, msg[0], msg[1]);
    g(state, 1, 5, 9, 13, msg[2], msg[3]);
    g(state, 2, 6, 10, 14, msg[4], msg[5]);
    g(state, 3, 7, 11, 15, msg[6], msg[7]);
    // Diagonal step.
    g(state, 0, 5, 10, 15, msg[8], msg[9]);
    g(state, 1, 6, 11, 12, msg[10], msg[11]);
    g(state, 2, 7, 8, 13, msg[12], msg[13]);
    g(state, 3, 4, 9, 14, msg[14], msg[15]);
}

fn permute(msg: &[u32; 16]) -> [u32; 16] {
    let mut out = [0u32; 16];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = msg[MSG_PERMUTATION[i]];
    }
    out
}

/// The 512-bit compression function. Pure: same inputs always give the
/// same sixteen output words.
///
/// `block_len` is the number of meaningful bytes in `block_words` (the
/// rest must already be zero-padded by the caller); it is between 0 and
/// [`BLOCK_LEN`] inclusive.
#[must_use]
pub fn compress_words(
    cv: &[u32; 8],
    block_words: &[u32; 16],
    counter: u64,
    block_len: u8,
    flags: u32,
) -> [u32; 16] {
    let (counter_lo, counter_hi) = counter_words(counter);
    let mut state: [u32; 16] = [
        cv[0], cv[1], cv[2], cv[3], cv[4], cv[5], cv[6], cv[7], IV[0], IV[1], IV[2], IV[3],
        counter_lo, counter_hi, u32::from(block_len), flags,
    ];

    let mut msg = *block_words;
    for round_idx in 0..ROUNDS {
        round(&mut state, &msg);
        if round_idx + 1 < ROUNDS {
            msg = permute(&msg);
        }
    }

    for i in 0..8 {
        state[i] ^= state[i + 8];
        state[i + 8] ^= cv[i];
    }
    state
}

fn first_8(words: [u32; 16]) -> [u32; 8] {
    let mut cv = [0u32; 8];
    cv.copy_from_slice(&words[..8]);
    cv
}

// =============================================================================
// CHUNK COMPRESSION
// =============================================================================

/// Compress one interior (non-root) chunk, returning its chaining value.
///
/// `chunk` is 1 to [`CHUNK_LEN`] bytes; `flags` is the mode's base flags
/// (e.g. `KEYED_HASH`) without `CHUNK_START`/`CHUNK_END`/`ROOT`, which this
/// function adds itself.
#[must_use]
pub fn chunk_cv(chunk: &[u8], key: &[u32; 8], chunk_counter: u64, flags: u32) -> [u32; 8] {
    debug_assert!(!chunk.is_empty() && chunk.len() <= CHUNK_LEN);
    let node = chunk_root_node(chunk, key, chunk_counter, flags);
    first_8(compress_words(
        &node.cv,
        &node.block_words,
        chunk_counter,
        node.block_len,
        node.flags & !Flag::Root.bit(),
    ))
}

/// Compress a chunk and capture its final compression's inputs without
/// applying `ROOT`. Used both by [`chunk_cv`] and, when the whole input
/// is a single chunk, by the caller to build the actual root node (by
/// adding `ROOT` to the returned flags before reading output).
#[must_use]
pub fn chunk_root_node(chunk: &[u8], key: &[u32; 8], chunk_counter: u64, flags: u32) -> RootNode {
    debug_assert!(chunk.len() <= CHUNK_LEN);
    let mut cv = *key;
    let mut blocks = chunk.chunks(BLOCK_LEN).peekable();

    // The empty-input chunk still needs one compression, over a zero-length block.
    if blocks.peek().is_none() {
        return RootNode {
            cv,
            block_words: words_from_block(&[]),
            block_len: 0,
            flags: flags | Flag::ChunkStart.bit() | Flag::ChunkEnd.bit(),
        };
    }

    let mut first = true;
    loop {
        let block = blocks.next().expect("checked non-empty above");
        let is_last = blocks.peek().is_none();
        let mut block_flags = flags;
        if first {
            block_flags |= Flag::ChunkStart.bit();
        }
        if is_last {
            block_flags |= Flag::ChunkEnd.bit();
        }
        let block_words = words_from_block(block);
        #[allow(clippy::cast_possible_truncation)]
        let block_len = block.len() as u8;

        if is_last {
            return RootNode {
                cv,
                block_words,
                block_len,
                flags: block_flags,
            };
        }

        cv = first_8(compress_words(&cv, &block_words, chunk_counter, block_len, block_flags));
        first = false;
    }
}

// =============================================================================
// PARENT COMPRESSION
// =============================================================================

/// Serialize two child chaining values into a 64-byte parent block.
#[must_use]
pub fn parent_block_words(left: &[u32; 8], right: &[u32; 8]) -> [u32; 16] {
    let mut words = [0u32; 16];
    words[..8].copy_from_slice(left);
    words[8..].copy_from_slice(right);
    words
}

/// Combine two children into a non-root parent node, returning its
/// chaining value.
#[must_use]
pub fn parent_cv(left: &[u32; 8], right: &[u32; 8], key: &[u32; 8], flags: u32) -> [u32; 8] {
    let block_words = parent_block_words(left, right);
    #[allow(clippy::cast_possible_truncation)]
    let block_len = BLOCK_LEN as u8;
    first_8(compress_words(
        key,
        &block_words,
        0,
        block_len,
        flags | Flag::Parent.bit(),
    ))
}

/// Build the root node for a parent merge (the final merge of a
/// multi-chunk tree).
#[must_use]
pub fn parent_root_node(left: &[u32; 8], right: &[u32; 8], key: &[u32; 8], flags: u32) -> RootNode {
    #[allow(clippy::cast_possible_truncation)]
    let block_len = BLOCK_LEN as u8;
    RootNode {
        cv: *key,
        block_words: parent_block_words(left, right),
        block_len,
        flags: flags | Flag::Parent.bit() | Flag::Root.bit(),
    }
}
