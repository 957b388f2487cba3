//! Portable bit-twiddling helpers shared by the scalar compression kernel.

/// Right-rotate a 32-bit word.
#[inline(always)]
pub const fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Load sixteen little-endian message words from a 64-byte block.
///
/// `block` may be shorter than [`crate::types::BLOCK_LEN`]; the remainder
/// is treated as zero, matching the zero-padding the spec requires for a
/// chunk's final partial block.
pub fn words_from_block(block: &[u8]) -> [u32; 16] {
    debug_assert!(block.len() <= crate::types::BLOCK_LEN);
    let mut padded = [0u8; crate::types::BLOCK_LEN];
    padded[..block.len()].copy_from_slice(block);
    let mut words = [0u32; 16];
    for (word, chunk) in words.iter_mut().zip(padded.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Serialize sixteen state words back to little-endian bytes.
pub fn bytes_from_words(words: &[u32; 16]) -> [u8; 64] {
    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Split a 64-bit counter into its little-endian (low, high) 32-bit halves.
#[inline(always)]
pub const fn counter_words(counter: u64) -> (u32, u32) {
    (counter as u32, (counter >> 32) as u32)
}
