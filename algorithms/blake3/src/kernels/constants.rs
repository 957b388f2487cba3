//! Kernel constants.
//!
//! Every value here is fixed by the hash's definition, not derived or
//! tunable. The initialization vector is the first 32 bits of the
//! fractional parts of the square roots of the first eight primes
//! (the same IV family as SHA-256); the message permutation and rotation
//! schedule are the ones that give the compression function's ARX rounds
//! full diffusion in exactly seven rounds.
//!
//! Nothing here is secret and nothing here is configurable — changing any
//! of it produces a different, incompatible hash function.

/// Output size of the default (non-XOF) digest, in bytes.
pub const OUT_LEN: usize = crate::types::OUT_LEN;

/// Size of a compression block, in bytes.
pub const BLOCK_LEN: usize = crate::types::BLOCK_LEN;

/// Maximum number of bytes absorbed by a single chunk (leaf) of the tree.
pub const CHUNK_LEN: usize = crate::types::CHUNK_LEN;

/// Number of G-function rounds per compression.
pub const ROUNDS: usize = 7;

/// Initialization vector / default chaining value for unkeyed mode.
pub const IV: [u32; 8] = [
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
];

/// Message-word permutation applied between rounds.
///
/// `MSG_PERMUTATION[i]` gives the index into the *previous* round's
/// schedule that supplies word `i` of the next round's schedule.
pub const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

/// Rotation amounts used by the four mixing steps of the G function, in
/// the order they're applied: right-rotate by 16, then 12, then 8, then 7.
pub const ROTATIONS: [u32; 4] = [16, 12, 8, 7];
