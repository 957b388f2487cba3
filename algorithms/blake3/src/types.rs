//! Shared types used across the library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// Output size of the default (non-XOF) digest, in bytes.
pub const OUT_LEN: usize = 32;
/// Size of a compression block, in bytes.
pub const BLOCK_LEN: usize = 64;
/// Maximum number of bytes absorbed by a single chunk (leaf) of the tree.
pub const CHUNK_LEN: usize = 1024;

// =============================================================================
// DOMAIN FLAGS
// =============================================================================

/// Domain-separation bits mixed into the flags byte of a compression call.
///
/// Exactly one compression per chunk carries `CHUNK_START`, exactly one
/// carries `CHUNK_END` (the same one, for single-block chunks); `PARENT`
/// marks a node combining two children; `ROOT` marks the single
/// compression whose output is either the final digest or the XOF seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Flag {
    /// First block of a chunk.
    ChunkStart = 1 << 0,
    /// Last block of a chunk.
    ChunkEnd = 1 << 1,
    /// Combines two children into a parent node.
    Parent = 1 << 2,
    /// The single compression producing the root node.
    Root = 1 << 3,
    /// Keyed-hash mode: the base key is user-supplied instead of the IV.
    KeyedHash = 1 << 4,
    /// Key-derivation, first pass: hashing the context string.
    DeriveKeyContext = 1 << 5,
    /// Key-derivation, second pass: hashing the key material.
    DeriveKeyMaterial = 1 << 6,
}

impl Flag {
    /// Raw bit value.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }
}

impl core::ops::BitOr for Flag {
    type Output = u32;

    fn bitor(self, rhs: Self) -> u32 {
        self.bit() | rhs.bit()
    }
}

impl core::ops::BitOr<u32> for Flag {
    type Output = u32;

    fn bitor(self, rhs: u32) -> u32 {
        self.bit() | rhs
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Which of the three hashing modes a [`crate::Hasher`] was constructed in.
///
/// The mode fixes the base chaining value (IV vs. a user key or a derived
/// context key) and the base flags XORed into every compression performed
/// by the hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain, unkeyed hashing. Base flags: none.
    Hash,
    /// Keyed hashing (MAC). Base flags: `KEYED_HASH`.
    KeyedHash,
    /// Key derivation, second pass. Base flags: `DERIVE_KEY_MATERIAL`.
    DeriveKeyMaterial,
}

impl Mode {
    /// Base flags XORed into every compression performed under this mode.
    #[must_use]
    pub const fn base_flags(self) -> u32 {
        match self {
            Self::Hash => 0,
            Self::KeyedHash => Flag::KeyedHash.bit(),
            Self::DeriveKeyMaterial => Flag::DeriveKeyMaterial.bit(),
        }
    }
}

// =============================================================================
// CHUNK-COMPRESSION KERNEL INTERFACE
// =============================================================================

/// Unified single-chunk compression kernel: `(chunk, key, chunk_counter, flags) -> CV`.
///
/// `chunk` must be exactly [`CHUNK_LEN`] bytes except for the final chunk of
/// an input, which may be shorter (1 to `CHUNK_LEN` bytes). Both the portable
/// kernel and any hardware-accelerated kernel implement this same signature
/// so the dispatcher can swap them at runtime without the caller noticing.
pub type ChunkKernelFn = fn(chunk: &[u8], key: &[u32; 8], chunk_counter: u64, flags: u32) -> [u32; 8];

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors returned by the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key or context-derived key was not exactly 32 bytes.
    InvalidKeyLength {
        /// The length that was actually supplied.
        got: usize,
    },
    /// A caller-supplied output buffer was shorter than the requested length.
    OutputTooShort {
        /// Bytes requested.
        requested: usize,
        /// Bytes actually available in the destination buffer.
        available: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { got } => {
                write!(f, "key must be exactly 32 bytes, got {got}")
            }
            Self::OutputTooShort {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} output bytes but destination buffer only holds {available}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
