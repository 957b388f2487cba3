//! One-shot public API.

use crate::streaming::Hasher;
use crate::types::{Error, OUT_LEN};
use subtle::ConstantTimeEq;

// =============================================================================
// PLAIN HASHING
// =============================================================================

/// Compute the default 32-byte hash of `input`.
///
/// # Example
/// ```rust
/// let digest = blake3::hash(b"hello world");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> [u8; OUT_LEN] {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize().read32()
}

/// Compute a hash of arbitrary output length `out.len()` for `input`.
pub fn hash_into(input: &[u8], out: &mut [u8]) {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize().fill(out);
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Constant-time comparison of `hash(input)` against `expected`.
///
/// # Example
/// ```rust
/// let data = b"secure data";
/// let digest = blake3::hash(data);
/// assert!(blake3::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; OUT_LEN]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}

// =============================================================================
// KEYED HASHING (MAC)
// =============================================================================

/// Compute a keyed hash (MAC) of `input` under `key`.
///
/// # Errors
/// Returns [`Error::InvalidKeyLength`] if `key` is not 32 bytes.
///
/// # Example
/// ```rust
/// let key = [42u8; 32];
/// let mac = blake3::keyed_hash(&key, b"message").unwrap();
/// assert!(blake3::verify_mac(&key, b"message", &mac).unwrap());
/// ```
pub fn keyed_hash(key: &[u8], input: &[u8]) -> Result<[u8; OUT_LEN], Error> {
    let mut hasher = Hasher::new_keyed(key)?;
    hasher.update(input);
    Ok(hasher.finalize().read32())
}

/// Compute a keyed hash (MAC) of arbitrary output length `out.len()`.
///
/// # Errors
/// Returns [`Error::InvalidKeyLength`] if `key` is not 32 bytes.
pub fn keyed_hash_into(key: &[u8], input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut hasher = Hasher::new_keyed(key)?;
    hasher.update(input);
    hasher.finalize().fill(out);
    Ok(())
}

/// Constant-time MAC verification.
///
/// # Errors
/// Returns [`Error::InvalidKeyLength`] if `key` is not 32 bytes.
pub fn verify_mac(key: &[u8], input: &[u8], expected: &[u8; OUT_LEN]) -> Result<bool, Error> {
    let computed = keyed_hash(key, input)?;
    Ok(computed.ct_eq(expected).into())
}

// =============================================================================
// KEY DERIVATION
// =============================================================================

/// Derive a 32-byte key from `context` and `key_material`.
///
/// # Example
/// ```rust
/// let master = [0u8; 32];
/// let session_key = blake3::derive_key("session-2024", &master);
/// let db_key = blake3::derive_key("database-encryption", &master);
/// assert_ne!(session_key, db_key);
/// ```
#[must_use]
pub fn derive_key(context: &str, key_material: &[u8]) -> [u8; OUT_LEN] {
    let mut hasher = Hasher::new_derive_key(context);
    hasher.update(key_material);
    hasher.finalize().read32()
}

/// Derive an arbitrary-length key from `context` and `key_material`.
pub fn derive_key_into(context: &str, key_material: &[u8], out: &mut [u8]) {
    let mut hasher = Hasher::new_derive_key(context);
    hasher.update(key_material);
    hasher.finalize().fill(out);
}
