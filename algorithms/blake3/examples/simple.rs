//! Minimal end-to-end usage of the three hashing modes.

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let digest = blake3::hash(b"Performance Matters");
    println!("hash:       {}", hex::encode(digest));
    println!("verified:   {}", blake3::verify(b"Performance Matters", &digest));

    let key = [7u8; 32];
    let mac = blake3::keyed_hash(&key, b"message").expect("32-byte key");
    println!("keyed hash: {}", hex::encode(mac));

    let derived = blake3::derive_key("example context 2026-08-01", b"master key material");
    println!("derived:    {}", hex::encode(derived));

    let mut out = [0u8; 64];
    blake3::hash_into(b"extensible output", &mut out);
    println!("xof(64):    {}", hex::encode(out));

    println!("backend:    {}", blake3::active_backend());
}
