#![no_main]

use blake3::{derive_key, keyed_hash, verify_mac};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut key = [0u8; 32];
    let msg_start = if data.len() >= 32 {
        key.copy_from_slice(&data[0..32]);
        32
    } else {
        0
    };
    let msg = &data[msg_start..];

    // Keyed hashing (MAC).
    let Ok(mac) = keyed_hash(&key, msg) else {
        return;
    };
    assert!(verify_mac(&key, msg, &mac).unwrap(), "MAC verification failed with correct key");

    let mut wrong_key = key;
    wrong_key[0] ^= 0xFF;
    assert!(!verify_mac(&wrong_key, msg, &mac).unwrap(), "MAC verification succeeded with wrong key");

    // Key derivation.
    if let Ok(context_str) = std::str::from_utf8(msg) {
        let derived = derive_key(context_str, &key);
        let derived2 = derive_key(context_str, &key);
        assert_eq!(derived, derived2, "KDF not deterministic");

        let context_modified = format!("{context_str}x");
        let derived_mod = derive_key(&context_modified, &key);
        assert_ne!(derived, derived_mod, "KDF collision on different context");
    }
});
