use blake3::{hash, Hasher};
use bolero::check;

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let expected = hash(data);

        // Single update.
        let mut hasher = Hasher::new();
        hasher.update(data);
        assert_eq!(hasher.finalize().read32(), expected, "single update mismatch");

        // Byte-by-byte (small inputs only, to keep the fuzz loop fast).
        if data.len() < 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.finalize().read32(), expected, "byte-by-byte streaming mismatch");
        }

        // Arbitrary split points.
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.finalize().read32(), expected, "split at {split_idx} mismatch");
            }
        }
    });
}
