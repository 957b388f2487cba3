use blake3::{hash, verify};
use bolero::check;

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let h = hash(data);
        assert!(verify(data, &h), "verify() failed on correct data");

        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(!verify(&corrupted_data, &h), "verify() succeeded on corrupted data");
        }

        let mut bad_h = h;
        bad_h[0] ^= 0xFF;
        assert!(!verify(data, &bad_h), "verify() succeeded on corrupted hash");
    });
}
