#![no_main]

use blake3::Hasher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let reference = blake3::hash(data);

    let chunk_size = (data[0] as usize % 255) + 1;
    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streamed = hasher.finalize().read32();

    assert_eq!(reference, streamed, "streaming and one-shot hashing differ");
});
