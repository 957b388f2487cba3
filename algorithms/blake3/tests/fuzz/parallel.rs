use blake3::{hash, Hasher};
use bolero::check;

#[test]
fn fuzz_one_shot_and_streaming_paths_agree() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // `blake3::hash` routes through whichever chunk-group batching size
        // `Hasher::update` picks (4x groups, single chunks, or a byte-wise
        // buffer, depending on how much of `data` is buffered at once). A
        // hasher fed the same bytes in one `update` call is the ground
        // truth for all of those paths agreeing.
        let one_shot = hash(data);

        let mut hasher = Hasher::new();
        hasher.update(data);
        let sequential = hasher.finalize().read32();

        assert_eq!(one_shot, sequential, "one-shot vs sequential hasher mismatch");
    });
}
