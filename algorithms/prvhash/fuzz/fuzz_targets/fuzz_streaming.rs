#![no_main]

use libfuzzer_sys::fuzz_target;
use prvhash::Hasher64s;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Reference: one-shot 256-bit streamed hash
    let mut reference_hash = [0u8; 32];
    prvhash::hash64s(data, &mut reference_hash).unwrap();

    // Chunk size is derived from first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher64s::new(32).unwrap();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }

    let streaming_hash = hasher.finalize();

    // They must be identical
    assert_eq!(
        reference_hash.as_slice(),
        streaming_hash.as_slice(),
        "Streaming and One-Shot approaches differ!"
    );
});
