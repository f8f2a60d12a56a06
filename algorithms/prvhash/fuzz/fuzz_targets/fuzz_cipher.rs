#![no_main]

use libfuzzer_sys::fuzz_target;
use prvhash::StreamCipher;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 16 bytes are the key, the rest is the message
    if data.len() < 17 {
        return;
    }
    let (key, msg) = data.split_at(16);
    let chunk_size = (msg[0] as usize % 64) + 1;

    // =============================================================================
    // 1. CHUNK INDEPENDENCE
    // =============================================================================

    let mut whole = msg.to_vec();
    StreamCipher::new(key, &[]).unwrap().apply_keystream(&mut whole);

    let mut chunked = msg.to_vec();
    let mut cipher = StreamCipher::new(key, &[]).unwrap();
    for chunk in chunked.chunks_mut(chunk_size) {
        cipher.apply_keystream(chunk);
    }
    assert_eq!(whole, chunked, "Chunked keystream differs");

    // =============================================================================
    // 2. SELF-INVERSE
    // =============================================================================

    StreamCipher::new(key, &[]).unwrap().apply_keystream(&mut whole);
    assert_eq!(whole, msg, "Keystream is not self-inverse");
});
