use bolero::check;
use prvhash::StreamCipher;

const KEY: [u8; 32] = [0x5C; 32];
const NONCE: [u8; 16] = [0x36; 16];

#[test]
fn fuzz_cipher_roundtrip_and_chunking() {
    check!()
        .with_type::<(Vec<u8>, u8)>()
        .for_each(|(data, chunk)| {
            // =============================================================================
            // ONE CALL
            // =============================================================================
            let mut whole = data.clone();
            StreamCipher::new(&KEY, &NONCE)
                .unwrap()
                .apply_keystream(&mut whole);

            // =============================================================================
            // CHUNKED
            // =============================================================================
            let step = usize::from(*chunk).max(1);
            let mut chunked = data.clone();
            let mut cipher = StreamCipher::new(&KEY, &NONCE).unwrap();
            for part in chunked.chunks_mut(step) {
                cipher.apply_keystream(part);
            }
            assert_eq!(chunked, whole, "Chunk size {step} changed the keystream");

            // =============================================================================
            // DECRYPT
            // =============================================================================
            StreamCipher::new(&KEY, &NONCE)
                .unwrap()
                .apply_keystream(&mut whole);
            assert_eq!(&whole, data, "Keystream is not self-inverse");
        });
}
