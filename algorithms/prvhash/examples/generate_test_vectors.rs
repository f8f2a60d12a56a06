//! Generator for PRVHASH test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers every word width, the streamed variant, the init-vector path, the
//! stream cipher and the generator.
#![allow(clippy::unwrap_used)]
use prvhash::{Generator, Hasher, Hasher64s, StreamCipher, Word};
use serde_json::{json, Value};

fn input_bytes(token: &str) -> Vec<u8> {
    match token {
        "LARGE_1KB" => vec![b'A'; 1024],
        "UNALIGNED_63_TWO" => vec![2u8; 63],
        "EXACT_64_ZERO" => vec![0u8; 64],
        "EXACT_512_ONE" => vec![1u8; 512],
        "ZERO_8" => vec![0u8; 8],
        "ZERO_16" => vec![0u8; 16],
        "HIGH_BIT_7" => vec![0x80u8; 7],
        val => val.as_bytes().to_vec(),
    }
}

fn run<W: Word, const LANES: usize>(input: &[u8], len: usize, seed: u64) -> String {
    let mut hasher = Hasher::<W, LANES>::new_seeded(len, W::truncate_u64(seed)).unwrap();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

fn hash_vector(name: &str, variant: &str, input: &str, seed: u64, len: usize) -> Value {
    let bytes = input_bytes(input);
    let hash = match variant {
        "prvhash64" => run::<u64, 1>(&bytes, len, seed),
        "prvhash64s" => run::<u64, 4>(&bytes, len, seed),
        "prvhash32" => run::<u32, 1>(&bytes, len, seed),
        "prvhash16" => run::<u16, 1>(&bytes, len, seed),
        _ => run::<u8, 1>(&bytes, len, seed),
    };
    json!({ "name": name, "variant": variant, "input": input, "seed": seed, "hash": hash })
}

fn main() {
    // =========================================================================
    // 1. HASH VECTORS
    // =========================================================================

    let cases: [(&str, &str, &str, u64, usize); 21] = [
        ("empty_64", "prvhash64", "", 0, 8),
        ("abc_64", "prvhash64", "abc", 0, 8),
        ("zero8_64", "prvhash64", "ZERO_8", 0, 8),
        ("zero16_64", "prvhash64", "ZERO_16", 0, 8),
        ("high_bit_64", "prvhash64", "HIGH_BIT_7", 0, 8),
        ("seeded_64", "prvhash64", "abc", 0x0123_4567_89AB_CDEF, 8),
        ("abc_64_256", "prvhash64", "abc", 0, 32),
        ("large_64_256", "prvhash64", "LARGE_1KB", 0, 32),
        ("empty_64s", "prvhash64s", "", 0, 32),
        ("abc_64s", "prvhash64s", "abc", 0, 32),
        ("small_64s", "prvhash64s", "prvhash", 0, 32),
        ("large_64s", "prvhash64s", "LARGE_1KB", 0, 32),
        ("unaligned_63_64s", "prvhash64s", "UNALIGNED_63_TWO", 0, 32),
        ("exact_64_64s", "prvhash64s", "EXACT_64_ZERO", 0, 32),
        ("exact_512_64s", "prvhash64s", "EXACT_512_ONE", 0, 64),
        ("narrow_64s", "prvhash64s", "abc", 0, 8),
        ("seeded_64s", "prvhash64s", "abc", 42, 32),
        ("abc_32", "prvhash32", "abc", 0, 16),
        ("abc_16", "prvhash16", "abc", 0, 8),
        ("abc_8", "prvhash8", "abc", 0, 4),
        ("empty_8", "prvhash8", "", 0, 1),
    ];
    let hash_vectors: Vec<Value> = cases
        .iter()
        .map(|&(name, variant, input, seed, len)| hash_vector(name, variant, input, seed, len))
        .collect();

    // =========================================================================
    // 2. INIT VECTOR
    // =========================================================================

    let hash_init: Vec<u8> = (0..32u8).collect();
    let lane_init: Vec<u8> = (64..128u8).collect();
    let mut hasher = Hasher64s::with_init_vector(&hash_init, &lane_init, 0).unwrap();
    hasher.update(b"abc");
    let init_vector = json!({
        "name": "init_vector_64s",
        "input": "abc",
        "seed": 0,
        "hash_init": hex::encode(&hash_init),
        "lane_init": hex::encode(&lane_init),
        "hash": hex::encode(hasher.finalize())
    });

    // =========================================================================
    // 3. STREAM CIPHER
    // =========================================================================

    let cipher_cases: [(&str, Vec<u8>, Vec<u8>); 3] = [
        ("key16", (0..16u8).collect(), Vec::new()),
        ("key32_nonce8", (0..32u8).collect(), (0xA0..0xA8u8).collect()),
        ("key128_nonce96", (0..128u8).collect(), (0..96u8).collect()),
    ];
    let cipher_vectors: Vec<Value> = cipher_cases
        .iter()
        .map(|(name, key, nonce)| {
            let mut keystream = [0u8; 64];
            StreamCipher::new(key, nonce)
                .unwrap()
                .apply_keystream(&mut keystream);
            json!({
                "name": name,
                "key": hex::encode(key),
                "nonce": hex::encode(nonce),
                "keystream": hex::encode(keystream)
            })
        })
        .collect();

    // =========================================================================
    // 4. GENERATOR
    // =========================================================================

    let mut rng = Generator::new(b"prvhash");
    let text_words: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    let seed = 0x0123_4567_89AB_CDEF_u64;
    let mut rng = Generator::from_seed(seed);
    let seed_words: Vec<u64> = (0..2).map(|_| rng.next_u64()).collect();
    let generator_vectors = json!([
        { "name": "entropy_text", "entropy": hex::encode(b"prvhash"), "words": text_words },
        { "name": "from_seed", "entropy": hex::encode(seed.to_le_bytes()), "words": seed_words }
    ]);

    let output = json!({
        "hash_vectors": hash_vectors,
        "init_vector_vectors": [init_vector],
        "cipher_vectors": cipher_vectors,
        "generator_vectors": generator_vectors
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
