use bolero::check;
use prvhash::{hash64, hash64s, Hasher64, Hasher64s};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let mut expected = [0u8; 32];
        hash64s(data, &mut expected).unwrap();

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher64s::new(32).unwrap();
        hasher.update(data);
        assert_eq!(hasher.finalize(), expected, "Streaming single update mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher64s::new(32).unwrap();
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher64s::new(32).unwrap();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }
    });
}

#[test]
fn fuzz_single_lane_split() {
    check!()
        .with_type::<(Vec<u8>, u16)>()
        .for_each(|(data, split)| {
            let mut expected = [0u8; 24];
            hash64(data, &mut expected).unwrap();

            let split = usize::from(*split) % (data.len() + 1);
            let mut hasher = Hasher64::new(24).unwrap();
            hasher.update(&data[..split]);
            hasher.update(&data[split..]);
            assert_eq!(hasher.finalize(), expected, "Split at {split} mismatch");
        });
}
