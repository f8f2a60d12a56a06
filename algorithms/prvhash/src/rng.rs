//! Pseudo-Random Generator
//!
//! The firewalled keystream seeded from arbitrary entropy bytes. Output is
//! deterministic for a given seed; no OS entropy is read here.

use crate::engine::keystream::Keystream;
use crate::kernels::constants::GENERATOR_SEED;
use zeroize::Zeroize;

/// Deterministic generator over the keystream engine. Wiped on drop.
///
/// # Example
/// ```rust
/// use prvhash::Generator;
///
/// let mut a = Generator::from_seed(42);
/// let mut b = Generator::from_seed(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone)]
pub struct Generator {
    keystream: Keystream,
}

impl Generator {
    /// Generator keyed by `entropy` of any length, including empty.
    #[must_use]
    pub fn new(entropy: &[u8]) -> Self {
        Self {
            keystream: Keystream::new(GENERATOR_SEED, &[entropy]),
        }
    }

    /// Generator keyed by the little-endian bytes of `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&seed.to_le_bytes())
    }

    /// Next 64 output bits.
    pub fn next_u64(&mut self) -> u64 {
        self.keystream.next_u64()
    }

    /// Next 32 output bits (the low half of a fresh 64-bit word).
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Fill `dest` with output bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.keystream.fill(dest);
    }
}

impl Zeroize for Generator {
    fn zeroize(&mut self) {
        self.keystream.zeroize();
    }
}
