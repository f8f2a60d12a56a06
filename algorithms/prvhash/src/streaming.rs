//! Streaming Hasher
//!
//! Incremental hashing over the absorption engine. Any chunking of a message
//! produces the same digest as a one-shot call.

use crate::engine::absorb::Absorber;
use crate::kernels::constants::STREAMED_LANES;
use crate::kernels::word::Word;
use crate::types::PrvhashError;

#[cfg(feature = "digest-trait")]
use crate::kernels::constants::DIGEST_SIZE;
#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::{U32, U8};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, KeyInit, OutputSizeUser, Reset, Update};

use core::num::NonZeroUsize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming hasher over `W`-bit words with `LANES` parallel lanes.
///
/// The output length is fixed at construction. State is wiped when the
/// hasher is finalized or dropped.
#[derive(Clone)]
pub struct Hasher<W: Word, const LANES: usize> {
    engine: Absorber<W, LANES>,
}

/// Single-lane 64-bit hasher.
pub type Hasher64 = Hasher<u64, 1>;
/// Four-lane 64-bit hasher, the high-throughput variant.
pub type Hasher64s = Hasher<u64, STREAMED_LANES>;
/// Single-lane 32-bit hasher.
pub type Hasher32 = Hasher<u32, 1>;
/// Single-lane 16-bit hasher.
pub type Hasher16 = Hasher<u16, 1>;
/// Single-lane 8-bit hasher.
pub type Hasher8 = Hasher<u8, 1>;

impl<W: Word, const LANES: usize> Hasher<W, LANES> {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher producing `output_len` bytes.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidOutputLength` if `output_len` is zero or
    /// not a multiple of the word size.
    pub fn new(output_len: usize) -> Result<Self, PrvhashError> {
        Self::new_seeded(output_len, W::default())
    }

    /// Create a hasher whose start state is perturbed by `seed`.
    ///
    /// # Errors
    /// Same conditions as [`Self::new`].
    pub fn new_seeded(output_len: usize, seed: W) -> Result<Self, PrvhashError> {
        Ok(Self {
            engine: Absorber::new(output_len, seed)?,
        })
    }

    /// Create a hasher from caller-supplied initial state.
    ///
    /// `hash_init` becomes the initial hash array and fixes the output
    /// length. `lane_init` holds `LANES` pairs of little-endian `Seed` and
    /// `Lcg` words. Both should come from a good entropy source.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidOutputLength` for a bad `hash_init`
    /// length and `PrvhashError::InvalidInitVectorLength` for a bad
    /// `lane_init` length.
    pub fn with_init_vector(
        hash_init: &[u8],
        lane_init: &[u8],
        seed: W,
    ) -> Result<Self, PrvhashError> {
        Ok(Self {
            engine: Absorber::with_init_vector(hash_init, lane_init, seed)?,
        })
    }

    pub(crate) fn from_words(words: NonZeroUsize, seed: W) -> Self {
        Self {
            engine: Absorber::from_words(words, seed),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.engine.output_len()
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(self) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        self.finish(&mut out);
        out
    }

    /// Finalize into a caller buffer of exactly [`Self::output_len`] bytes.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidOutputLength` if `out` has the wrong
    /// length. The hasher is consumed and wiped either way.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), PrvhashError> {
        if out.len() != self.output_len() {
            return Err(PrvhashError::InvalidOutputLength {
                len: out.len(),
                word_bytes: W::BYTES,
            });
        }
        self.finish(out);
        Ok(())
    }

    pub(crate) fn finish(mut self, out: &mut [u8]) {
        self.engine.close();
        self.engine.squeeze_into(out);
    }
}

// =============================================================================
// DIGEST WRAPPER
// =============================================================================

/// 256-bit streamed PRVHASH with the RustCrypto `digest` traits.
///
/// `KeyInit` takes an 8-byte little-endian key as the seed override.
#[cfg(feature = "digest-trait")]
#[derive(Clone)]
pub struct Prvhash64s256 {
    inner: Hasher64s,
    seed: u64,
}

#[cfg(feature = "digest-trait")]
impl Prvhash64s256 {
    const WORDS: NonZeroUsize = match NonZeroUsize::new(DIGEST_SIZE / 8) {
        Some(n) => n,
        None => panic!("digest must hold at least one word"),
    };

    /// Hasher with the given seed override.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Hasher::from_words(Self::WORDS, seed),
            seed,
        }
    }
}

#[cfg(feature = "digest-trait")]
impl Default for Prvhash64s256 {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Prvhash64s256 {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for Prvhash64s256 {
    type KeySize = U8;
}

#[cfg(feature = "digest-trait")]
impl Update for Prvhash64s256 {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Prvhash64s256 {
    fn finalize_into(self, out: &mut Output<Self>) {
        self.inner.finish(out.as_mut_slice());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Prvhash64s256 {
    fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Prvhash64s256 {}

#[cfg(feature = "digest-trait")]
impl KeyInit for Prvhash64s256 {
    fn new(key: &Key<Self>) -> Self {
        let mut seed = [0u8; 8];
        seed.copy_from_slice(key.as_slice());
        Self::with_seed(u64::from_le_bytes(seed))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_into_checks_length() {
        let hasher = Hasher64::new(16).unwrap();
        let mut short = [0u8; 8];
        assert!(hasher.clone().finalize_into(&mut short).is_err());

        let mut out = [0u8; 16];
        hasher.clone().finalize_into(&mut out).unwrap();
        assert_eq!(out.as_slice(), hasher.finalize().as_slice());
    }

    #[test]
    fn test_clone_forks_state() {
        let mut a = Hasher64s::new(32).unwrap();
        a.update(b"shared prefix ");
        let mut b = a.clone();
        a.update(b"left");
        b.update(b"right");
        assert_ne!(a.finalize(), b.finalize());
    }

    #[test]
    fn test_widths_report_output_len() {
        assert_eq!(Hasher8::new(3).unwrap().output_len(), 3);
        assert_eq!(Hasher16::new(6).unwrap().output_len(), 6);
        assert_eq!(Hasher32::new(12).unwrap().output_len(), 12);
        assert!(Hasher16::new(5).is_err());
    }
}
