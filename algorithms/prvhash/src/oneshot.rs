//! Public API Layer
//!
//! One-shot hashing: `init; update; finalize` with no observable
//! intermediate state.

use crate::kernels::constants::{DIGEST_SIZE, STREAMED_LANES};
use crate::kernels::word::Word;
use crate::streaming::Hasher;
use crate::types::PrvhashError;
use core::num::NonZeroUsize;
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Hash `input` into `out` with `W`-bit words and `LANES` lanes.
///
/// `out.len()` is the digest length and must be a positive multiple of the
/// word size.
///
/// # Errors
/// Returns `PrvhashError::InvalidOutputLength` before any mixing if `out`
/// has an invalid length.
///
/// # Example
/// ```rust
/// let mut out = [0u8; 16];
/// prvhash::hash::<u32, 1>(b"Performance", &mut out, 0)?;
/// # Ok::<(), prvhash::PrvhashError>(())
/// ```
#[inline]
pub fn hash<W: Word, const LANES: usize>(
    input: &[u8],
    out: &mut [u8],
    seed: W,
) -> Result<(), PrvhashError> {
    let mut hasher = Hasher::<W, LANES>::new_seeded(out.len(), seed)?;
    hasher.update(input);
    hasher.finalize_into(out)
}

// =============================================================================
// 64-BIT VARIANTS
// =============================================================================

/// Single-lane 64-bit hash.
///
/// # Errors
/// Returns `PrvhashError::InvalidOutputLength` unless `out.len()` is a
/// positive multiple of 8.
///
/// # Example
/// ```rust
/// let mut out = [0u8; 8];
/// prvhash::hash64(b"", &mut out)?;
/// assert_eq!(out, [0x75, 0x27, 0x4a, 0xe3, 0xf2, 0x6d, 0xca, 0xfe]);
/// # Ok::<(), prvhash::PrvhashError>(())
/// ```
#[inline]
pub fn hash64(input: &[u8], out: &mut [u8]) -> Result<(), PrvhashError> {
    hash::<u64, 1>(input, out, 0)
}

/// Single-lane 64-bit hash with a seed override.
///
/// # Errors
/// Same conditions as [`hash64`].
#[inline]
pub fn hash64_seeded(input: &[u8], out: &mut [u8], seed: u64) -> Result<(), PrvhashError> {
    hash::<u64, 1>(input, out, seed)
}

/// Four-lane 64-bit hash, the high-throughput variant.
///
/// # Errors
/// Same conditions as [`hash64`].
#[inline]
pub fn hash64s(input: &[u8], out: &mut [u8]) -> Result<(), PrvhashError> {
    hash::<u64, STREAMED_LANES>(input, out, 0)
}

/// Four-lane 64-bit hash with a seed override.
///
/// # Errors
/// Same conditions as [`hash64`].
#[inline]
pub fn hash64s_seeded(input: &[u8], out: &mut [u8], seed: u64) -> Result<(), PrvhashError> {
    hash::<u64, STREAMED_LANES>(input, out, seed)
}

/// 8-byte single-lane hash returned as an integer.
///
/// Equals `u64::from_le_bytes` of [`hash64_seeded`] with an 8-byte output.
#[must_use]
pub fn hash64_64(input: &[u8], seed: u64) -> u64 {
    let mut hasher = Hasher::<u64, 1>::from_words(NonZeroUsize::MIN, seed);
    hasher.update(input);
    let mut out = [0u8; 8];
    hasher.finish(&mut out);
    u64::from_le_bytes(out)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a 256-bit streamed digest in constant time.
///
/// Lengths other than 32 bytes never match.
///
/// # Example
/// ```rust
/// let mut digest = [0u8; 32];
/// prvhash::hash64s(b"Secure Data", &mut digest)?;
/// assert!(prvhash::verify(b"Secure Data", &digest));
/// assert!(!prvhash::verify(b"Secure data", &digest));
/// # Ok::<(), prvhash::PrvhashError>(())
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8]) -> bool {
    if expected.len() != DIGEST_SIZE {
        return false;
    }
    let mut computed = [0u8; DIGEST_SIZE];
    if hash64s(input, &mut computed).is_err() {
        return false;
    }
    computed.as_slice().ct_eq(expected).into()
}
