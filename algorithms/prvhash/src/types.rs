//! Shared types used across the PRVHASH library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Configuration-contract violation, detected before any mixing happens.
///
/// Once a context is constructed every byte sequence is processed
/// successfully; these are the only failures the library reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrvhashError {
    /// Output length is zero or not a multiple of the word size.
    InvalidOutputLength {
        /// Requested length in bytes.
        len: usize,
        /// Word size in bytes.
        word_bytes: usize,
    },
    /// Lane init vector does not hold exactly one `(Seed, Lcg)` pair per lane.
    InvalidInitVectorLength {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },
    /// Cipher key outside 16..=128 bytes or not a multiple of 8.
    InvalidKeyLength(usize),
    /// Nonce longer than 96 bytes or not a multiple of 8.
    InvalidNonceLength(usize),
}

impl fmt::Display for PrvhashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOutputLength { len, word_bytes } => write!(
                f,
                "output length {len} must be a positive multiple of {word_bytes} bytes"
            ),
            Self::InvalidInitVectorLength { expected, actual } => write!(
                f,
                "lane init vector must be {expected} bytes, got {actual}"
            ),
            Self::InvalidKeyLength(len) => write!(
                f,
                "key length {len} must be 16..=128 bytes in steps of 8"
            ),
            Self::InvalidNonceLength(len) => write!(
                f,
                "nonce length {len} must be 0..=96 bytes in steps of 8"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for PrvhashError {}
