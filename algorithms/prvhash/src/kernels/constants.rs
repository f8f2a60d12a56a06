//! PRVHASH Constants
//!
//! Structural constants shared by the hash, keystream and generator engines.
//! Per-width round constants live on [`Word`](super::word::Word).
//!
//! All values belong to one revision of the construction. Mixing them with
//! another revision's counts produces neither revision's output.

use core::num::NonZeroUsize;

// =============================================================================
// LANES & BLOCKS
// =============================================================================

/// Widest supported state word, in bytes.
pub const MAX_WORD_BYTES: usize = 8;

/// Upper bound on parallel lanes in one engine.
pub const MAX_LANES: usize = 4;

/// Largest absorption block: one word per lane.
pub const MAX_BLOCK_BYTES: usize = MAX_WORD_BYTES * MAX_LANES;

/// Lane count of the streamed (multi-lane) hash variant.
pub const STREAMED_LANES: usize = 4;

// =============================================================================
// WARM-UP
// =============================================================================

/// Blank steps after loading a caller-supplied init vector.
pub const INIT_VECTOR_WARMUP_STEPS: usize = 5;

// =============================================================================
// KEYSTREAM
// =============================================================================

/// Hash array size of the keystream engine, in words.
pub const KEYSTREAM_HASH_WORDS: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(n) => n,
    None => panic!("keystream hash array must not be empty"),
};

/// Lane count of the keystream engine.
pub const KEYSTREAM_LANES: usize = 4;

/// Firewall lane count; each emits one word per keystream block.
pub const FIREWALL_LANES: usize = 2;

/// Firewall hash history length.
pub const FIREWALL_HISTORY: usize = 3;

/// Engine lane whose round output feeds each firewall lane.
pub const FIREWALL_TAPS: [usize; FIREWALL_LANES] = [1, 3];

/// Keystream blocks discarded after keying.
pub const FIREWALL_WARMUP_BLOCKS: usize = 5;

/// Keystream block: one 64-bit word per firewall lane.
pub const KEYSTREAM_BLOCK_BYTES: usize = FIREWALL_LANES * 8;

/// Seed override of the entropy-seeded generator. Cipher keys are at most
/// [`MAX_KEY_BYTES`] long, so this never collides with a cipher seed.
pub const GENERATOR_SEED: u64 = u64::MAX;

// =============================================================================
// CIPHER LIMITS
// =============================================================================

/// Shortest accepted cipher key, in bytes.
pub const MIN_KEY_BYTES: usize = 16;

/// Longest accepted cipher key, in bytes.
pub const MAX_KEY_BYTES: usize = 128;

/// Longest accepted nonce, in bytes.
pub const MAX_NONCE_BYTES: usize = 96;

/// Key and nonce lengths must be multiples of this.
pub const KEY_ALIGN_BYTES: usize = 8;

// =============================================================================
// DIGEST
// =============================================================================

/// Output size of the fixed-length digest wrapper (256 bits).
pub const DIGEST_SIZE: usize = 32;
