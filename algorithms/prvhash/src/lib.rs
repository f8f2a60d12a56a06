#![cfg_attr(not(feature = "std"), no_std)]

//! # PRVHASH
//!
//! Hash functions, a pseudo-random generator and a stream cipher built on a
//! single entropy-accumulating round over `(Seed, Lcg, Hash)` words.
//! Word width (8 to 64 bits) and lane count are compile-time parameters;
//! output length is any positive multiple of the word size.

//! # Usage
//! ```rust
//! use prvhash::{Hasher64s, StreamCipher};
//!
//! // 1. One-shot hashing (any multiple of 8 bytes)
//! let mut digest = [0u8; 32];
//! prvhash::hash64s(b"Performance Matters", &mut digest)?;
//!
//! // 2. Constant-time verification
//! assert!(prvhash::verify(b"Performance Matters", &digest));
//!
//! // 3. Streaming (same digest as one-shot)
//! let mut hasher = Hasher64s::new(32)?;
//! hasher.update(b"Performance ");
//! hasher.update(b"Matters");
//! assert_eq!(hasher.finalize(), digest);
//!
//! // 4. Stream cipher
//! let mut data = *b"secret";
//! StreamCipher::new(&[0u8; 16], &[])?.apply_keystream(&mut data);
//! # Ok::<(), prvhash::PrvhashError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod cipher;
mod engine;
// Re-export internal kernels for testing, but hide from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod rng;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use cipher::StreamCipher;
#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::word::Word;
pub use oneshot::{hash, hash64, hash64_64, hash64_seeded, hash64s, hash64s_seeded, verify};
pub use rng::Generator;
#[cfg(feature = "digest-trait")]
pub use streaming::Prvhash64s256;
pub use streaming::{Hasher, Hasher16, Hasher32, Hasher64, Hasher64s, Hasher8};
pub use types::PrvhashError;
