//! Stream Cipher
//!
//! XOR stream cipher over the firewalled keystream engine. The keystream is
//! keyed by `key || nonce`; encryption and decryption are the same
//! operation.
//!
//! No authentication is provided. Never reuse a `(key, nonce)` pair.

use crate::engine::keystream::Keystream;
use crate::kernels::constants::{KEY_ALIGN_BYTES, MAX_KEY_BYTES, MAX_NONCE_BYTES, MIN_KEY_BYTES};
use crate::types::PrvhashError;
use zeroize::Zeroize;

/// Keyed XOR stream cipher. Wiped on `finalize` and on drop.
///
/// # Example
/// ```rust
/// use prvhash::StreamCipher;
///
/// let key = [7u8; 32];
/// let nonce = [1u8; 8];
///
/// let mut data = *b"attack at dawn";
/// let mut enc = StreamCipher::new(&key, &nonce)?;
/// enc.apply_keystream(&mut data);
///
/// let mut dec = StreamCipher::new(&key, &nonce)?;
/// dec.apply_keystream(&mut data);
/// assert_eq!(&data, b"attack at dawn");
/// # Ok::<(), prvhash::PrvhashError>(())
/// ```
#[derive(Clone)]
pub struct StreamCipher {
    keystream: Keystream,
}

impl StreamCipher {
    /// Key the cipher.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidKeyLength` unless the key is 16..=128
    /// bytes and a multiple of 8, and `PrvhashError::InvalidNonceLength`
    /// unless the nonce is at most 96 bytes and a multiple of 8.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, PrvhashError> {
        if !(MIN_KEY_BYTES..=MAX_KEY_BYTES).contains(&key.len())
            || key.len() % KEY_ALIGN_BYTES != 0
        {
            return Err(PrvhashError::InvalidKeyLength(key.len()));
        }
        if nonce.len() > MAX_NONCE_BYTES || nonce.len() % KEY_ALIGN_BYTES != 0 {
            return Err(PrvhashError::InvalidNonceLength(nonce.len()));
        }

        // Key length as seed: shifting the key/nonce boundary changes the stream.
        let seed = key.len() as u64;
        Ok(Self {
            keystream: Keystream::new(seed, &[key, nonce]),
        })
    }

    /// XOR the next `data.len()` keystream bytes into `data`.
    ///
    /// Calls compose: any chunking of a buffer yields the same result as a
    /// single call.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        self.keystream.apply(data);
    }

    /// Wipe the cipher state.
    pub fn finalize(mut self) {
        self.zeroize();
    }
}

impl Zeroize for StreamCipher {
    fn zeroize(&mut self) {
        self.keystream.zeroize();
    }
}
