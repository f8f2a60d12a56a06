//! Keystream Engine
//!
//! Keys a 4-lane, 16-word 64-bit absorber with the caller's material, closes
//! it, then squeezes continuously. Every squeeze step yields one raw output
//! per lane; lanes 1 and 3 are tapped into the [`Firewall`], whose two
//! outputs form one 16-byte keystream block.
//!
//! Unused block bytes carry over between calls, so the stream does not
//! depend on how the caller chunks its requests.

use super::absorb::Absorber;
use super::firewall::Firewall;
use crate::kernels::constants::{
    FIREWALL_TAPS, FIREWALL_WARMUP_BLOCKS, KEYSTREAM_BLOCK_BYTES, KEYSTREAM_HASH_WORDS,
    KEYSTREAM_LANES,
};
use crate::kernels::word::Word;
use zeroize::Zeroize;

/// Keyed pseudo-random byte stream. Wiped on drop.
#[derive(Clone)]
pub struct Keystream {
    engine: Absorber<u64, KEYSTREAM_LANES>,
    firewall: Firewall<u64>,
    block: [u8; KEYSTREAM_BLOCK_BYTES],
    pos: usize,
}

impl Keystream {
    /// Absorbs each part of `material` in order under `seed`, closes the
    /// engine and discards the warm-up blocks.
    pub fn new(seed: u64, material: &[&[u8]]) -> Self {
        let mut engine = Absorber::from_words(KEYSTREAM_HASH_WORDS, seed);
        for part in material {
            engine.update(part);
        }
        engine.close();

        let mut stream = Self {
            engine,
            firewall: Firewall::new(),
            block: [0u8; KEYSTREAM_BLOCK_BYTES],
            pos: KEYSTREAM_BLOCK_BYTES,
        };
        for _ in 0..FIREWALL_WARMUP_BLOCKS {
            stream.refill();
        }
        stream.pos = KEYSTREAM_BLOCK_BYTES;
        stream
    }

    fn refill(&mut self) {
        let lanes = self.engine.squeeze_step();
        let out = self.firewall.step(FIREWALL_TAPS.map(|i| lanes[i]));
        for (chunk, word) in self.block.chunks_exact_mut(8).zip(out) {
            word.store_le(chunk);
        }
        self.pos = 0;
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    pub fn apply(&mut self, mut data: &mut [u8]) {
        while !data.is_empty() {
            if self.pos == KEYSTREAM_BLOCK_BYTES {
                self.refill();
            }
            let take = (KEYSTREAM_BLOCK_BYTES - self.pos).min(data.len());
            let (head, rest) = core::mem::take(&mut data).split_at_mut(take);
            for (b, k) in head.iter_mut().zip(&self.block[self.pos..self.pos + take]) {
                *b ^= k;
            }
            self.pos += take;
            data = rest;
        }
    }

    /// Overwrites `out` with the next keystream bytes.
    pub fn fill(&mut self, out: &mut [u8]) {
        out.fill(0);
        self.apply(out);
    }

    /// Next 8 keystream bytes as a little-endian word.
    pub fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill(&mut buf);
        u64::from_le_bytes(buf)
    }
}

impl Zeroize for Keystream {
    fn zeroize(&mut self) {
        self.engine.zeroize();
        self.firewall.zeroize();
        self.block.zeroize();
        self.pos.zeroize();
    }
}

impl Drop for Keystream {
    fn drop(&mut self) {
        self.zeroize();
    }
}
