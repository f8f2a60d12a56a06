//! Absorption Engine
//!
//! Streaming state machine shared by every hash variant and by the keystream.
//! It owns `LANES` independent `(Seed, Lcg)` pairs and the circular hash
//! array they fold input into:
//!
//! 1. **Absorb**: one block = one little-endian word per lane. Lane `i`
//!    injects its word and rounds on slot `cursor + i`; the cursor then moves
//!    by `LANES`.
//! 2. **Close**: the buffered tail plus padding sentinel form one last block,
//!    followed by blank steps until every slot has been mixed since input
//!    ended.
//! 3. **Squeeze**: per output word, every lane rounds on slot `cursor` and the
//!    lane outputs are XORed. The keystream squeezes without folding.
//!
//! Lane order inside a step is part of the output and must not change.

use crate::kernels::constants::{INIT_VECTOR_WARMUP_STEPS, MAX_BLOCK_BYTES, MAX_LANES};
use crate::kernels::core::Lane;
use crate::kernels::loader::{final_byte, MessageWords};
use crate::kernels::word::Word;
use crate::types::PrvhashError;
use core::num::NonZeroUsize;
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// ENGINE
// =============================================================================

/// Multi-lane absorption state. Wiped on drop.
#[derive(Clone)]
pub struct Absorber<W: Word, const LANES: usize> {
    lanes: [Lane<W>; LANES],
    hash: Vec<W>,
    cursor: usize,
    block: [u8; MAX_BLOCK_BYTES],
    block_fill: usize,
    absorbed: usize,
    fb: u8,
}

impl<W: Word, const LANES: usize> Absorber<W, LANES> {
    /// Bytes consumed per absorption step.
    pub const BLOCK_BYTES: usize = W::BYTES * LANES;

    const LANE_COUNT_OK: () = assert!(
        LANES >= 1 && LANES <= MAX_LANES,
        "lane count must be within 1..=MAX_LANES"
    );

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Engine producing `output_len` bytes, started from the zero-state
    /// shortcut with `seed` folded into lane 0.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidOutputLength` if `output_len` is zero or
    /// not a multiple of the word size.
    pub fn new(output_len: usize, seed: W) -> Result<Self, PrvhashError> {
        Ok(Self::from_words(Self::check_output_len(output_len)?, seed))
    }

    /// Infallible form of [`Self::new`] for a hash array of `words` words.
    pub fn from_words(words: NonZeroUsize, seed: W) -> Self {
        let mut hash = vec![W::default(); words.get()];
        hash[0] = W::ZERO_HASH;

        let mut lanes = [Lane::zero_state(); LANES];
        lanes[0].inject(seed);

        // Identical lanes diverge by chaining through slot 0 in order.
        if LANES > 1 {
            for lane in &mut lanes {
                lane.round(&mut hash[0]);
            }
        }

        Self::from_parts(lanes, hash)
    }

    /// Engine started from caller-supplied state instead of the zero-state
    /// shortcut.
    ///
    /// `hash_init` is the initial hash array (its length is the output
    /// length); `lane_init` holds each lane's `Seed` then `Lcg`, little-endian.
    /// Warm-up steps run before any input is accepted.
    ///
    /// # Errors
    /// Returns `PrvhashError::InvalidOutputLength` for a bad `hash_init`
    /// length, `PrvhashError::InvalidInitVectorLength` for a bad `lane_init`
    /// length.
    pub fn with_init_vector(
        hash_init: &[u8],
        lane_init: &[u8],
        seed: W,
    ) -> Result<Self, PrvhashError> {
        Self::check_output_len(hash_init.len())?;

        let expected = 2 * Self::BLOCK_BYTES;
        if lane_init.len() != expected {
            return Err(PrvhashError::InvalidInitVectorLength {
                expected,
                actual: lane_init.len(),
            });
        }

        let hash: Vec<W> = hash_init.chunks_exact(W::BYTES).map(W::load_le).collect();
        let mut lanes: [Lane<W>; LANES] = core::array::from_fn(|i| {
            let pair = &lane_init[i * 2 * W::BYTES..];
            Lane::new(W::load_le(pair), W::load_le(&pair[W::BYTES..]))
        });
        lanes[0].inject(seed);

        let mut engine = Self::from_parts(lanes, hash);
        for _ in 0..INIT_VECTOR_WARMUP_STEPS {
            engine.step(None);
        }
        Ok(engine)
    }

    fn from_parts(lanes: [Lane<W>; LANES], hash: Vec<W>) -> Self {
        let () = Self::LANE_COUNT_OK;
        Self {
            lanes,
            hash,
            cursor: 0,
            block: [0u8; MAX_BLOCK_BYTES],
            block_fill: 0,
            absorbed: 0,
            fb: 1,
        }
    }

    fn check_output_len(len: usize) -> Result<NonZeroUsize, PrvhashError> {
        let err = PrvhashError::InvalidOutputLength {
            len,
            word_bytes: W::BYTES,
        };
        if len % W::BYTES != 0 {
            return Err(err);
        }
        NonZeroUsize::new(len / W::BYTES).ok_or(err)
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Output length in bytes.
    pub fn output_len(&self) -> usize {
        self.hash.len() * W::BYTES
    }

    /// Absorbs `data`. Any chunking of a message absorbs identically.
    pub fn update(&mut self, mut data: &[u8]) {
        let Some(&last) = data.last() else {
            return;
        };
        self.fb = final_byte(last);
        self.absorbed = self.absorbed.saturating_add(data.len());

        let block_len = Self::BLOCK_BYTES;

        // Top up a partially filled block first
        if self.block_fill > 0 {
            let take = (block_len - self.block_fill).min(data.len());
            self.block[self.block_fill..self.block_fill + take].copy_from_slice(&data[..take]);
            self.block_fill += take;
            data = &data[take..];

            if self.block_fill < block_len {
                return;
            }

            let block = self.block;
            self.absorb_block(&block[..block_len]);
            self.block_fill = 0;
        }

        let mut blocks = data.chunks_exact(block_len);
        for block in &mut blocks {
            self.absorb_block(block);
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.block_fill = rest.len();
    }

    fn absorb_block(&mut self, block: &[u8]) {
        let mut words: [W; LANES] =
            core::array::from_fn(|i| W::load_le(&block[i * W::BYTES..]));
        self.step(Some(&words));
        words.zeroize();
    }

    /// Runs one absorption step: each lane, in order, optionally injects its
    /// word and rounds on slot `cursor + lane`.
    fn step(&mut self, input: Option<&[W; LANES]>) {
        let slots: [usize; LANES] = core::array::from_fn(|i| self.slot(i));

        for (i, lane) in self.lanes.iter_mut().enumerate() {
            if let Some(words) = input {
                lane.inject(words[i]);
            }
            lane.round(&mut self.hash[slots[i]]);
        }

        self.cursor = (self.cursor + LANES) % self.hash.len();
    }

    /// Hash slot that `lane` rounds on in the next absorption step.
    fn slot(&self, lane: usize) -> usize {
        (self.cursor + lane) % self.hash.len()
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Ends absorption: pads and absorbs the buffered tail, then runs blank
    /// steps so that no slot is emitted without having mixed with the input.
    pub fn close(&mut self) {
        self.absorb_tail();
        for _ in 0..self.blank_steps() {
            self.step(None);
        }
    }

    /// Pads the buffered bytes into one final block and absorbs it.
    fn absorb_tail(&mut self) {
        let mut words = [W::default(); LANES];
        let tail = MessageWords::<W>::with_final_byte(&self.block[..self.block_fill], self.fb);
        for (slot, word) in words.iter_mut().zip(tail) {
            *slot = word;
        }
        self.step(Some(&words));
        words.zeroize();
        self.block.zeroize();
        self.block_fill = 0;
    }

    /// Blank steps needed after the tail so every slot rounds at least once.
    /// Short inputs also cover the slots between the cursor and the end of
    /// the array that absorption never reached.
    fn blank_steps(&self) -> usize {
        let n = self.hash.len();
        let unfilled = if self.absorbed < self.output_len() {
            (n - self.cursor) % n
        } else {
            0
        };
        1 + (n + unfilled).div_ceil(LANES)
    }

    /// Runs one squeeze step: every lane, in order, rounds on slot `cursor`,
    /// which then advances by one. Returns the raw lane outputs.
    pub fn squeeze_step(&mut self) -> [W; LANES] {
        let slot = &mut self.hash[self.cursor];
        let mut out = [W::default(); LANES];
        for (o, lane) in out.iter_mut().zip(&mut self.lanes) {
            *o = lane.round(slot);
        }
        self.cursor = (self.cursor + 1) % self.hash.len();
        out
    }

    /// Squeezes `out.len() / W::BYTES` words into `out`, little-endian. Each
    /// word is the XOR of one squeeze step's lane outputs.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.output_len());
        for chunk in out.chunks_exact_mut(W::BYTES) {
            let word = self
                .squeeze_step()
                .into_iter()
                .fold(W::default(), |acc, w| acc ^ w);
            word.store_le(chunk);
        }
    }
}

// =============================================================================
// ZEROIZATION
// =============================================================================

impl<W: Word, const LANES: usize> Zeroize for Absorber<W, LANES> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.hash.zeroize();
        self.cursor.zeroize();
        self.block.zeroize();
        self.block_fill.zeroize();
        self.absorbed.zeroize();
        self.fb.zeroize();
    }
}

impl<W: Word, const LANES: usize> Drop for Absorber<W, LANES> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn oneshot<W: Word, const LANES: usize>(msg: &[u8], out_len: usize) -> Vec<u8> {
        let mut engine = Absorber::<W, LANES>::new(out_len, W::default()).unwrap();
        engine.update(msg);
        engine.close();
        let mut out = vec![0u8; out_len];
        engine.squeeze_into(&mut out);
        out
    }

    #[test]
    fn test_rejects_bad_output_length() {
        assert!(Absorber::<u64, 1>::new(0, 0).is_err());
        assert!(Absorber::<u64, 4>::new(12, 0).is_err());
        assert!(Absorber::<u32, 1>::new(6, 0).is_err());
        assert!(Absorber::<u8, 1>::new(1, 0).is_ok());
        assert!(Absorber::<u64, 4>::new(8, 0).is_ok());
    }

    #[test]
    fn test_init_vector_length_checks() {
        let hash_init = [0u8; 32];
        assert_eq!(
            Absorber::<u64, 4>::with_init_vector(&hash_init, &[0u8; 32], 0).err(),
            Some(PrvhashError::InvalidInitVectorLength {
                expected: 64,
                actual: 32
            })
        );
        assert!(Absorber::<u64, 4>::with_init_vector(&hash_init[..7], &[0u8; 64], 0).is_err());
        assert!(Absorber::<u64, 4>::with_init_vector(&hash_init, &[0u8; 64], 0).is_ok());
    }

    #[test]
    fn test_single_lane_zero_state_start() {
        let engine = Absorber::<u64, 1>::new(16, 0).unwrap();
        assert_eq!(engine.lanes[0], Lane::zero_state());
        assert_eq!(engine.hash, [u64::ZERO_HASH, 0]);
        assert_eq!(engine.cursor, 0);
    }

    #[test]
    fn test_multi_lane_start_diverges() {
        let engine = Absorber::<u64, 4>::new(32, 0).unwrap();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(engine.lanes[i], engine.lanes[j], "lanes {i} and {j} identical");
            }
        }
    }

    #[test]
    fn test_cursor_wraps_every_boundary() {
        // N=1, cursor at last slot, input exactly filling capacity
        for (out_len, msg_len) in [(8, 0), (8, 8), (16, 8), (16, 16), (24, 40), (32, 32)] {
            let msg = vec![0x5Au8; msg_len];
            let a = oneshot::<u64, 1>(&msg, out_len);
            let b = oneshot::<u64, 4>(&msg, out_len);
            assert_eq!(a.len(), out_len);
            assert_eq!(b.len(), out_len);
            assert_ne!(a, vec![0u8; out_len]);
        }
    }

    #[test]
    fn test_chunked_update_matches_single_update() {
        let msg: Vec<u8> = (0..200u8).collect();
        let expected = oneshot::<u64, 4>(&msg, 32);

        for split in [1, 7, 31, 32, 33, 64, 199] {
            let mut engine = Absorber::<u64, 4>::new(32, 0).unwrap();
            let (a, b) = msg.split_at(split);
            engine.update(a);
            engine.update(&[]);
            engine.update(b);
            engine.close();
            let mut out = vec![0u8; 32];
            engine.squeeze_into(&mut out);
            assert_eq!(out, expected, "split at {split}");
        }
    }

    fn slots_mixed_after_tail<const LANES: usize>(n: usize, cursor: usize, input_len: usize) {
        let mut engine = Absorber::<u64, LANES>::new(n * 8, 0).unwrap();
        engine.update(&vec![0x5Au8; input_len]);
        engine.cursor = cursor;
        engine.absorb_tail();

        let mut touched = vec![false; n];
        for _ in 0..engine.blank_steps() {
            for lane in 0..LANES {
                touched[engine.slot(lane)] = true;
            }
            engine.step(None);
        }
        assert!(
            touched.iter().all(|&t| t),
            "slots {touched:?} left unmixed: n={n}, cursor={cursor}, {LANES} lanes, {input_len} input bytes"
        );
    }

    #[test]
    fn test_blank_steps_mix_every_slot() {
        for n in [1, 2, 5, 16] {
            for cursor in [0, n - 1] {
                for input_len in [3, n * 8] {
                    slots_mixed_after_tail::<1>(n, cursor, input_len);
                    slots_mixed_after_tail::<4>(n, cursor, input_len);
                }
            }
        }
    }

    #[test]
    fn test_short_input_runs_extra_blank_steps() {
        let mut short = Absorber::<u64, 1>::new(5 * 8, 0).unwrap();
        short.update(b"abc");
        short.cursor = 2;
        let mut full = Absorber::<u64, 1>::new(5 * 8, 0).unwrap();
        full.update(&[0u8; 5 * 8]);
        full.cursor = 2;
        assert_eq!(full.blank_steps(), 1 + 5);
        assert_eq!(short.blank_steps(), 1 + 5 + 3);
    }

    #[test]
    fn test_zeroize_clears_state() {
        let mut engine = Absorber::<u64, 4>::new(32, 7).unwrap();
        engine.update(b"secret material");
        engine.zeroize();
        assert!(engine.lanes.iter().all(|l| *l == Lane::default()));
        assert!(engine.block.iter().all(|&b| b == 0));
        assert_eq!(engine.fb, 0);
        assert_eq!(engine.absorbed, 0);
    }
}
