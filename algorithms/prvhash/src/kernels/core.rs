//! Core Round
//!
//! The single state-mixing step every construction in this crate is built
//! from. It acts on a `(Seed, Lcg, Hash)` triple of one word width:
//!
//! ```text
//! Seed *= Lcg - !Lcg          // odd multiplier, 2 * Lcg + 1
//! rs    = rotate(Seed, W / 2)
//! Hash += rs + 0xAA..
//! Lcg  += Seed + 0x55..
//! Seed ^= Hash
//! out   = Lcg ^ rs
//! ```
//!
//! Feeding the accumulated hash word back into `Seed` couples every hash
//! array slot into later rounds, which is what extends the period of the
//! array beyond that of a single word.

use super::word::Word;
use zeroize::Zeroize;

// =============================================================================
// ROUND
// =============================================================================

/// Runs one round, returning the round output. Branchless, O(1).
#[inline(always)]
pub fn round<W: Word>(seed: &mut W, lcg: &mut W, hash: &mut W) -> W {
    let l = *lcg;
    let s = seed.wrapping_mul(l.wrapping_sub(!l));
    let rs = s.rotate_half();
    let h = hash.wrapping_add(rs.wrapping_add(W::ALT_HASH));
    let l = l.wrapping_add(s.wrapping_add(W::ALT_LCG));

    *hash = h;
    *lcg = l;
    *seed = s ^ h;

    l ^ rs
}

// =============================================================================
// LANE
// =============================================================================

/// One independent `(Seed, Lcg)` pair driving hash array slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lane<W: Word> {
    /// Multiplicative state.
    pub seed: W,
    /// Additive state, also the input entry point.
    pub lcg: W,
}

impl<W: Word> Lane<W> {
    /// Lane holding the given state.
    pub const fn new(seed: W, lcg: W) -> Self {
        Self { seed, lcg }
    }

    /// Lane at the state reached by 5 rounds from all-zero.
    pub const fn zero_state() -> Self {
        Self::new(W::ZERO_SEED, W::ZERO_LCG)
    }

    /// Folds an input word into both state variables.
    #[inline(always)]
    pub fn inject(&mut self, word: W) {
        self.seed ^= word;
        self.lcg ^= word;
    }

    /// Runs one round against `hash`.
    #[inline(always)]
    pub fn round(&mut self, hash: &mut W) -> W {
        round(&mut self.seed, &mut self.lcg, hash)
    }
}

impl<W: Word> Zeroize for Lane<W> {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.lcg.zeroize();
    }
}
