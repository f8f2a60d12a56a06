//! Output Firewall
//!
//! Two extra lanes stand between the keystream engine and the caller. Each
//! one takes a raw engine lane output into its `Seed`, rounds against a small
//! private hash history, and only its round output is ever emitted. The
//! engine's own state is therefore never exposed directly.

use crate::kernels::constants::{FIREWALL_HISTORY, FIREWALL_LANES};
use crate::kernels::core::Lane;
use crate::kernels::word::Word;
use zeroize::Zeroize;

/// Firewall lanes and their rotating hash history.
#[derive(Clone)]
pub struct Firewall<W: Word> {
    lanes: [Lane<W>; FIREWALL_LANES],
    history: [W; FIREWALL_HISTORY],
}

impl<W: Word> Firewall<W> {
    /// Both lanes at the zero-state shortcut, history seeded like a fresh
    /// hash array.
    pub fn new() -> Self {
        let mut history = [W::default(); FIREWALL_HISTORY];
        history[0] = W::ZERO_HASH;
        Self {
            lanes: [Lane::zero_state(); FIREWALL_LANES],
            history,
        }
    }

    /// Feeds one tapped engine output into each lane and returns the lane
    /// outputs. Lane `f` rounds on history slot `f`; the history then
    /// rotates left by one, so slot 1 moves to the front and slot 0 to the
    /// back.
    pub fn step(&mut self, taps: [W; FIREWALL_LANES]) -> [W; FIREWALL_LANES] {
        let mut out = [W::default(); FIREWALL_LANES];
        for (f, lane) in self.lanes.iter_mut().enumerate() {
            lane.seed ^= taps[f];
            out[f] = lane.round(&mut self.history[f]);
        }
        self.history.rotate_left(1);
        out
    }
}

impl<W: Word> Default for Firewall<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Zeroize for Firewall<W> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.history.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_rotates() {
        let mut fw = Firewall::<u64>::new();
        let before = fw.history;
        fw.step([0, 0]);
        // Rounded slots 0 and 1 shift left; untouched slot 2 lands in the middle.
        assert_eq!(fw.history[1], before[2]);
        assert_ne!(fw.history[0], before[1]);
        assert_ne!(fw.history[2], before[0]);

        let mid = fw.history;
        fw.step([0, 0]);
        assert_eq!(fw.history[1], mid[2]);
    }

    #[test]
    fn test_taps_change_output() {
        let mut a = Firewall::<u64>::new();
        let mut b = Firewall::<u64>::new();
        let out_a = a.step([1, 2]);
        let out_b = b.step([1, 3]);
        assert_eq!(out_a[0], out_b[0]);
        assert_ne!(out_a[1], out_b[1]);
    }

    #[test]
    fn test_deterministic() {
        let mut a = Firewall::<u32>::new();
        let mut b = a.clone();
        for i in 0..10u32 {
            assert_eq!(a.step([i, !i]), b.step([i, !i]));
        }
    }
}
