//! State Words
//!
//! One round definition serves every supported state width. The per-width
//! constants (alternating bit patterns, zero-state shortcut) are selected at
//! compile time through the [`Word`] trait.

use core::fmt::Debug;
use core::ops::{BitXor, BitXorAssign, Not};
use zeroize::Zeroize;

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// WORD TRAIT
// =============================================================================

/// Unsigned state word: `u8`, `u16`, `u32` or `u64`.
///
/// Sealed: the zero-state constants below are only valid for the widths
/// implemented in this module.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + Send
    + Sync
    + Zeroize
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + sealed::Sealed
    + 'static
{
    /// Word size in bytes.
    const BYTES: usize;
    /// Alternating `0xAA..` pattern folded into the hash word.
    const ALT_HASH: Self;
    /// Alternating `0x55..` pattern folded into `Lcg`.
    const ALT_LCG: Self;
    /// `Seed` after 5 rounds from the all-zero state.
    const ZERO_SEED: Self;
    /// `Lcg` after 5 rounds from the all-zero state.
    const ZERO_LCG: Self;
    /// Hash word after 5 rounds from the all-zero state.
    const ZERO_HASH: Self;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Modular multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Swaps the high and low halves of the word.
    fn rotate_half(self) -> Self;
    /// Reads a word from exactly `BYTES` little-endian bytes.
    fn load_le(bytes: &[u8]) -> Self;
    /// Writes the word as `BYTES` little-endian bytes.
    fn store_le(self, out: &mut [u8]);
    /// Keeps the low `BYTES` bytes of `v`.
    fn truncate_u64(v: u64) -> Self;
}

// =============================================================================
// IMPLEMENTATIONS
// =============================================================================

macro_rules! impl_word {
    ($t:ty, $alt_hash:expr, $alt_lcg:expr, $seed:expr, $lcg:expr, $hash:expr) => {
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const BYTES: usize = core::mem::size_of::<$t>();
            const ALT_HASH: Self = $alt_hash;
            const ALT_LCG: Self = $alt_lcg;
            const ZERO_SEED: Self = $seed;
            const ZERO_LCG: Self = $lcg;
            const ZERO_HASH: Self = $hash;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn rotate_half(self) -> Self {
                self.rotate_left(<$t>::BITS / 2)
            }

            #[inline]
            fn load_le(bytes: &[u8]) -> Self {
                let mut b = [0u8; core::mem::size_of::<$t>()];
                b.copy_from_slice(&bytes[..core::mem::size_of::<$t>()]);
                <$t>::from_le_bytes(b)
            }

            #[inline]
            fn store_le(self, out: &mut [u8]) {
                out[..core::mem::size_of::<$t>()].copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn truncate_u64(v: u64) -> Self {
                v as $t
            }
        }
    };
}

impl_word!(u8, 0xAA, 0x55, 0x18, 0x1C, 0xA8);
impl_word!(u16, 0xAAAA, 0x5555, 0x128D, 0x8D5B, 0x0932);
impl_word!(u32, 0xAAAA_AAAA, 0x5555_5555, 0xEE3E_2511, 0xCFFB_D59C, 0x804A_7AA1);
impl_word!(
    u64,
    0xAAAA_AAAA_AAAA_AAAA,
    0x5555_5555_5555_5555,
    0x2179_92B4_4669_F46A,
    0xB5E2_CC2F_E9F0_B35B,
    0x949B_5E0A_608D_76D5
);
