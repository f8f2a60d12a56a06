//! Word Loader & Tail Padding
//!
//! Turns message bytes into little-endian state words. The last word of every
//! message is a tail word: the remaining bytes (possibly none), then the
//! final-byte marker, then zero fill. A message whose length is an exact
//! multiple of the word size still gets a purely synthetic tail word, so
//! appending zero bytes always changes the word stream.

use super::constants::MAX_WORD_BYTES;
use super::word::Word;
use zeroize::Zeroize;

/// Final-byte marker of a message ending in `last`: `1 << (last >> 7)`.
///
/// Empty messages use `1`.
#[inline]
pub const fn final_byte(last: u8) -> u8 {
    1 << (last >> 7)
}

/// Builds the tail word from fewer than `W::BYTES` remaining bytes.
#[inline]
pub fn load_tail<W: Word>(rest: &[u8], fb: u8) -> W {
    debug_assert!(rest.len() < W::BYTES);
    let mut buf = [0u8; MAX_WORD_BYTES];
    buf[..rest.len()].copy_from_slice(rest);
    buf[rest.len()] = fb;
    let word = W::load_le(&buf[..W::BYTES]);
    buf.zeroize();
    word
}

// =============================================================================
// MESSAGE WORDS
// =============================================================================

/// Iterator over the padded word stream of a complete byte sequence.
///
/// Yields `len / W::BYTES` full words followed by exactly one tail word.
pub struct MessageWords<'a, W: Word> {
    rest: &'a [u8],
    fb: u8,
    done: bool,
    _word: core::marker::PhantomData<W>,
}

impl<'a, W: Word> MessageWords<'a, W> {
    /// Word stream of `msg`, padded with its own final-byte marker.
    pub fn new(msg: &'a [u8]) -> Self {
        let fb = msg.last().map_or(1, |&b| final_byte(b));
        Self::with_final_byte(msg, fb)
    }

    /// Word stream of `bytes` padded with a marker taken from elsewhere (the
    /// absorption engine only buffers the end of a longer message).
    pub const fn with_final_byte(bytes: &'a [u8], fb: u8) -> Self {
        Self {
            rest: bytes,
            fb,
            done: false,
            _word: core::marker::PhantomData,
        }
    }
}

impl<W: Word> Iterator for MessageWords<'_, W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        if self.rest.len() >= W::BYTES {
            let (word, rest) = self.rest.split_at(W::BYTES);
            self.rest = rest;
            return Some(W::load_le(word));
        }

        if self.done {
            return None;
        }
        self.done = true;
        Some(load_tail(self.rest, self.fb))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len() / W::BYTES + usize::from(!self.done);
        (n, Some(n))
    }
}

impl<W: Word> ExactSizeIterator for MessageWords<'_, W> {}
