//! The 8-word working state of one digest computation.

use crate::constants::{DIGEST_SIZE, INITIAL_STATE, STATE_WORDS};
use crate::utils::converter;

/// 256-bit accumulator folded across a message's blocks.
///
/// A fresh `State` is created for every digest call and consumed when the
/// digest is packed, so no two computations ever share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State {
    words: [u32; STATE_WORDS],
}

impl State {
    /// Creates a state loaded with [`INITIAL_STATE`].
    pub(crate) const fn new() -> Self {
        State {
            words: INITIAL_STATE,
        }
    }

    #[cfg(test)]
    pub(crate) const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        State { words }
    }

    /// Returns the current words.
    pub(crate) const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Returns the current words for in-place update by a compression pass.
    pub(crate) fn words_mut(&mut self) -> &mut [u32; STATE_WORDS] {
        &mut self.words
    }

    /// Block chaining: adds [`INITIAL_STATE`] word-wise, modulo 2^32.
    ///
    /// Runs after every block, not only the last one.
    pub(crate) fn chain(&mut self) {
        for (word, &iv) in self.words.iter_mut().zip(INITIAL_STATE.iter()) {
            *word = word.wrapping_add(iv);
        }
    }

    /// Packs the final state little-endian into digest bytes.
    pub(crate) fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        converter::words_to_bytes(&self.words)
    }
}
