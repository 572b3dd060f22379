//! Per-message choice between the two compression functions.

use crate::constants::{BLOCK_WORDS, FAST_ROUNDS};
use crate::hasher::Mode;
use crate::state::State;
use crate::{diffusion, fast_path, schedule};

/// Compression function selected once per message and applied to each of
/// its blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompressionStrategy {
    /// Temporal diffusion plus `rounds` compression rounds.
    Standard {
        /// Round count from the schedule, fixed for the whole message.
        rounds: usize,
    },
    /// Fixed 8-round unrolled path.
    Fast,
}

impl CompressionStrategy {
    /// Resolves the strategy for `message` under `mode`.
    ///
    /// The round schedule runs here, over the unpadded message, exactly
    /// once.
    pub(crate) fn for_message(message: &[u8], mode: Mode) -> Self {
        match mode {
            Mode::Normal => CompressionStrategy::Standard {
                rounds: schedule::rounds(message, mode),
            },
            Mode::Fast => CompressionStrategy::Fast,
        }
    }

    /// Number of compression rounds applied to each block.
    pub(crate) const fn rounds(&self) -> usize {
        match self {
            CompressionStrategy::Standard { rounds } => *rounds,
            CompressionStrategy::Fast => FAST_ROUNDS,
        }
    }

    /// Folds one parsed block into `state`, including the chaining step.
    #[inline]
    pub(crate) fn compress(&self, state: &mut State, block: &[u32; BLOCK_WORDS]) {
        match self {
            CompressionStrategy::Standard { rounds } => {
                diffusion::compress_block(state, block, *rounds)
            }
            CompressionStrategy::Fast => fast_path::compress_block(state, block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_message_normal_uses_schedule() {
        let strategy = CompressionStrategy::for_message(b"aaaaaaaaaa", Mode::Normal);
        assert_eq!(strategy, CompressionStrategy::Standard { rounds: 20 });
        assert_eq!(strategy.rounds(), 20);
    }

    #[test]
    fn test_for_message_fast() {
        let every_byte: Vec<u8> = (0..=255).collect();
        let strategy = CompressionStrategy::for_message(&every_byte, Mode::Fast);
        assert_eq!(strategy, CompressionStrategy::Fast);
        assert_eq!(strategy.rounds(), 8);
    }

    #[test]
    fn test_strategies_differ_on_same_block() {
        let block = [0x0102_0304u32; BLOCK_WORDS];
        let mut standard = State::new();
        let mut fast = State::new();
        CompressionStrategy::Standard { rounds: 8 }.compress(&mut standard, &block);
        CompressionStrategy::Fast.compress(&mut fast, &block);
        assert_ne!(standard, fast);
    }
}
