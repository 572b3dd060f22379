//! Fixed lookup tables and sizes for the ChronoHash compression function.
//!
//! These tables are process-wide immutable data. They are read by every
//! digest computation and never written, so concurrent callers share them
//! without synchronization.

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit little-endian words in one block.
pub const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Digest size in bytes (256 bits).
pub const DIGEST_SIZE: usize = 32;

/// Number of 32-bit words in the working state.
pub const STATE_WORDS: usize = 8;

/// Size of the big-endian bit-length trailer appended by framing.
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Compression rounds for an empty or minimally complex message.
pub const BASE_ROUNDS: usize = 20;

/// Upper bound on rounds added by the complexity schedule.
pub const MAX_EXTRA_ROUNDS: usize = 12;

/// Fixed round count of the fast path.
pub const FAST_ROUNDS: usize = 8;

/// Multiplicative mixing constants, one per state lane.
pub const PRIMES: [u32; STATE_WORDS] = [
    0x9E3779B9, // golden ratio * 2^32
    0x85EBCA6B,
    0xC2B2AE35,
    0x92D68CA2,
    0xA5CB9243,
    0xDF442D22,
    0x8B2B8C1F,
    0xCC9E2D51,
];

/// Initial state vector, derived from the digits of e, pi and phi.
///
/// Also re-added into the state after every block as the chaining step.
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x2B7E1516, 0x28AED2A6, 0xABF71588, 0x09CF4F3C, 0x762E7160, 0xF38B4DA5, 0x6A09E667, 0xBB67AE85,
];

/// Per-round rotation amounts, indexed by `round % 16`.
#[rustfmt::skip]
pub const ROTATIONS: [u32; 16] = [
    7, 12, 17, 22,
    5,  9, 14, 20,
    4, 11, 16, 23,
    6, 10, 15, 21,
];
