//! Round schedule: how many compression rounds a message gets.
//!
//! Normal mode scales with the number of distinct byte values in the whole
//! unpadded message, from 20 up to 32 rounds. Fast mode is a flat 8. The
//! count is computed once per message, before any block is processed, and
//! applied to every block of that message.

use crate::constants::{BASE_ROUNDS, FAST_ROUNDS, MAX_EXTRA_ROUNDS};
use crate::hasher::Mode;

/// Counts the distinct byte values present in `message` (0..=256).
pub fn unique_byte_count(message: &[u8]) -> usize {
    let mut seen = [false; 256];
    let mut unique = 0;
    for &byte in message {
        let slot = &mut seen[byte as usize];
        if !*slot {
            *slot = true;
            unique += 1;
            if unique == seen.len() {
                break;
            }
        }
    }
    unique
}

/// Returns the compression round count for `message` under `mode`.
///
/// # Parameters
/// - `message`: The complete unpadded message.
/// - `mode`: [`Mode::Fast`] always yields 8.
///
/// # Returns
/// For [`Mode::Normal`], `20 + floor(unique / 256 * 12)`, which lies in
/// `20..=32`. The empty message gets 20.
///
/// # Examples
///
/// ```
/// use chronohash::schedule::rounds;
/// use chronohash::Mode;
///
/// assert_eq!(rounds(&[b'a'; 10], Mode::Normal), 20);
/// let every_byte: Vec<u8> = (0..=255).collect();
/// assert_eq!(rounds(&every_byte, Mode::Normal), 32);
/// assert_eq!(rounds(&every_byte, Mode::Fast), 8);
/// ```
pub fn rounds(message: &[u8], mode: Mode) -> usize {
    match mode {
        Mode::Fast => FAST_ROUNDS,
        Mode::Normal => {
            if message.is_empty() {
                return BASE_ROUNDS;
            }
            let complexity = unique_byte_count(message) as f32 / 256.0;
            let extra = (complexity * MAX_EXTRA_ROUNDS as f32) as usize;
            BASE_ROUNDS + extra
        }
    }
}
