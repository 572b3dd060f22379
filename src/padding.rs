//! Message framing: Merkle–Damgård length strengthening.
//!
//! The message is followed by a single `0x80` byte, zero bytes up to
//! 56 mod 64, and the original length in bits as a big-endian `u64`. The
//! result is always a non-empty whole number of 64-byte blocks, so even the
//! empty message yields one block.
//!
//! Messages longer than `u64::MAX / 8` bytes cannot have their bit length
//! represented in the trailer. The count wraps in that case; such inputs are
//! outside the supported domain.

use crate::constants::{BLOCK_SIZE, BLOCK_WORDS, LENGTH_FIELD_SIZE};
use crate::utils::converter;

/// Terminator byte appended directly after the message.
const TERMINATOR: u8 = 0x80;

/// Returns the framed length for a message of `message_len` bytes.
///
/// Always a positive multiple of [`BLOCK_SIZE`].
///
/// # Examples
///
/// ```
/// use chronohash::padding::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// ```
pub fn padded_len(message_len: usize) -> usize {
    let unpadded = message_len + 1 + LENGTH_FIELD_SIZE;
    unpadded.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Frames `message` into whole blocks.
///
/// # Parameters
/// - `message`: Any byte sequence, including the empty one.
///
/// # Returns
/// `message || 0x80 || 0x00* || be64(len * 8)` with a length that is a
/// positive multiple of 64.
///
/// # Examples
///
/// ```
/// use chronohash::padding::pad;
///
/// let framed = pad(b"abc");
/// assert_eq!(framed.len(), 64);
/// assert_eq!(framed[3], 0x80);
/// assert_eq!(&framed[56..], &24u64.to_be_bytes());
/// ```
pub fn pad(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());
    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(TERMINATOR);
    padded.resize(total - LENGTH_FIELD_SIZE, 0x00);

    let bit_len = (message.len() as u64).wrapping_mul(8);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    padded
}

/// Iterates over a framed buffer as parsed 16-word blocks.
///
/// `padded` must come from [`pad`]; a trailing partial block is ignored.
pub(crate) fn blocks(padded: &[u8]) -> impl Iterator<Item = [u32; BLOCK_WORDS]> + '_ {
    padded.chunks_exact(BLOCK_SIZE).map(|chunk| {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        converter::block_to_words(&block)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_empty_message_is_one_block() {
        let padded = pad(b"");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_boundaries() {
        assert_eq!(pad(&[0x41; 55]).len(), 64);
        assert_eq!(pad(&[0x41; 56]).len(), 128);
        assert_eq!(pad(&[0x41; 63]).len(), 128);
        assert_eq!(pad(&[0x41; 64]).len(), 128);
        assert_eq!(pad(&[0x41; 119]).len(), 128);
        assert_eq!(pad(&[0x41; 120]).len(), 192);
    }

    #[test]
    fn test_pad_preserves_message_prefix() {
        let message = b"The quick brown fox jumps over the lazy dog";
        let padded = pad(message);
        assert_eq!(&padded[..message.len()], message);
        assert_eq!(padded[message.len()], 0x80);
    }

    #[test]
    fn test_pad_length_trailer_is_big_endian_bits() {
        let padded = pad(&[0u8; 100]);
        assert_eq!(padded.len(), 128);
        assert_eq!(&padded[120..], &[0, 0, 0, 0, 0, 0, 0x03, 0x20]);
    }

    #[test]
    fn test_padded_len_matches_pad() {
        for len in 0..300 {
            let message = vec![0xAAu8; len];
            assert_eq!(pad(&message).len(), padded_len(len), "len={}", len);
        }
    }

    #[test]
    fn test_blocks_parses_every_block() {
        let padded = pad(&[0x11; 70]);
        let parsed: Vec<_> = blocks(&padded).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0][0], 0x1111_1111);
        // byte 70 is the terminator: word 1 of block 1 is [0x11, 0x11, 0x80, 0x00]
        assert_eq!(parsed[1][1], 0x0080_1111);
        assert_eq!(parsed[1][15], (70u32 * 8).swap_bytes());
    }

    proptest::proptest! {
        #[test]
        fn pad_is_whole_blocks_with_trailer(message in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512)) {
            let padded = pad(&message);
            proptest::prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
            proptest::prop_assert!(padded.len() >= BLOCK_SIZE);
            proptest::prop_assert!(padded.len() - message.len() <= BLOCK_SIZE + LENGTH_FIELD_SIZE);
            proptest::prop_assert_eq!(&padded[..message.len()], &message[..]);
            let trailer: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
            proptest::prop_assert_eq!(u64::from_be_bytes(trailer), message.len() as u64 * 8);
        }
    }
}
