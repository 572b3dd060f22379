//! Byte/word conversion and hex encoding.
//!
//! Blocks are read as little-endian 32-bit words and the final state is
//! packed back out little-endian. Hex output is always lowercase.

use crate::constants::{BLOCK_SIZE, BLOCK_WORDS, DIGEST_SIZE, STATE_WORDS};
use crate::error::ChronoHashError;

/// Parses a 64-byte block into 16 little-endian words.
///
/// # Parameters
/// - `block`: Exactly one framed block.
///
/// # Returns
/// The block words, `words[i]` built from bytes `4i..4i+4`.
pub(crate) fn block_to_words(block: &[u8; BLOCK_SIZE]) -> [u32; BLOCK_WORDS] {
    let mut words = [0u32; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Packs the 8-word state into a 32-byte little-endian buffer.
pub(crate) fn words_to_bytes(words: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE] {
    let mut output = [0u8; DIGEST_SIZE];
    for (chunk, word) in output.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    output
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders bytes as lowercase hex, two characters per byte.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        output.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        output.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    output
}

/// Parses a 64-character hex string (either case) into digest bytes.
///
/// # Errors
/// Returns [`ChronoHashError::InvalidHexLength`] if `input` is not exactly
/// 64 characters, or [`ChronoHashError::InvalidHexDigit`] naming the first
/// offending character.
pub(crate) fn hex_to_digest_bytes(input: &str) -> Result<[u8; DIGEST_SIZE], ChronoHashError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != DIGEST_SIZE * 2 {
        return Err(ChronoHashError::InvalidHexLength { len: chars.len() });
    }
    let mut output = [0u8; DIGEST_SIZE];
    for (i, byte) in output.iter_mut().enumerate() {
        let high = hex_value(chars[2 * i], 2 * i)?;
        let low = hex_value(chars[2 * i + 1], 2 * i + 1)?;
        *byte = (high << 4) | low;
    }
    Ok(output)
}

fn hex_value(found: char, position: usize) -> Result<u8, ChronoHashError> {
    found
        .to_digit(16)
        .map(|v| v as u8)
        .ok_or(ChronoHashError::InvalidHexDigit { position, found })
}
