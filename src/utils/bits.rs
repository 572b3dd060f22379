//! 32-bit word rotation primitives.
//!
//! All state arithmetic in ChronoHash is on `u32` words modulo 2^32. Adds
//! and multiplies go through `wrapping_add` / `wrapping_mul` at the call
//! site; the rotations live here so both compression paths share one
//! definition of the shift amount semantics.

/// Rotates a 32-bit word left by `shift` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Number of bit positions. Taken modulo 32, so a shift of 32
///   is the identity.
///
/// # Returns
/// The rotated word.
#[inline(always)]
pub(crate) const fn word_left_rotation(value: u32, shift: u32) -> u32 {
    value.rotate_left(shift & 31)
}

/// Rotates a 32-bit word right by `shift` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Number of bit positions, taken modulo 32.
///
/// # Returns
/// The rotated word.
#[inline(always)]
#[allow(dead_code)]
pub(crate) const fn word_right_rotation(value: u32, shift: u32) -> u32 {
    value.rotate_right(shift & 31)
}
