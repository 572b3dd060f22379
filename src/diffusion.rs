//! Standard-path compression: temporal diffusion followed by a variable
//! number of rotation-XOR-multiply rounds.
//!
//! ```text
//! block words ──► temporal_diffusion ──► compression_round × rounds ──► chain
//!                   (forward cascade        (rotation from ROTATIONS,     (+ INITIAL_STATE)
//!                    i → i+1, i+2, i+3)      prime per lane)
//! ```
//!
//! Both phases compute every lane from a snapshot of the state taken at the
//! start of the phase, so lane order inside a pass does not matter.

use crate::constants::{BLOCK_WORDS, PRIMES, ROTATIONS, STATE_WORDS};
use crate::state::State;
use crate::utils::bits::word_left_rotation;

/// Number of forward neighbours each lane pushes into during diffusion.
const CASCADE_SPAN: usize = 3;

/// Prime-keyed mixing function used by temporal diffusion.
///
/// ```text
/// t = rotl((a ^ b) + c, 13) * p
/// t = rotl(t ^ (t >> 16), 5) + p
/// ```
#[inline]
pub(crate) fn mix(a: u32, b: u32, c: u32, prime: u32) -> u32 {
    let mut t = (a ^ b).wrapping_add(c);
    t = word_left_rotation(t, 13);
    t = t.wrapping_mul(prime);
    t ^= t >> 16;
    t = word_left_rotation(t, 5);
    t.wrapping_add(prime)
}

/// Selects which block word feeds lane `lane` in round `round`.
///
/// The canonical rule is `(lane + round) mod data_len`. When `data_len` is a
/// power of two (always, today: blocks are 16 words) it reduces to a mask.
/// The modulo form stays as the fallback so a different block width keeps
/// the same semantics.
#[inline]
pub(crate) const fn data_index(lane: usize, round: usize, data_len: usize) -> usize {
    let raw = lane + round;
    if data_len.is_power_of_two() {
        raw & (data_len - 1)
    } else {
        raw % data_len
    }
}

/// Temporal diffusion: each lane cascades its data-keyed value onto the next
/// three lanes (mod 8), then is replaced by [`mix`] of itself and its right
/// neighbour.
///
/// Every read comes from the pre-diffusion snapshot. Lanes run in index
/// order, so cascade XORs that land on lane `i` before its own `mix` are
/// discarded and only those from later lanes survive.
pub(crate) fn temporal_diffusion(state: &mut State, data: &[u32; BLOCK_WORDS]) {
    let snapshot = *state.words();
    let next = state.words_mut();

    for i in 0..STATE_WORDS {
        let influence = data[i % data.len()];
        let pushed = snapshot[i].wrapping_add(influence);

        for offset in 1..=CASCADE_SPAN {
            let target = (i + offset) % STATE_WORDS;
            next[target] ^= word_left_rotation(pushed, (offset as u32) * 4);
        }

        next[i] = mix(
            snapshot[i],
            snapshot[(i + 1) % STATE_WORDS],
            influence,
            PRIMES[i],
        );
    }
}

/// One compression round over all 8 lanes.
///
/// For lane `i`, with `a, b, c` read from the round's starting snapshot at
/// `i, i+1, i+5` (mod 8) and `d = data[(i + round) mod 16]`:
///
/// ```text
/// t = ((a ^ rotl(b, ROTATIONS[round % 16])) + c) ^ d
/// state[i] += rotl(t * PRIMES[i], 11)
/// ```
pub(crate) fn compression_round(state: &mut State, data: &[u32; BLOCK_WORDS], round: usize) {
    let snapshot = *state.words();
    let rotation = ROTATIONS[round % ROTATIONS.len()];
    let lanes = state.words_mut();

    for (i, lane) in lanes.iter_mut().enumerate() {
        let a = snapshot[i];
        let b = snapshot[(i + 1) % STATE_WORDS];
        let c = snapshot[(i + 5) % STATE_WORDS];
        let d = data[data_index(i, round, data.len())];

        let mut t = (a ^ word_left_rotation(b, rotation)).wrapping_add(c);
        t ^= d;
        t = t.wrapping_mul(PRIMES[i]);
        t = word_left_rotation(t, 11);

        *lane = lane.wrapping_add(t);
    }
}

/// Folds one block into `state` on the standard path: diffusion, `rounds`
/// compression rounds, then chaining.
pub(crate) fn compress_block(state: &mut State, data: &[u32; BLOCK_WORDS], rounds: usize) {
    temporal_diffusion(state, data);
    for round in 0..rounds {
        compression_round(state, data, round);
    }
    state.chain();
}
