//! Fast-path compression: 8 fixed, unrolled rounds with no temporal
//! diffusion.
//!
//! Round `r` rotates by `ROTATIONS[r]` (7, 12, 17, 22, 5, 9, 14, 20) and
//! lane `i` reads block word `(i + r) mod 16`. Lanes update in place in
//! index order, so lane 3 onwards see the already-updated lanes they
//! reference:
//!
//! ```text
//! t = ((s[i] ^ rotl(s[i+1], rot)) + s[i+5]) ^ d
//! s[i] += t * PRIMES[i]
//! ```
//!
//! This is a distinct function from the standard path, not a faster
//! rendering of it. The two modes give different digests for the same
//! message.

use crate::constants::{BLOCK_WORDS, PRIMES, ROTATIONS};
use crate::state::State;
use crate::utils::bits::word_left_rotation;

/// One lane step: `$s[$i] += (((s[i] ^ rotl(s[b], rot)) + s[c]) ^ d) * PRIMES[i]`.
macro_rules! lane {
    ($s:ident, $data:ident, $round:expr, $rot:expr, $i:expr, $b:expr, $c:expr) => {{
        let d = $data[($i + $round) % BLOCK_WORDS];
        let t = ($s[$i] ^ word_left_rotation($s[$b], $rot)).wrapping_add($s[$c]) ^ d;
        $s[$i] = $s[$i].wrapping_add(t.wrapping_mul(PRIMES[$i]));
    }};
}

/// One full round, lanes 0..7 in order.
macro_rules! round {
    ($s:ident, $data:ident, $round:expr) => {{
        let rot = ROTATIONS[$round];
        lane!($s, $data, $round, rot, 0, 1, 5);
        lane!($s, $data, $round, rot, 1, 2, 6);
        lane!($s, $data, $round, rot, 2, 3, 7);
        lane!($s, $data, $round, rot, 3, 4, 0);
        lane!($s, $data, $round, rot, 4, 5, 1);
        lane!($s, $data, $round, rot, 5, 6, 2);
        lane!($s, $data, $round, rot, 6, 7, 3);
        lane!($s, $data, $round, rot, 7, 0, 4);
    }};
}

/// Folds one block into `state` on the fast path, then chains.
pub(crate) fn compress_block(state: &mut State, data: &[u32; BLOCK_WORDS]) {
    let s = state.words_mut();

    round!(s, data, 0);
    round!(s, data, 1);
    round!(s, data, 2);
    round!(s, data, 3);
    round!(s, data, 4);
    round!(s, data, 5);
    round!(s, data, 6);
    round!(s, data, 7);

    state.chain();
}
