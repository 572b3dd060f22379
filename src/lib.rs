//! ChronoHash: an experimental 256-bit hash function.
//!
//! ChronoHash frames a message into 64-byte blocks with Merkle–Damgård
//! length strengthening and folds each block into an 8-word state. Two
//! compression functions are available, chosen per engine:
//!
//! - **Normal**: a forward-cascading temporal diffusion step, then 20 to 32
//!   rotation-XOR-multiply rounds. The round count grows with the number of
//!   distinct byte values in the whole message.
//! - **Fast**: 8 fixed, unrolled rounds with a simpler lane formula and no
//!   diffusion step.
//!
//! The two modes are different functions and produce different digests.
//!
//! ChronoHash is not audited. Do not use it where a vetted hash such as
//! SHA-256 or BLAKE3 is required.
//!
//! # Architecture
//!
//! ```text
//! schedule   (round count from the whole unpadded message, once)
//!     │
//! padding    (message ‖ 0x80 ‖ 0x00* ‖ be64(bits) → 64-byte blocks)
//!     │
//! strategy ──► diffusion  (standard: temporal diffusion + N rounds)
//!     │    └─► fast_path  (8 unrolled rounds)
//!     │        then chain: state += INITIAL_STATE, after every block
//! state      (8 × u32, packed little-endian into the 32-byte Digest)
//! ```
//!
//! # Examples
//!
//! ```
//! use chronohash::{ChronoHash, Mode};
//!
//! let normal = ChronoHash::new(Mode::Normal);
//! let fast = ChronoHash::new(Mode::Fast);
//!
//! let a = normal.digest(b"Hello, World!");
//! let b = fast.digest(b"Hello, World!");
//! assert_eq!(a.as_bytes().len(), 32);
//! assert_ne!(a, b);
//!
//! assert_eq!(chronohash::hex_digest(b"Hello, World!"), a.to_hex());
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]

pub mod error;
pub mod padding;
pub mod schedule;

pub(crate) mod constants;
mod diffusion;
mod digest;
mod fast_path;
mod hasher;
#[cfg(feature = "parallel")]
pub mod parallel;
pub(crate) mod state;
pub(crate) mod strategy;
pub(crate) mod utils;

pub use constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use digest::Digest;
pub use error::ChronoHashError;
pub use hasher::{
    digest, digest_with, hash_fast, hash_normal, hex_digest, ChronoHash, HasherConfig, Mode,
};
