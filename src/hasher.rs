//! ChronoHash: the digest engine.
//!
//! Orchestrates one digest computation: the round schedule over the whole
//! message, framing into 64-byte blocks, per-block compression through the
//! selected [`CompressionStrategy`], and packing of the final state.
//!
//! An engine holds only its mode. Every call builds its own state, so a
//! single `ChronoHash` can be shared across threads and called
//! concurrently.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::constants::BLOCK_SIZE;
use crate::digest::Digest;
use crate::error::ChronoHashError;
use crate::padding;
use crate::schedule;
use crate::state::State;
use crate::strategy::CompressionStrategy;

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Temporal diffusion plus 20-32 rounds chosen from input complexity.
    #[default]
    Normal,
    /// Fixed 8 unrolled rounds, no temporal diffusion.
    Fast,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => f.write_str("normal"),
            Mode::Fast => f.write_str("fast"),
        }
    }
}

impl FromStr for Mode {
    type Err = ChronoHashError;

    /// Accepts `normal`, `standard` or `fast`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "standard" => Ok(Mode::Normal),
            "fast" => Ok(Mode::Fast),
            _ => Err(ChronoHashError::UnknownMode(s.to_string())),
        }
    }
}

/// Construction-time options for [`ChronoHash`].
///
/// `fast_mode` is the only option. Block and digest sizes are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HasherConfig {
    /// Select the fast path instead of the standard path.
    pub fast_mode: bool,
}

impl HasherConfig {
    /// Returns the [`Mode`] this configuration selects.
    pub const fn mode(&self) -> Mode {
        if self.fast_mode {
            Mode::Fast
        } else {
            Mode::Normal
        }
    }
}

impl From<Mode> for HasherConfig {
    fn from(mode: Mode) -> Self {
        HasherConfig {
            fast_mode: mode == Mode::Fast,
        }
    }
}

/// 256-bit hash engine.
///
/// # Examples
///
/// ```
/// use chronohash::{ChronoHash, Mode};
///
/// let hasher = ChronoHash::new(Mode::Fast);
/// let hex = hasher.hex_digest(b"Hello, World!");
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex, hasher.digest(b"Hello, World!").to_hex());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChronoHash {
    mode: Mode,
}

impl ChronoHash {
    /// Creates an engine for the given mode.
    pub const fn new(mode: Mode) -> Self {
        ChronoHash { mode }
    }

    /// Creates an engine from a [`HasherConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chronohash::{ChronoHash, HasherConfig, Mode};
    ///
    /// let hasher = ChronoHash::with_config(HasherConfig { fast_mode: true });
    /// assert_eq!(hasher.mode(), Mode::Fast);
    /// ```
    pub const fn with_config(config: HasherConfig) -> Self {
        ChronoHash {
            mode: config.mode(),
        }
    }

    /// Returns the engine's mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> HasherConfig {
        HasherConfig::from(self.mode)
    }

    /// Round count this engine applies to every block of `message`.
    pub fn rounds_for(&self, message: &[u8]) -> usize {
        schedule::rounds(message, self.mode)
    }

    /// Computes the digest of `message`.
    ///
    /// Total and deterministic: any byte sequence, including the empty one,
    /// has exactly one digest per mode.
    pub fn digest(&self, message: &[u8]) -> Digest {
        let strategy = CompressionStrategy::for_message(message, self.mode);
        let padded = padding::pad(message);

        trace!(
            target: "chronohash::hasher",
            len = message.len(),
            mode = %self.mode,
            rounds = strategy.rounds(),
            blocks = padded.len() / BLOCK_SIZE,
            "digest"
        );

        let mut state = State::new();
        for block in padding::blocks(&padded) {
            strategy.compress(&mut state, &block);
        }
        Digest::from_bytes(state.into_bytes())
    }

    /// Computes the digest of `message` as 64 lowercase hex characters.
    pub fn hex_digest(&self, message: &[u8]) -> String {
        self.digest(message).to_hex()
    }

    /// Recomputes the digest of `message` and compares it with
    /// `expected_hex`.
    ///
    /// # Returns
    /// `Ok(true)` on match, `Ok(false)` when the message was altered.
    ///
    /// # Errors
    /// Returns a hex parsing error if `expected_hex` is not a digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronohash::ChronoHash;
    ///
    /// let hasher = ChronoHash::default();
    /// let stored = hasher.hex_digest(b"invoice #42: $100");
    /// assert!(hasher.verify(b"invoice #42: $100", &stored).unwrap());
    /// assert!(!hasher.verify(b"invoice #42: $900", &stored).unwrap());
    /// ```
    pub fn verify(&self, message: &[u8], expected_hex: &str) -> Result<bool, ChronoHashError> {
        let expected = Digest::from_hex(expected_hex.trim())?;
        Ok(self.digest(message) == expected)
    }

    /// Reads `reader` to the end, then digests the collected bytes.
    ///
    /// The whole input is buffered first: the round count depends on every
    /// byte of the message. The result equals [`digest`](Self::digest) over
    /// the same bytes.
    ///
    /// # Errors
    /// Returns [`ChronoHashError::Io`] if the reader fails.
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> Result<Digest, ChronoHashError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        debug!(target: "chronohash::hasher", bytes = buffer.len(), "read input to end");
        Ok(self.digest(&buffer))
    }

    /// Reads the file at `path` and digests its contents.
    ///
    /// # Errors
    /// Returns [`ChronoHashError::ReadFile`] if the file cannot be read.
    pub fn digest_file<P: AsRef<Path>>(&self, path: P) -> Result<Digest, ChronoHashError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| ChronoHashError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            target: "chronohash::hasher",
            path = %path.display(),
            bytes = data.len(),
            "read file"
        );
        Ok(self.digest(&data))
    }
}

/// Digest of `message` in normal mode.
///
/// # Examples
///
/// ```
/// assert_eq!(chronohash::digest(b"").as_bytes().len(), 32);
/// ```
pub fn digest(message: &[u8]) -> Digest {
    ChronoHash::new(Mode::Normal).digest(message)
}

/// Hex digest of `message` in normal mode.
pub fn hex_digest(message: &[u8]) -> String {
    ChronoHash::new(Mode::Normal).hex_digest(message)
}

/// Digest of `message` in the given mode.
pub fn digest_with(message: &[u8], mode: Mode) -> Digest {
    ChronoHash::new(mode).digest(message)
}

/// Raw digest bytes of `message` in fast mode.
pub fn hash_fast(message: &[u8]) -> [u8; 32] {
    digest_with(message, Mode::Fast).into_bytes()
}

/// Raw digest bytes of `message` in normal mode.
pub fn hash_normal(message: &[u8]) -> [u8; 32] {
    digest_with(message, Mode::Normal).into_bytes()
}
