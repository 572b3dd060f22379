//! Error types for the ChronoHash library.
//!
//! Hashing itself never fails: every byte sequence in either mode has a
//! digest. Errors only arise at the edges, when parsing a digest or mode
//! from text or when reading input from a file or reader.

use std::io;
use std::path::PathBuf;

/// Errors produced by the ChronoHash library.
#[derive(Debug, thiserror::Error)]
pub enum ChronoHashError {
    /// Hex digest text does not have exactly 64 characters.
    #[error("hex digest must be 64 characters, got {len}")]
    InvalidHexLength {
        /// Number of characters supplied.
        len: usize,
    },

    /// Hex digest text contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Zero-based character offset of the bad digit.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Byte slice handed to a digest conversion is not 32 bytes.
    #[error("digest must be 32 bytes, got {len}")]
    InvalidDigestLength {
        /// Number of bytes supplied.
        len: usize,
    },

    /// Mode name is neither `normal`/`standard` nor `fast`.
    #[error("unknown mode {0:?} (expected \"normal\" or \"fast\")")]
    UnknownMode(String),

    /// A file could not be read for hashing.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A reader failed while its contents were being collected.
    #[error(transparent)]
    Io(#[from] io::Error),
}
