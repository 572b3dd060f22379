//! The 256-bit digest value and its text forms.

use std::fmt;
use std::str::FromStr;

use crate::constants::DIGEST_SIZE;
use crate::error::ChronoHashError;
use crate::utils::converter;

/// A 32-byte ChronoHash digest.
///
/// `Display` and `{:x}` give 64 lowercase hex characters; `{:X}` gives
/// uppercase. Parsing accepts either case.
///
/// # Examples
///
/// ```
/// use chronohash::Digest;
///
/// let digest = chronohash::digest(b"abc");
/// let text = digest.to_hex();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<Digest>().unwrap(), digest);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }

    /// Returns the digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns its bytes.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        converter::to_hex(&self.0)
    }

    /// Parses 64 hex characters (either case).
    ///
    /// # Errors
    /// Returns [`ChronoHashError::InvalidHexLength`] or
    /// [`ChronoHashError::InvalidHexDigit`] on malformed input.
    pub fn from_hex(input: &str) -> Result<Self, ChronoHashError> {
        converter::hex_to_digest_bytes(input).map(Digest)
    }

    /// Number of bit positions at which `self` and `other` differ (0..=256).
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = ChronoHashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; DIGEST_SIZE]>::try_from(bytes)
            .map(Digest)
            .map_err(|_| ChronoHashError::InvalidDigestLength { len: bytes.len() })
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = ChronoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}
