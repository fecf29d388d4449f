use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// Error produced when parsing a seed from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The text does not contain exactly 64 hex digits.
    #[display("expected 64 hex digits, found {len}")]
    BadLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

/// A 32-byte seed identifying one generated puzzle.
///
/// The whole construction of a puzzle is a pure function of its seed, so
/// a seed is enough to reproduce a puzzle exactly on any machine. Seeds
/// print as 64 lowercase hex digits and parse back from that form.
///
/// # Examples
///
/// ```
/// use gradoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([0xab; 32]);
/// assert_eq!(seed.to_string(), "ab".repeat(32));
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the system entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; 32] {
        self.0
    }

    /// Builds the random stream keyed by this seed.
    ///
    /// The seed bytes pass through SHA-256 and the first half of the
    /// digest keys a [`Pcg64Mcg`], so structurally close seeds still
    /// yield unrelated streams.
    pub(crate) fn rng(self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut key = [0; 16];
        key.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(key)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::BadLength { len });
        }
        let mut bytes = [0; 32];
        for (index, c) in s.chars().enumerate() {
            let Some(value) = c.to_digit(16) else {
                return Err(ParseSeedError::InvalidCharacter { c });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            if index % 2 == 0 {
                bytes[index / 2] = value << 4;
            } else {
                bytes[index / 2] |= value;
            }
        }
        Ok(Self(bytes))
    }
}
