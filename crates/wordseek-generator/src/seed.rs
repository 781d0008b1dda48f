//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors produced when parsing a [`PuzzleSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 hex digits long.
    #[display("seed must be 64 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The text contained a non-hex character.
    #[display("invalid hex digit {_0:?} in seed")]
    InvalidDigit(#[error(not(source))] char),
}

/// A 256-bit seed that determines every random choice of a generation run.
///
/// The text form is 64 lowercase hex digits; parsing also accepts uppercase.
///
/// # Examples
///
/// ```
/// use wordseek_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
///
/// // Derived seeds are deterministic and distinct from their parent.
/// assert_eq!(seed.derive_next(), seed.derive_next());
/// assert_ne!(seed.derive_next(), seed);
/// # Ok::<(), wordseek_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Hashes arbitrary text into a seed, so memorable phrases can name puzzles.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(sha256(phrase.as_bytes()))
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the seed used for the next regeneration round.
    ///
    /// The derived seed is the SHA-256 digest of this seed.
    #[must_use]
    pub fn derive_next(&self) -> Self {
        Self(sha256(&self.0))
    }

    /// Creates the random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
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
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength(len));
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(ParseSeedError::InvalidDigit(ch))
        });
        for byte in &mut bytes {
            // Length was checked above, so both digits are present.
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength(len));
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut bytes = [0; 32];
    bytes.copy_from_slice(&Sha256::digest(data));
    bytes
}

#[cfg(test)]
mod tests {
    use rand::distr::{Distribution as _, Uniform};

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength(3))
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit('g'))
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let dist = Uniform::new(0, 1_000_000).unwrap();
        let mut a = seed.rng();
        let mut b = seed.rng();
        let xs: Vec<u32> = (0..16).map(|_| dist.sample(&mut a)).collect();
        let ys: Vec<u32> = (0..16).map(|_| dist.sample(&mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_phrase_and_derivation_are_stable() {
        assert_eq!(PuzzleSeed::from_phrase("otters"), PuzzleSeed::from_phrase("otters"));
        assert_ne!(PuzzleSeed::from_phrase("otters"), PuzzleSeed::from_phrase("herons"));

        let seed = PuzzleSeed::from_bytes([0; 32]);
        let next = seed.derive_next();
        assert_ne!(next, seed);
        assert_ne!(next.derive_next(), next);
    }
}
