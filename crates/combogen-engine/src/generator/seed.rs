use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

/// Seed for deterministic combo generation.
///
/// A 128-bit (16-byte) seed used to initialize the PCG random source. The
/// same seed and request produce the same combo, enabling reproducible CLI
/// runs and deterministic testing of the otherwise-random algorithm.
///
/// The text form is a 32-character hex string.
///
/// # Example
///
/// ```
/// use combogen_engine::ComboSeed;
///
/// let seed: ComboSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboSeed([u8; 16]);

impl ComboSeed {
    /// Creates a seed from the OS random source.
    #[must_use]
    pub fn random() -> Self {
        rand::rng().random()
    }

    /// Builds the random source this seed describes.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for ComboSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Error returned when parsing a [`ComboSeed`] from text fails.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters, got {text:?}")]
pub struct ParseSeedError {
    text: String,
}

impl FromStr for ComboSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError { text: s.to_owned() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError { text: s.to_owned() })?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<ComboSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ComboSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ComboSeed(seed)
    }
}
