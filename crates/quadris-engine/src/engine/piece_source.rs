use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::Variant;

/// Supplies the variants of newly spawned pieces.
///
/// [`GameService`](super::GameService) draws from a source every time it
/// needs a new piece, so a game is fully determined by its source and the
/// commands applied to it.
pub trait PieceSource: fmt::Debug {
    fn next_variant(&mut self) -> Variant;
}

impl<S> PieceSource for Box<S>
where
    S: PieceSource + ?Sized,
{
    fn next_variant(&mut self) -> Variant {
        (**self).next_variant()
    }
}

/// Seed for deterministic random piece generation.
///
/// A 128-bit value written as 32 hex digits. The same seed always produces
/// the same piece sequence.
///
/// # Example
///
/// ```
/// use quadris_engine::{PieceSeed, PieceSource as _, RandomPieces};
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut a = RandomPieces::with_seed(seed);
/// let mut b = RandomPieces::with_seed(seed);
/// assert_eq!(a.next_variant(), b.next_variant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Error returned when a seed is not exactly 32 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed `{input}`: expected 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Uniformly random variants.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    seed: PieceSeed,
    rng: Pcg32,
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieces {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }
}

impl PieceSource for RandomPieces {
    fn next_variant(&mut self) -> Variant {
        self.rng.random()
    }
}

/// Repeats a fixed list of variants forever.
///
/// # Example
///
/// ```
/// use quadris_engine::{FixedSequence, PieceSource as _, Variant};
///
/// let mut source = FixedSequence::new([Variant::I, Variant::O]).unwrap();
/// assert_eq!(source.next_variant(), Variant::I);
/// assert_eq!(source.next_variant(), Variant::O);
/// assert_eq!(source.next_variant(), Variant::I);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSequence {
    variants: Vec<Variant>,
    cursor: usize,
}

impl FixedSequence {
    /// Returns `None` if `variants` is empty.
    #[must_use]
    pub fn new<I>(variants: I) -> Option<Self>
    where
        I: IntoIterator<Item = Variant>,
    {
        let variants: Vec<_> = variants.into_iter().collect();
        if variants.is_empty() {
            return None;
        }
        Some(Self {
            variants,
            cursor: 0,
        })
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl PieceSource for FixedSequence {
    fn next_variant(&mut self) -> Variant {
        let variant = self.variants[self.cursor];
        self.cursor = (self.cursor + 1) % self.variants.len();
        variant
    }
}
