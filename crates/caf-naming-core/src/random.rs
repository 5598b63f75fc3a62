//! Random filler generation.
//!
//! The filler is what makes otherwise identical requests produce different
//! names, so draws must be independent and uniform over the alphabet. They
//! need not be cryptographically secure.
//!
//! # Examples
//!
//! ```
//! use caf_naming_core::{Alphabet, RandomTokenGenerator, TokenSource};
//!
//! let mut tokens = RandomTokenGenerator::seeded(7);
//! let token = tokens.generate(&Alphabet::lowercase_alphanumeric(), 12);
//! assert_eq!(token.len(), 12);
//! assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Non-empty set of ASCII symbols that filler is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Box<[u8]>,
}

impl Alphabet {
    /// Builds an alphabet from the given characters.
    ///
    /// Non-ASCII characters and duplicates are dropped. Returns `None` if
    /// nothing is left.
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Option<Self> {
        let mut bytes: Vec<u8> = symbols
            .into_iter()
            .filter(char::is_ascii)
            .map(|c| c as u8)
            .collect();
        bytes.sort_unstable();
        bytes.dedup();
        if bytes.is_empty() {
            return None;
        }
        Some(Self {
            symbols: bytes.into_boxed_slice(),
        })
    }

    /// `[a-zA-Z0-9]`.
    #[must_use]
    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC.bytes().collect(),
        }
    }

    /// `[a-z0-9]`.
    #[must_use]
    pub fn lowercase_alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC
                .bytes()
                .filter(|b| !b.is_ascii_uppercase())
                .collect(),
        }
    }

    /// Keeps only the symbols accepted by `keep`.
    #[must_use]
    pub fn filter(&self, mut keep: impl FnMut(char) -> bool) -> Option<Self> {
        Self::new(self.chars().filter(|&c| keep(c)))
    }

    /// Returns `true` if `c` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols.contains(&(c as u8))
    }

    /// Number of symbols (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; alphabets cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&b| char::from(b))
    }

    fn symbol(&self, index: usize) -> char {
        char::from(self.symbols[index])
    }
}

/// Source of filler tokens.
///
/// Implementations used from several threads must bring their own
/// thread-safe entropy; the engine never shares a source between calls.
pub trait TokenSource {
    /// Draws `length` symbols independently and uniformly from `alphabet`.
    fn generate(&mut self, alphabet: &Alphabet, length: usize) -> String;
}

/// [`TokenSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTokenGenerator<R = ThreadRng> {
    rng: R,
}

impl RandomTokenGenerator<ThreadRng> {
    /// Uses the thread-local RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomTokenGenerator<StdRng> {
    /// Deterministic generator for reproducible draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomTokenGenerator<R> {
    /// Wraps an arbitrary RNG.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TokenSource for RandomTokenGenerator<R> {
    fn generate(&mut self, alphabet: &Alphabet, length: usize) -> String {
        (0..length)
            .map(|_| alphabet.symbol(self.rng.random_range(0..alphabet.len())))
            .collect()
    }
}
