//! Seed normalization
//!
//! Turns an arbitrary seed value (absent, integer, or text) into the
//! fixed-width internal seed used by every generator algorithm: four
//! unsigned 32-bit words.
//!
//! CRITICAL: Normalization is a pure function of the input. Identical
//! inputs always normalize identically; only the "absent" path consults
//! the entropy source, and only once.
//!
//! The text hash is an internal detail with no cross-version stability
//! guarantee beyond "same text, same crate version, same output".

use crate::entropy::EntropySource;
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-supplied seed value.
///
/// "Absent" is expressed as `Option<Seed>::None` at construction sites;
/// it selects the entropy-backed normalization path.
///
/// # Example
/// ```
/// use procgen_rng_core::Seed;
///
/// let a = Seed::from(42);
/// let b = Seed::from("forest-biome-v2");
/// assert_ne!(a.normalize(), b.normalize());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// Integer seed, normalized by hashing its decimal representation
    Int(i64),

    /// Text seed, normalized by hashing its characters
    Text(String),
}

impl Seed {
    /// Normalize this seed to the internal 4-word form.
    ///
    /// Integers hash their decimal string (sign included), so
    /// `Seed::Int(42)` and `Seed::Text("42")` normalize identically.
    pub fn normalize(&self) -> NormalizedSeed {
        match self {
            Seed::Int(value) => hash_text(&value.to_string()),
            Seed::Text(text) => hash_text(text),
        }
    }

    /// Normalize an optional seed, consulting `entropy` only when the
    /// seed is absent.
    pub fn normalize_or_entropy(
        seed: Option<&Seed>,
        entropy: &dyn EntropySource,
    ) -> Result<NormalizedSeed, RngError> {
        match seed {
            Some(seed) => Ok(seed.normalize()),
            None => Ok(NormalizedSeed::new(entropy.words()?)),
        }
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Int(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

/// The fixed-width internal seed: four unsigned 32-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSeed([u32; 4]);

impl NormalizedSeed {
    /// Wrap four raw words as a normalized seed.
    pub fn new(words: [u32; 4]) -> Self {
        NormalizedSeed(words)
    }

    /// The four seed words.
    pub fn words(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for NormalizedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:08x}-{:08x}-{:08x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Hash text into four 32-bit words.
///
/// Four accumulators start at fixed constants and fold in each character
/// code (Unicode scalar value) with wrapping multiply/XOR updates in a
/// cyclic dependency; each character's update reads the pre-update
/// accumulator values.
pub fn hash_text(text: &str) -> NormalizedSeed {
    let mut h1: u32 = 1_779_033_703;
    let mut h2: u32 = 3_144_134_277;
    let mut h3: u32 = 1_013_904_242;
    let mut h4: u32 = 2_773_480_762;

    for ch in text.chars() {
        let k = ch as u32;
        let (p1, p2, p3, p4) = (h1, h2, h3, h4);
        h1 = p2 ^ (p1 ^ k).wrapping_mul(597_399_067);
        h2 = p3 ^ (p2 ^ k).wrapping_mul(2_869_860_233);
        h3 = p4 ^ (p3 ^ k).wrapping_mul(951_274_213);
        h4 = p1 ^ (p4 ^ k).wrapping_mul(2_716_044_179);
    }

    NormalizedSeed([h1, h2, h3, h4])
}
