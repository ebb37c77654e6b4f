//! The two PRNG algorithms
//!
//! Both algorithms share one contract: `advance()` yields a raw unsigned
//! 32-bit integer and mutates internal state; `uniform_f64()` maps one
//! draw onto [0, 1). Dispatch between them is a plain `match` on a
//! closed two-variant enum, with no trait objects and no inheritance.
//!
//! CRITICAL: State evolves only through `advance`. No other code path
//! mutates generator state.

mod mulberry;
mod xoshiro;

pub use mulberry::Mulberry32;
pub use xoshiro::Xoshiro128StarStar;

use crate::seed::NormalizedSeed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed choice of generator algorithm.
///
/// Fixed for a generator's lifetime except on explicit reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// mulberry32: single 32-bit counter state. Fast, no snapshot
    /// support (only the seed's first word is consumed).
    #[serde(rename = "mulberry")]
    Mulberry32,

    /// xoshiro128**: four 32-bit words of state, fully snapshotable.
    #[default]
    #[serde(rename = "xoshiro")]
    Xoshiro128StarStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Mulberry32 => write!(f, "mulberry"),
            Algorithm::Xoshiro128StarStar => write!(f, "xoshiro"),
        }
    }
}

/// Algorithm-specific generator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorCore {
    /// mulberry32 counter state
    Mulberry32(Mulberry32),

    /// xoshiro128** 4-word state
    Xoshiro128StarStar(Xoshiro128StarStar),
}

impl GeneratorCore {
    /// Initialize state for `algorithm` from a normalized seed.
    pub fn new(algorithm: Algorithm, seed: NormalizedSeed) -> Self {
        match algorithm {
            Algorithm::Mulberry32 => GeneratorCore::Mulberry32(Mulberry32::new(seed)),
            Algorithm::Xoshiro128StarStar => {
                GeneratorCore::Xoshiro128StarStar(Xoshiro128StarStar::new(seed))
            }
        }
    }

    /// Which algorithm this state belongs to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorCore::Mulberry32(_) => Algorithm::Mulberry32,
            GeneratorCore::Xoshiro128StarStar(_) => Algorithm::Xoshiro128StarStar,
        }
    }

    /// Advance the state and return the next raw 32-bit value.
    pub fn advance(&mut self) -> u32 {
        match self {
            GeneratorCore::Mulberry32(inner) => inner.advance(),
            GeneratorCore::Xoshiro128StarStar(inner) => inner.advance(),
        }
    }

    /// One draw mapped onto [0, 1): `advance() / 2^32`.
    pub fn uniform_f64(&mut self) -> f64 {
        f64::from(self.advance()) / 4_294_967_296.0
    }
}
