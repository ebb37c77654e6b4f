//! Random facade - the public draw operations
//!
//! Every operation here is a pure function of the generator core's
//! `advance()`/`uniform_f64()`. Integer draws use rejection sampling to
//! remove modulo bias; shuffling is Fisher-Yates over a copy; the
//! distributions are Box-Muller (normal) and inverse-CDF (exponential).
//!
//! # Critical Invariants
//!
//! 1. Validation happens before any state mutation: a failing call
//!    consumes zero draws
//! 2. Same seed + same algorithm + same call sequence → same values
//! 3. A generator is not safe for concurrent mutation; every draw takes
//!    `&mut self`. Use [`Rng::fork`] to hand independent deterministic
//!    generators to parallel tasks.
//!
//! # Example
//! ```
//! use procgen_rng_core::{Algorithm, Rng, Seed};
//!
//! let mut rng = Rng::from_seed(Seed::from("demo"), Algorithm::Xoshiro128StarStar);
//! let roll = rng.int(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

mod state;

pub use state::RngState;

use crate::entropy::EntropySource;
use crate::error::RngError;
use crate::generator::{Algorithm, GeneratorCore};
use crate::seed::{NormalizedSeed, Seed};
use serde::{Deserialize, Serialize};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// RFC-4122 v4 shape: `x` is a random hex digit, `y` a variant digit.
const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Construction options: which seed (if any) and which algorithm.
///
/// # Example
/// ```
/// use procgen_rng_core::{Algorithm, FixedEntropy, Rng, RngConfig, Seed};
///
/// let config = RngConfig {
///     seed: Some(Seed::from(7)),
///     algorithm: Algorithm::Mulberry32,
/// };
/// let rng = Rng::from_config(&config, &FixedEntropy::new([0; 4])).unwrap();
/// assert_eq!(rng.algorithm(), Algorithm::Mulberry32);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Seed value; `None` selects the entropy-backed path
    #[serde(default)]
    pub seed: Option<Seed>,

    /// Generator algorithm (default: xoshiro)
    #[serde(default)]
    pub algorithm: Algorithm,
}

/// Deterministic, seedable random number generator.
///
/// Owns one normalized seed, one algorithm tag and one generator state.
/// Every draw mutates the state; cloning yields an independent generator
/// that continues the same sequence from the current point.
///
/// NOT cryptographically secure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rng {
    seed: NormalizedSeed,
    algorithm: Algorithm,
    core: GeneratorCore,
}

impl Rng {
    /// Construct from explicit options, consulting `entropy` only when
    /// `config.seed` is `None`.
    ///
    /// # Errors
    /// [`RngError::EntropyUnavailable`] when no seed is given and the
    /// entropy source fails.
    pub fn from_config(
        config: &RngConfig,
        entropy: &dyn EntropySource,
    ) -> Result<Self, RngError> {
        let seed = Seed::normalize_or_entropy(config.seed.as_ref(), entropy)?;
        Ok(Rng::from_normalized(seed, config.algorithm))
    }

    /// Construct from an explicit seed. Infallible: no entropy needed.
    ///
    /// # Example
    /// ```
    /// use procgen_rng_core::{Algorithm, Rng, Seed};
    ///
    /// let mut a = Rng::from_seed(Seed::Int(42), Algorithm::Xoshiro128StarStar);
    /// let mut b = Rng::from_seed(Seed::Int(42), Algorithm::Xoshiro128StarStar);
    /// assert_eq!(a.uint32(), b.uint32());
    /// ```
    pub fn from_seed(seed: Seed, algorithm: Algorithm) -> Self {
        Rng::from_normalized(seed.normalize(), algorithm)
    }

    /// Construct with a fresh entropy-chosen seed.
    ///
    /// # Errors
    /// [`RngError::EntropyUnavailable`] when the source fails.
    pub fn from_entropy(
        entropy: &dyn EntropySource,
        algorithm: Algorithm,
    ) -> Result<Self, RngError> {
        let words = entropy.words()?;
        Ok(Rng::from_normalized(NormalizedSeed::new(words), algorithm))
    }

    pub(crate) fn from_normalized(seed: NormalizedSeed, algorithm: Algorithm) -> Self {
        Rng {
            seed,
            algorithm,
            core: GeneratorCore::new(algorithm, seed),
        }
    }

    /// The active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    // ========================================================================
    // Uniform draws
    // ========================================================================

    /// Uniform float in [0, 1).
    pub fn float(&mut self) -> f64 {
        self.core.uniform_f64()
    }

    /// Raw 32-bit draw straight from the generator core.
    pub fn uint32(&mut self) -> u32 {
        self.core.advance()
    }

    /// Uniform integer in the inclusive range [min, max].
    ///
    /// Uses rejection sampling: out-of-band raw draws are discarded so
    /// `min + (x % range)` carries no modulo bias.
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `min > max`. No draw is consumed on
    /// failure.
    pub fn int(&mut self, min: i32, max: i32) -> Result<i32, RngError> {
        if min > max {
            return Err(RngError::InvalidRange {
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        let range = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = self.draw_below(range) as i64;
        Ok((i64::from(min) + offset) as i32)
    }

    /// Fair coin flip from the low bit of one raw draw.
    pub fn boolean(&mut self) -> bool {
        self.core.advance() & 1 == 1
    }

    /// Uniform float in the half-open range [min, max).
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `min >= max`.
    pub fn between(&mut self, min: f64, max: f64) -> Result<f64, RngError> {
        if min >= max {
            return Err(RngError::InvalidRange { min, max });
        }
        Ok(min + (max - min) * self.float())
    }

    // ========================================================================
    // Collection operations
    // ========================================================================

    /// Uniformly pick one element.
    ///
    /// # Errors
    /// [`RngError::EmptyInput`] on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        if items.is_empty() {
            return Err(RngError::EmptyInput);
        }
        let index = self.draw_below(items.len() as u64) as usize;
        Ok(&items[index])
    }

    /// Uniformly shuffled copy of `items`; the input is left untouched.
    ///
    /// Fisher-Yates over the copy, walking `i` from `len - 1` down to 1
    /// and swapping with a uniform index in [0, i].
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.draw_below(i as u64 + 1) as usize;
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// `n` distinct elements drawn without replacement: a shuffled copy
    /// truncated to `n`.
    ///
    /// # Errors
    /// [`RngError::EmptyInput`] if `n` exceeds the population size.
    pub fn sample<T: Clone>(&mut self, items: &[T], n: usize) -> Result<Vec<T>, RngError> {
        if n > items.len() {
            return Err(RngError::EmptyInput);
        }
        let mut sampled = self.shuffle(items);
        sampled.truncate(n);
        Ok(sampled)
    }

    /// Pick one element with probability proportional to its weight.
    ///
    /// Draws `r = float() * total` and subtracts each weight in list
    /// order until `r` goes negative. Floating-point edge cases fall
    /// back to the last entry.
    ///
    /// # Errors
    /// [`RngError::EmptyInput`] on an empty list;
    /// [`RngError::InvalidWeight`] on any negative (or NaN) weight, or
    /// when the total weight is zero. No draw is consumed on failure.
    pub fn weighted<'a, T>(&mut self, pairs: &'a [(T, f64)]) -> Result<&'a T, RngError> {
        if pairs.is_empty() {
            return Err(RngError::EmptyInput);
        }
        let mut total = 0.0;
        for (_, weight) in pairs {
            // NaN fails this comparison too
            if !(*weight >= 0.0) {
                return Err(RngError::InvalidWeight { weight: *weight });
            }
            total += *weight;
        }
        if total == 0.0 {
            return Err(RngError::InvalidWeight { weight: total });
        }

        let mut remaining = self.float() * total;
        for (value, weight) in pairs {
            remaining -= *weight;
            if remaining < 0.0 {
                return Ok(value);
            }
        }
        // remaining never went negative (accumulated rounding): last entry
        Ok(&pairs[pairs.len() - 1].0)
    }

    // ========================================================================
    // Distributions
    // ========================================================================

    /// Normally distributed value via the Box-Muller transform.
    ///
    /// Both uniform inputs are redrawn while zero, so `ln(u)` stays
    /// finite.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let mut u = self.float();
        while u == 0.0 {
            u = self.float();
        }
        let mut v = self.float();
        while v == 0.0 {
            v = self.float();
        }
        mean + std_dev * (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos()
    }

    /// Exponentially distributed value with rate `lambda`:
    /// `-ln(1 - float()) / lambda`.
    pub fn exponential(&mut self, lambda: f64) -> f64 {
        -(1.0 - self.float()).ln() / lambda
    }

    /// True with probability `p`.
    ///
    /// # Errors
    /// [`RngError::InvalidProbability`] unless `0 <= p <= 1` (NaN is
    /// rejected). No draw is consumed on failure.
    pub fn chance(&mut self, p: f64) -> Result<bool, RngError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RngError::InvalidProbability { probability: p });
        }
        Ok(self.float() < p)
    }

    /// `count` independent rolls of a `sides`-sided die, each in
    /// [1, sides].
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `sides < 1`. No draw is consumed on
    /// failure.
    pub fn dice(&mut self, count: usize, sides: i32) -> Result<Vec<i32>, RngError> {
        if sides < 1 {
            return Err(RngError::InvalidRange {
                min: 1.0,
                max: f64::from(sides),
            });
        }
        let mut rolls = Vec::with_capacity(count);
        for _ in 0..count {
            rolls.push(self.int(1, sides)?);
        }
        Ok(rolls)
    }

    // ========================================================================
    // Formatted output
    // ========================================================================

    /// RFC-4122-shaped identifier with the version nibble forced to 4
    /// and the variant nibble's top bits forced to `10`.
    ///
    /// NOT a real UUID: drawn from a non-cryptographic generator, so
    /// collision resistance is not guaranteed. Useful for reproducible
    /// identifiers in generated content.
    pub fn uuid_like_v4(&mut self) -> String {
        let mut out = String::with_capacity(UUID_TEMPLATE.len());
        for ch in UUID_TEMPLATE.chars() {
            match ch {
                'x' => {
                    let digit = self.draw_below(16) as usize;
                    out.push(HEX_DIGITS[digit] as char);
                }
                'y' => {
                    let digit = (self.draw_below(16) as usize & 0x3) | 0x8;
                    out.push(HEX_DIGITS[digit] as char);
                }
                fixed => out.push(fixed),
            }
        }
        out
    }

    /// `n` random bytes: four at a time from one raw draw
    /// (little-endian), the remainder one byte per draw.
    pub fn bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n / 4 {
            out.extend_from_slice(&self.core.advance().to_le_bytes());
        }
        for _ in 0..n % 4 {
            out.push(self.draw_below(256) as u8);
        }
        out
    }

    /// String of `n` characters drawn uniformly from `charset`
    /// (by Unicode scalar value).
    ///
    /// # Errors
    /// [`RngError::EmptyInput`] on an empty charset. No draw is consumed
    /// on failure.
    pub fn string(&mut self, n: usize, charset: &str) -> Result<String, RngError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(RngError::EmptyInput);
        }
        let mut out = String::with_capacity(n);
        for _ in 0..n {
            let index = self.draw_below(chars.len() as u64) as usize;
            out.push(chars[index]);
        }
        Ok(out)
    }

    /// CSS-style `#rrggbb` color from three independent byte draws.
    pub fn hex_color(&mut self) -> String {
        let r = self.draw_below(256) as u8;
        let g = self.draw_below(256) as u8;
        let b = self.draw_below(256) as u8;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Uniform draw in [0, range) via rejection sampling.
    ///
    /// `range` must be in 1..=2^32. Raw draws at or above
    /// `floor(2^32 / range) * range` are discarded, which makes the
    /// final `% range` exactly uniform.
    fn draw_below(&mut self, range: u64) -> u64 {
        debug_assert!(range >= 1 && range <= 1 << 32);
        let limit = ((1u64 << 32) / range) * range;
        loop {
            let x = u64::from(self.core.advance());
            if x < limit {
                return x % range;
            }
        }
    }
}
