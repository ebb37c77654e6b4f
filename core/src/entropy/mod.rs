//! Entropy for unseeded construction
//!
//! When no seed is given, the generator is seeded from a secure entropy
//! source, exactly once. Generation itself never touches entropy; after
//! seeding, output is fully deterministic from the normalized seed.
//!
//! The source is injected as an explicit collaborator rather than an
//! ambient facility, so tests can substitute [`FixedEntropy`] and make
//! even the "no seed given" path reproducible.

use crate::error::RngError;

/// Supplier of four independent, uniformly distributed 32-bit words.
pub trait EntropySource {
    /// Produce four fresh entropy words.
    ///
    /// # Errors
    /// Returns [`RngError::EntropyUnavailable`] when the host has no
    /// usable secure source.
    fn words(&self) -> Result<[u32; 4], RngError>;
}

/// Entropy from the operating system, via the `getrandom` crate.
///
/// # Example
/// ```
/// use procgen_rng_core::{EntropySource, OsEntropy};
///
/// let words = OsEntropy.words().unwrap();
/// assert_eq!(words.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn words(&self) -> Result<[u32; 4], RngError> {
        let mut buf = [0u8; 16];
        getrandom::getrandom(&mut buf).map_err(|_| RngError::EntropyUnavailable)?;

        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let o = i * 4;
            *word = u32::from_le_bytes([buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]);
        }
        Ok(words)
    }
}

/// Deterministic stand-in entropy returning fixed words.
///
/// For tests and for callers who need the unseeded construction path to
/// be reproducible.
///
/// # Example
/// ```
/// use procgen_rng_core::{EntropySource, FixedEntropy};
///
/// let entropy = FixedEntropy::new([1, 2, 3, 4]);
/// assert_eq!(entropy.words().unwrap(), [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    words: [u32; 4],
}

impl FixedEntropy {
    /// Create a source that always yields `words`.
    pub fn new(words: [u32; 4]) -> Self {
        FixedEntropy { words }
    }
}

impl EntropySource for FixedEntropy {
    fn words(&self) -> Result<[u32; 4], RngError> {
        Ok(self.words)
    }
}

/// Entropy source that always fails.
///
/// Models a host without any secure source, for exercising the
/// [`RngError::EntropyUnavailable`] path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntropy;

impl EntropySource for NoEntropy {
    fn words(&self) -> Result<[u32; 4], RngError> {
        Err(RngError::EntropyUnavailable)
    }
}
