//! State management - seed access, snapshot/restore, forking
//!
//! A snapshot captures the xoshiro 4-word state and nothing else.
//! mulberry32 has no externally representable state, so both snapshot
//! directions fail uniformly with `UnsupportedForAlgorithm` for it
//! (no silent no-ops: a caller asking for state it cannot get back is
//! making a mistake worth surfacing).
//!
//! `fork` is the sanctioned way to obtain an independent deterministic
//! generator for a parallel task: it costs the parent exactly one draw
//! and seeds the child from that value.

use crate::entropy::EntropySource;
use crate::error::RngError;
use crate::generator::{Algorithm, GeneratorCore};
use crate::random::Rng;
use crate::seed::{NormalizedSeed, Seed};
use serde::{Deserialize, Serialize};

/// Opaque generator state snapshot (xoshiro only).
///
/// # Example
/// ```
/// use procgen_rng_core::{Algorithm, Rng, Seed};
///
/// let mut rng = Rng::from_seed(Seed::Int(1), Algorithm::Xoshiro128StarStar);
/// let snapshot = rng.get_state().unwrap();
/// let first = rng.uint32();
/// rng.set_state(&snapshot).unwrap();
/// assert_eq!(rng.uint32(), first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    words: [u32; 4],
}

impl Rng {
    /// The normalized seed this generator was initialized from.
    ///
    /// Collaborators log or embed this once at startup so a run can be
    /// reproduced later.
    pub fn get_seed(&self) -> NormalizedSeed {
        self.seed
    }

    /// Re-seed and fully reinitialize, discarding all prior state.
    ///
    /// Passing an algorithm switches the generator variant; `None`
    /// keeps the current one.
    pub fn set_seed(&mut self, seed: &Seed, algorithm: Option<Algorithm>) {
        let algorithm = algorithm.unwrap_or(self.algorithm);
        self.seed = seed.normalize();
        self.algorithm = algorithm;
        self.core = GeneratorCore::new(algorithm, self.seed);
    }

    /// Re-seed from the entropy source (the "no seed given" reseed
    /// path), discarding all prior state.
    ///
    /// # Errors
    /// [`RngError::EntropyUnavailable`] when the source fails; the
    /// generator is left untouched in that case.
    pub fn reseed_from_entropy(
        &mut self,
        entropy: &dyn EntropySource,
        algorithm: Option<Algorithm>,
    ) -> Result<(), RngError> {
        // Fetch entropy before touching any state.
        let words = entropy.words()?;
        let algorithm = algorithm.unwrap_or(self.algorithm);
        self.seed = NormalizedSeed::new(words);
        self.algorithm = algorithm;
        self.core = GeneratorCore::new(algorithm, self.seed);
        Ok(())
    }

    /// Snapshot of the current generator state.
    ///
    /// # Errors
    /// [`RngError::UnsupportedForAlgorithm`] when mulberry32 is active:
    /// its counter is not externally representable.
    pub fn get_state(&self) -> Result<RngState, RngError> {
        match &self.core {
            GeneratorCore::Xoshiro128StarStar(inner) => Ok(RngState {
                words: inner.state(),
            }),
            GeneratorCore::Mulberry32(_) => Err(RngError::UnsupportedForAlgorithm {
                algorithm: Algorithm::Mulberry32,
            }),
        }
    }

    /// Restore a previously captured snapshot, replacing the 4-word
    /// state atomically.
    ///
    /// # Errors
    /// [`RngError::UnsupportedForAlgorithm`] unless xoshiro is active.
    pub fn set_state(&mut self, state: &RngState) -> Result<(), RngError> {
        match &mut self.core {
            GeneratorCore::Xoshiro128StarStar(inner) => {
                inner.set_state(state.words);
                Ok(())
            }
            GeneratorCore::Mulberry32(_) => Err(RngError::UnsupportedForAlgorithm {
                algorithm: Algorithm::Mulberry32,
            }),
        }
    }

    /// Split off an independent child generator.
    ///
    /// Consumes exactly one draw from `self`; the drawn value becomes
    /// the child's integer seed, and the child keeps the parent's
    /// algorithm. Same parent state → same child sequence.
    ///
    /// # Example
    /// ```
    /// use procgen_rng_core::{Algorithm, Rng, Seed};
    ///
    /// let mut parent = Rng::from_seed(Seed::Int(7), Algorithm::Xoshiro128StarStar);
    /// let mut child = parent.fork();
    /// assert_eq!(child.algorithm(), parent.algorithm());
    /// assert_ne!(child.get_seed(), parent.get_seed());
    /// ```
    pub fn fork(&mut self) -> Rng {
        let child_seed = Seed::Int(i64::from(self.uint32()));
        Rng::from_seed(child_seed, self.algorithm)
    }
}
