//! Error types for the random engine
//!
//! Every failure here is a contract violation at the call site, not a
//! transient condition. Callers must propagate or abort; silently
//! substituting a default value would break determinism guarantees.
//!
//! All validations run before any state mutation, so a failing call
//! leaves the generator exactly where it was.

use crate::generator::Algorithm;
use thiserror::Error;

/// Errors that can occur during random engine operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RngError {
    /// Inverted bounds for `int`/`between`, or a sides/size argument
    /// that produces an empty range.
    #[error("invalid range: min {min} must not exceed max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Empty sequence given to `pick`/`weighted`, a `sample` request
    /// larger than its population, or an empty `string` charset.
    #[error("input sequence is empty or too small for the request")]
    EmptyInput,

    /// Negative (or NaN) weight, or a weight list whose total is zero.
    #[error("invalid weight {weight}: weights must be non-negative with a positive total")]
    InvalidWeight { weight: f64 },

    /// Probability outside [0, 1] given to `chance`.
    #[error("probability {probability} outside [0, 1]")]
    InvalidProbability { probability: f64 },

    /// State snapshot operation on an algorithm without representable
    /// state (mulberry32).
    #[error("state snapshots are not supported for the {algorithm} algorithm")]
    UnsupportedForAlgorithm { algorithm: Algorithm },

    /// No seed was given and no secure entropy source is available.
    #[error("no secure entropy source available to seed the generator")]
    EntropyUnavailable,
}
