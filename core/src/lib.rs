//! Procgen RNG Core - Deterministic Random Number Engine
//!
//! Seedable pseudo-random number generation for procedural content,
//! simulation and testing. Same seed + same algorithm produces the exact
//! same sequence of values across runs and platforms.
//!
//! # Architecture
//!
//! - **seed**: Seed normalization (text/integer hashing to 4 words)
//! - **entropy**: Secure entropy for the "no seed given" path
//! - **generator**: The two PRNG algorithms (mulberry32, xoshiro128**)
//! - **random**: Public facade (draws, distributions, sampling) and
//!   state management (snapshot, restore, fork)
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through `Rng::advance` (one state, one path)
//! 2. Validation happens before any state mutation (a failing call draws
//!    nothing)
//! 3. Entropy is consulted once per unseeded construction, never during
//!    generation
//!
//! NOT cryptographically secure. Never use for secrets or tokens.

// Module declarations
pub mod entropy;
pub mod error;
pub mod generator;
pub mod random;
pub mod seed;

// Re-exports for convenience
pub use entropy::{EntropySource, FixedEntropy, NoEntropy, OsEntropy};
pub use error::RngError;
pub use generator::Algorithm;
pub use random::{Rng, RngConfig, RngState};
pub use seed::{NormalizedSeed, Seed};
