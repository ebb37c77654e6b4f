//! mulberry32 random number generator
//!
//! A tiny counter-based PRNG: one 32-bit word of state, advanced by a
//! fixed odd increment and scrambled through two multiply/XOR rounds.
//! Good statistical quality for its size; a full 2^32 period.
//!
//! Only the first word of the normalized seed is consumed; the other
//! three are discarded. There is no externally representable state, so
//! snapshot/restore is unsupported for this algorithm.

use crate::seed::NormalizedSeed;
use serde::{Deserialize, Serialize};

/// Fixed counter increment (the "mulberry" constant).
const INCREMENT: u32 = 0x6D2B_79F5;

/// mulberry32 generator state: a single 32-bit counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    t: u32,
}

impl Mulberry32 {
    /// Seed from the first word of a normalized seed.
    pub fn new(seed: NormalizedSeed) -> Self {
        Mulberry32 {
            t: seed.words()[0],
        }
    }

    /// Advance the counter and return the next scrambled 32-bit value.
    pub fn advance(&mut self) -> u32 {
        self.t = self.t.wrapping_add(INCREMENT);
        let mut r = self.t;
        r = (r ^ (r >> 15)).wrapping_mul(r | 1);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
        r ^ (r >> 14)
    }
}
