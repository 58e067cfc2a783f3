//! Deterministic RNG wrapper for synthetic call traffic.
//!
//! Every floor draws from its own stream seeded by:
//!
//!   seed = global_seed XOR (floor * MIXING_CONSTANT)
//!
//! so adding floors to the top of a building does not disturb the call
//! pattern of the floors below it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::FloorId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used by traffic generators.  The same seed always yields the
/// same call sequence.
pub struct TrafficRng(SmallRng);

impl TrafficRng {
    pub fn new(seed: u64) -> Self {
        TrafficRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed a per-floor stream from the run's global seed.
    pub fn for_floor(global_seed: u64, floor: FloorId) -> Self {
        let seed = global_seed ^ (floor.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrafficRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
