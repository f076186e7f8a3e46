//! Random number generation for dungeon layout
//!
//! Uses a seeded ChaCha RNG so a seed and a configuration always produce the
//! same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of every random decision made during generation.
///
/// Generation stages take `&mut R where R: RandomSource + ?Sized`, so tests
/// can substitute a scripted source to force exact layouts.
pub trait RandomSource {
    /// Uniform integer in `[min, max)`.
    ///
    /// Returns `min` when the range is empty.
    fn range(&mut self, min: u32, max: u32) -> u32;

    /// Returns true with probability 1/n
    fn one_in(&mut self, n: u32) -> bool {
        self.range(0, n) == 0
    }

    /// Returns true with probability percent/100
    fn percent(&mut self, percent: u32) -> bool {
        self.range(0, 100) < percent
    }
}

/// Generator random number source
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DungeonRng {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
