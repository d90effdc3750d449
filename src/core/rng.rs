//! Deterministic random number generation for persona play.
//!
//! Every random draw in the engine goes through an injected [`GameRng`]:
//! uniform move picks, weighted-table draws, and the roster draw when the
//! challenger rotates. A session built from a fixed seed therefore replays
//! identically, which is what the scripted tests rely on.
//!
//! ```
//! use rpsls::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng1.gen_range_usize(0..100), rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing persona move selection and roster draws.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The seed is kept alongside the stream so an interactive session can log
/// it and be replayed later.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the OS entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_is_recoverable() {
        let rng = GameRng::new(7);
        assert_eq!(rng.seed(), 7);

        let replay = GameRng::new(rng.seed());
        assert_eq!(replay.seed(), 7);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let n = rng.gen_range_usize(3..8);
            assert!((3..8).contains(&n));
        }
    }
}
