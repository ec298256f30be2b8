//! Deterministic random number generation for deck shuffling.
//!
//! Uses ChaCha8 seeded from a `u64` so the same seed always produces
//! the same deal, which keeps full games replayable in tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the local deck source.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        let mut data1: Vec<i32> = (0..52).collect();
        let mut data2 = data1.clone();

        rng1.shuffle(&mut data1);
        rng2.shuffle(&mut data2);

        assert_eq!(data1, data2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        let mut data1: Vec<i32> = (0..52).collect();
        let mut data2 = data1.clone();

        rng1.shuffle(&mut data1);
        rng2.shuffle(&mut data2);

        assert_ne!(data1, data2);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = DeckRng::new(7);
        let mut data: Vec<i32> = (0..52).collect();

        rng.shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    }
}
