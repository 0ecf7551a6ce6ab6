use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of random permutations, injected wherever quiz code needs randomness
pub trait Shuffle {
    /// Return a permutation of `0..len`
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Permuted view of `items`; the slice itself is never reordered
pub fn shuffled<'a, T>(shuffle: &mut dyn Shuffle, items: &'a [T]) -> Vec<&'a T> {
    shuffle
        .permutation(items.len())
        .into_iter()
        .filter_map(|i| items.get(i))
        .collect()
}

/// Fisher-Yates permutations driven by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomShuffle<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomShuffle<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomShuffle<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomShuffle<StdRng> {
    /// Reproducible permutations for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomShuffle<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffle for RandomShuffle<R> {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

/// Keeps the original order
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffle;

impl Shuffle for IdentityShuffle {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}
