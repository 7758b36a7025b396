use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the uniform draws used when collapsing a cell
///
/// Injected into the grid instead of a hidden global generator so that a fixed
/// sequence of draws reproduces the same map.
pub trait RandomSource {
    /// Pick an index in `0..len`; `len` is always at least 1
    fn choose(&mut self, len: usize) -> usize;
}

/// Seeded random selector for reproducible stochastic choices
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn choose(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Always picks the first offered candidate
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn choose(&mut self, _len: usize) -> usize {
        0
    }
}
