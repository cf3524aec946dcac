//! Input generators for best, worst and random cases.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Already sorted: `[0, 1, ..., n-1]`.
pub fn best(n: usize) -> Vec<i32> {
    (0..n).map(|i| i as i32).collect()
}

/// Reverse sorted: `[n, n-1, ..., 1]`.
pub fn worst(n: usize) -> Vec<i32> {
    (0..n).map(|i| (n - i) as i32).collect()
}

/// `n` values drawn uniformly from `[0, n)`.
pub fn random(n: usize) -> Vec<i32> {
    uniform(&mut rand::thread_rng(), n)
}

/// Same as [`random`], but reproducible from `seed`.
pub fn random_seeded(n: usize, seed: u64) -> Vec<i32> {
    uniform(&mut StdRng::seed_from_u64(seed), n)
}

fn uniform<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    let bound = n.max(1) as i32;
    (0..n).map(|_| rng.gen_range(0..bound)).collect()
}

/// Input shape, as used in artifact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Case {
    Best,
    Worst,
    Random,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Best, Case::Worst, Case::Random];

    pub fn name(self) -> &'static str {
        match self {
            Case::Best => "best",
            Case::Worst => "worst",
            Case::Random => "random",
        }
    }

    /// Generate `n` values of this shape; `seed` only affects [`Case::Random`].
    pub fn generate(self, n: usize, seed: Option<u64>) -> Vec<i32> {
        match (self, seed) {
            (Case::Best, _) => best(n),
            (Case::Worst, _) => worst(n),
            (Case::Random, Some(seed)) => random_seeded(n, seed),
            (Case::Random, None) => random(n),
        }
    }
}
