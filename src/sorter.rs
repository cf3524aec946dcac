//! Common interface for the three sorters.

use crate::bubble_sort::BubbleSort;
use crate::config::PoolConfig;
use crate::foam_sort::FoamSort;
use crate::reddit_sort::RedditSort;
use crate::sequence::{Less, PassObserver, Sequence};

/// What a sort call did before reaching its fixed point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Completed passes (sequential) or rounds (parallel), including the
    /// final one that found nothing to swap.
    pub passes: usize,
    /// Total number of exchanges performed.
    pub swaps: usize,
}

/// An in-place sorter driven to a fixed point by repeated passes.
pub trait Sorter: Send + Sync {
    /// Short lowercase name, used for artifact names.
    fn name(&self) -> &'static str;

    /// Sort `seq` in place, calling `observer` once after every pass or round.
    fn sort_observed(
        &self,
        seq: &mut Sequence,
        less: &Less<'_>,
        observer: Option<&mut dyn PassObserver>,
    ) -> SortOutcome;

    /// Sort `seq` in place.
    fn sort(&self, seq: &mut Sequence, less: &Less<'_>) -> SortOutcome {
        self.sort_observed(seq, less, None)
    }
}

/// The available sorters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Parallel odd-even transposition sort.
    Foam,
    /// Sequential bubble sort baseline.
    Bubble,
    /// Parallel cache-aligned batched bubble sort.
    Reddit,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Foam, Algorithm::Bubble, Algorithm::Reddit];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Foam => "foam",
            Algorithm::Bubble => "bubble",
            Algorithm::Reddit => "reddit",
        }
    }

    /// Build the sorter; `config` is ignored by the sequential baseline.
    pub fn sorter(self, config: PoolConfig) -> Box<dyn Sorter> {
        match self {
            Algorithm::Foam => Box::new(FoamSort::new(config)),
            Algorithm::Bubble => Box::new(BubbleSort),
            Algorithm::Reddit => Box::new(RedditSort::new(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ascending;

    #[test]
    fn test_names_match_sorters() {
        let config = PoolConfig::with_workers(2).unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sorter(config).name(), algorithm.name());
        }
    }

    #[test]
    fn test_all_sorters_concrete_scenario() {
        let config = PoolConfig::with_workers(3).unwrap();
        for algorithm in Algorithm::ALL {
            let mut seq = Sequence::from(vec![1, 5, 2, 6, 3, 7, 4, 9, 8, 0]);
            algorithm.sorter(config).sort(&mut seq, &ascending);
            assert_eq!(
                seq.to_vec(),
                vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                "{} failed",
                algorithm.name()
            );
        }
    }

    #[test]
    fn test_descending_comparator() {
        let config = PoolConfig::with_workers(4).unwrap();
        for algorithm in Algorithm::ALL {
            let mut seq: Sequence = (0..50).collect();
            algorithm
                .sorter(config)
                .sort(&mut seq, &|s: &Sequence, a, b| s.get(a) > s.get(b));
            assert_eq!(seq.to_vec(), (0..50).rev().collect::<Vec<i32>>());
        }
    }
}
