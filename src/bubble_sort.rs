//! Sequential Bubble Sort Baseline
//!
//! Single-threaded left-to-right adjacent-pair passes, repeated until a pass
//! makes no swap. Exists as the point of comparison for the parallel sorters.
//!
//! Complexity: O(n²) comparisons, at most n passes.

use tracing::trace;

use crate::sequence::{Less, PassObserver, Sequence};
use crate::sorter::{SortOutcome, Sorter};

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort_observed(
        &self,
        seq: &mut Sequence,
        less: &Less<'_>,
        mut observer: Option<&mut dyn PassObserver>,
    ) -> SortOutcome {
        let seq: &Sequence = seq;
        let pairs = seq.len().saturating_sub(1);
        let mut outcome = SortOutcome::default();

        loop {
            let swaps = (0..pairs)
                .filter(|&i| seq.order_pair(i, i + 1, less))
                .count();
            outcome.passes += 1;
            outcome.swaps += swaps;
            trace!(pass = outcome.passes, swaps, "bubble pass");

            if let Some(observer) = observer.as_deref_mut() {
                observer.on_pass(seq);
            }
            if swaps == 0 {
                return outcome;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ascending;
    use rand::Rng;

    fn sorted(values: Vec<i32>) -> (Vec<i32>, SortOutcome) {
        let mut seq = Sequence::from(values);
        let outcome = BubbleSort.sort(&mut seq, &ascending);
        (seq.to_vec(), outcome)
    }

    #[test]
    fn test_sort_empty() {
        let (data, outcome) = sorted(vec![]);
        assert!(data.is_empty());
        assert_eq!(outcome, SortOutcome { passes: 1, swaps: 0 });
    }

    #[test]
    fn test_sort_single() {
        let (data, _) = sorted(vec![42]);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_concrete() {
        let (data, _) = sorted(vec![1, 5, 2, 6, 3, 7, 4, 9, 8, 0]);
        assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_sort_reverse_counts() {
        // A reversed run of n needs n-1 swapping passes plus one clean pass,
        // and n(n-1)/2 swaps in total.
        let (data, outcome) = sorted((1..=20).rev().collect());
        assert_eq!(data, (1..=20).collect::<Vec<i32>>());
        assert_eq!(outcome.passes, 20);
        assert_eq!(outcome.swaps, 190);
    }

    #[test]
    fn test_sort_duplicates() {
        let (data, _) = sorted(vec![5, 3, 5, 1, 3, 5, 1, 1]);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let data: Vec<i32> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        let (data, _) = sorted(data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_already_sorted_single_pass() {
        let mut seq: Sequence = (0..100).collect();
        let mut calls = 0;
        let mut observer = |_: &Sequence| calls += 1;
        let outcome = BubbleSort.sort_observed(&mut seq, &ascending, Some(&mut observer));
        assert_eq!(outcome, SortOutcome { passes: 1, swaps: 0 });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_observer_sees_each_pass() {
        let mut seq = Sequence::from(vec![3, 2, 1]);
        let mut snapshots = Vec::new();
        let mut observer = |s: &Sequence| snapshots.push(s.to_vec());
        BubbleSort.sort_observed(&mut seq, &ascending, Some(&mut observer));
        assert_eq!(
            snapshots,
            vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]]
        );
    }
}
