//! Parallel Batched Bubble Sort ("Reddit")
//!
//! A coarser-grained variant of the foam sort: instead of one job per pair,
//! each worker gets a contiguous batch of cache-line aligned elements and
//! runs a private sequential bubble pass over it. Batches are sized as
//! `⌊n / workers⌋` rounded up to a whole number of cache lines, so adjacent
//! workers write to different lines.
//!
//! A worker's pass covers `batch + 1` pairs, spilling one element into the
//! next batch so a swap straddling the boundary is never missed. Two
//! neighbouring batches therefore share an element. To keep that element
//! single-owner, every round is dispatched in two waves: even-numbered
//! batches first, then odd-numbered ones. Batches in the same wave are at
//! least one full batch apart.
//!
//! Rounds repeat until neither wave swaps anything.

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::pool;
use crate::sequence::{Less, PassObserver, Sequence};
use crate::sorter::{SortOutcome, Sorter};

/// Smallest batch that keeps same-wave batches from touching.
const MIN_BATCH: usize = 2;

/// Batch length for `len` elements over `workers` workers: `⌊len / workers⌋`
/// rounded up to a multiple of `cache_line_elems`.
///
/// ```
/// assert_eq!(foamsort::reddit_sort::batch_size(1000, 4, 16), 256);
/// ```
pub fn batch_size(len: usize, workers: usize, cache_line_elems: usize) -> usize {
    let line = cache_line_elems.max(1);
    let batch = (len / workers.max(1)).max(MIN_BATCH);
    batch.div_ceil(line) * line
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedditSort {
    config: PoolConfig,
}

impl RedditSort {
    pub fn new(config: PoolConfig) -> Self {
        RedditSort { config }
    }

    /// Batch length this sorter would use for a sequence of `len` elements.
    pub fn batch_for(&self, len: usize) -> usize {
        batch_size(len, self.config.workers(), self.config.cache_line_elems())
    }
}

impl Sorter for RedditSort {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn sort_observed(
        &self,
        seq: &mut Sequence,
        less: &Less<'_>,
        mut observer: Option<&mut dyn PassObserver>,
    ) -> SortOutcome {
        let seq: &Sequence = seq;
        let pairs = seq.len().saturating_sub(1);
        // Fixed for the whole call; workers capture it by value.
        let batch = self.batch_for(seq.len());
        let starts: Vec<usize> = (0..pairs).step_by(batch).collect();
        debug!(len = seq.len(), batch, jobs = starts.len(), "reddit batches");

        let work = move |start: usize| {
            let end = (start + batch + 1).min(pairs);
            (start..end)
                .filter(|&j| seq.order_pair(j, j + 1, less))
                .count()
        };

        pool::run_pool("reddit", self.config.workers(), starts.len(), work, |dispatcher| {
            let mut outcome = SortOutcome::default();
            loop {
                let even = dispatcher.round(starts.iter().copied().step_by(2))?;
                let odd = dispatcher.round(starts.iter().copied().skip(1).step_by(2))?;
                outcome.passes += 1;
                outcome.swaps += even + odd;
                trace!(round = outcome.passes, swaps = even + odd, "reddit round");

                if let Some(observer) = observer.as_deref_mut() {
                    observer.on_pass(seq);
                }
                if even + odd == 0 {
                    return Ok(outcome);
                }
            }
        })
    }
}
