//! Parallel Odd-Even Transposition Sort ("Foam")
//!
//! A pool of workers pulls pair indices `j` from a job channel, orders the
//! pair `(j, j + 1)` and reports whether it swapped. The scheduler drives
//! the sort in phases:
//!
//! - **Even phase**: pairs (0,1), (2,3), (4,5), ...
//! - **Odd phase**: pairs (1,2), (3,4), (5,6), ...
//!
//! Pairs within a phase never share an index, so workers can exchange
//! elements without locks. A phase is fully collected before the next one is
//! dispatched, which keeps even and odd comparisons from interleaving.
//! One even phase plus one odd phase make a round; rounds repeat until a
//! round swaps nothing.
//!
//! Complexity: at most ⌈n/2⌉ + 1 rounds, each O(n / workers) wall-clock.

use tracing::trace;

use crate::config::PoolConfig;
use crate::pool;
use crate::sequence::{Less, PassObserver, Sequence};
use crate::sorter::{SortOutcome, Sorter};

#[derive(Debug, Clone, Copy, Default)]
pub struct FoamSort {
    config: PoolConfig,
}

impl FoamSort {
    pub fn new(config: PoolConfig) -> Self {
        FoamSort { config }
    }
}

impl Sorter for FoamSort {
    fn name(&self) -> &'static str {
        "foam"
    }

    fn sort_observed(
        &self,
        seq: &mut Sequence,
        less: &Less<'_>,
        mut observer: Option<&mut dyn PassObserver>,
    ) -> SortOutcome {
        let seq: &Sequence = seq;
        let pairs = seq.len().saturating_sub(1);
        let work = |j: usize| usize::from(seq.order_pair(j, j + 1, less));

        // The even phase is the larger one: ⌊n/2⌋ pairs.
        pool::run_pool("foam", self.config.workers(), seq.len() / 2, work, |dispatcher| {
            let mut outcome = SortOutcome::default();
            loop {
                let even = dispatcher.round((0..pairs).step_by(2))?;
                let odd = dispatcher.round((1..pairs).step_by(2))?;
                outcome.passes += 1;
                outcome.swaps += even + odd;
                trace!(round = outcome.passes, even, odd, "foam round");

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
