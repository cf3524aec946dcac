//! Short-Lived Worker Pool
//!
//! Both parallel sorters run the same shape of pool: a fixed set of scoped
//! worker threads, one bounded job channel and one bounded result channel.
//! The scheduler works in count-matched rounds: it sends `k` jobs and then
//! receives exactly `k` results before it may send anything else. That
//! round boundary is the phase barrier the sorters rely on.
//!
//! Each job runs under `catch_unwind`, so a panicking comparator still
//! produces a result and the count stays matched. The first panic payload of
//! a round is handed back to the scheduler, which stops dispatching; the pool
//! then closes its channels, joins every worker and re-raises the panic on
//! the calling thread.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::debug;

/// Panic payload carried from a worker back to the caller.
pub(crate) type Panic = Box<dyn Any + Send + 'static>;

/// Scheduler end of the pool's channels.
pub(crate) struct Dispatcher<J> {
    jobs: Sender<J>,
    results: Receiver<thread::Result<usize>>,
    capacity: usize,
}

impl<J> Dispatcher<J> {
    /// Dispatch every job, then wait for exactly as many results.
    ///
    /// Returns the summed per-job swap counts, or the first panic raised by
    /// a job in this round.
    pub(crate) fn round<I>(&self, jobs: I) -> Result<usize, Panic>
    where
        I: IntoIterator<Item = J>,
    {
        let mut sent = 0;
        for job in jobs {
            if self.jobs.send(job).is_err() {
                break;
            }
            sent += 1;
        }
        // Larger rounds could fill both channels while we are still sending.
        debug_assert!(
            sent <= self.capacity,
            "round of {} jobs exceeds channel capacity {}",
            sent,
            self.capacity
        );

        let mut swaps = 0;
        let mut failure: Option<Panic> = None;
        for _ in 0..sent {
            match self.results.recv() {
                Ok(Ok(n)) => swaps += n,
                Ok(Err(payload)) => {
                    if failure.is_none() {
                        failure = Some(payload);
                    }
                }
                Err(_) => break,
            }
        }

        match failure {
            Some(payload) => Err(payload),
            None => Ok(swaps),
        }
    }
}

/// Run `schedule` against a pool of `workers` threads that each apply `work`
/// to the jobs it dispatches.
///
/// `capacity` bounds both channels and must be at least the largest round
/// `schedule` will dispatch. The pool is torn down before this returns.
pub(crate) fn run_pool<J, W, S, R>(
    name: &'static str,
    workers: usize,
    capacity: usize,
    work: W,
    schedule: S,
) -> R
where
    J: Send,
    W: Fn(J) -> usize + Sync,
    S: FnOnce(&Dispatcher<J>) -> Result<R, Panic>,
{
    let capacity = capacity.max(1);
    let (job_tx, job_rx) = bounded::<J>(capacity);
    let (result_tx, result_rx) = bounded::<thread::Result<usize>>(capacity);

    debug!(pool = name, workers, capacity, "starting worker pool");

    let outcome = thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            let work = &work;
            scope.spawn(move || {
                for job in jobs.iter() {
                    let done = panic::catch_unwind(AssertUnwindSafe(|| work(job)));
                    if results.send(done).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        let dispatcher = Dispatcher {
            jobs: job_tx,
            results: result_rx,
            capacity,
        };
        let outcome = schedule(&dispatcher);
        // Closing the job channel ends every worker's receive loop.
        drop(dispatcher);
        outcome
    });

    debug!(pool = name, "worker pool stopped");

    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_round_sums_results() {
        let total = run_pool("test", 4, 16, |job: usize| job, |d| d.round(0..10));
        assert_eq!(total, 45);
    }

    #[test]
    fn test_empty_round() {
        let total = run_pool("test", 2, 0, |job: usize| job, |d| d.round(Vec::new()));
        assert_eq!(total, 0);
    }

    #[test]
    fn test_rounds_are_barriers() {
        // Every job of round one must finish before any job of round two runs.
        let finished = AtomicUsize::new(0);
        let work = |round: usize| {
            if round == 1 {
                finished.fetch_add(1, Ordering::SeqCst);
                0
            } else {
                finished.load(Ordering::SeqCst)
            }
        };
        let seen = run_pool("test", 8, 32, work, |d| {
            d.round(std::iter::repeat(1).take(32))?;
            d.round(std::iter::repeat(2).take(32))
        });
        assert_eq!(seen, 32 * 32);
    }

    #[test]
    fn test_more_workers_than_jobs() {
        let total = run_pool("test", 64, 2, |job: usize| job * 2, |d| d.round([1, 2]));
        assert_eq!(total, 6);
    }

    #[test]
    #[should_panic(expected = "job 3 failed")]
    fn test_worker_panic_reaches_caller() {
        run_pool(
            "test",
            4,
            8,
            |job: usize| {
                if job == 3 {
                    panic!("job 3 failed");
                }
                job
            },
            |d| d.round(0..8),
        );
    }

    #[test]
    fn test_panic_stops_dispatch() {
        let rounds = AtomicUsize::new(0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            run_pool(
                "test",
                2,
                4,
                |job: usize| -> usize {
                    if job == 0 {
                        panic!("boom");
                    }
                    job
                },
                |d| -> Result<(), Panic> {
                    loop {
                        rounds.fetch_add(1, Ordering::SeqCst);
                        d.round(0..4)?;
                    }
                },
            )
        }));
        assert!(result.is_err());
        assert_eq!(rounds.load(Ordering::SeqCst), 1);
    }
}
