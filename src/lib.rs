//! Parallel Bubble Sort Experiments
//!
//! Three in-place sorters over a shared `i32` sequence, all driven to a
//! fixed point by repeated passes and all observable once per pass:
//!
//! - **Bubble**: the sequential baseline.
//! - **Foam**: parallel odd-even transposition sort. A worker pool orders
//!   index-disjoint pairs one phase at a time.
//! - **Reddit**: parallel batched bubble sort. Each worker runs a private
//!   pass over a cache-line aligned batch per round.
//!
//! Comparators see the live sequence, so the same pair of indices may
//! compare differently between calls:
//!
//! ```
//! use foamsort::{ascending, FoamSort, PoolConfig, Sequence, Sorter};
//!
//! let mut seq = Sequence::from(vec![1, 5, 2, 6, 3, 7, 4, 9, 8, 0]);
//! FoamSort::new(PoolConfig::default()).sort(&mut seq, &ascending);
//! assert_eq!(seq.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! The [`generate`] and [`recorder`] modules build inputs and render each
//! pass into an animated GIF.

pub mod bubble_sort;
pub mod config;
pub mod error;
pub mod foam_sort;
pub mod generate;
mod pool;
pub mod recorder;
pub mod reddit_sort;
pub mod sequence;
pub mod sorter;

pub use bubble_sort::BubbleSort;
pub use config::PoolConfig;
pub use error::{Error, Result};
pub use foam_sort::FoamSort;
pub use generate::Case;
pub use recorder::GifRecorder;
pub use reddit_sort::RedditSort;
pub use sequence::{ascending, Less, PassObserver, Sequence, CACHE_LINE_ELEMS};
pub use sorter::{Algorithm, SortOutcome, Sorter};
