//! Worker pool configuration.

use std::thread;

use crate::error::{Error, Result};
use crate::sequence::CACHE_LINE_ELEMS;

/// How many workers a parallel sorter spawns and how its batches are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    workers: usize,
    cache_line_elems: usize,
}

impl PoolConfig {
    /// Create a validated configuration.
    pub fn new(workers: usize, cache_line_elems: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::NoWorkers);
        }
        if cache_line_elems == 0 {
            return Err(Error::EmptyCacheLine);
        }
        Ok(PoolConfig {
            workers,
            cache_line_elems,
        })
    }

    /// Host defaults with an explicit worker count.
    pub fn with_workers(workers: usize) -> Result<Self> {
        Self::new(workers, CACHE_LINE_ELEMS)
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[inline]
    pub fn cache_line_elems(&self) -> usize {
        self.cache_line_elems
    }
}

impl Default for PoolConfig {
    /// One worker per available hardware thread, 16-element cache lines.
    fn default() -> Self {
        PoolConfig {
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
            cache_line_elems: CACHE_LINE_ELEMS,
        }
    }
}
