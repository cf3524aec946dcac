//! Error types for configuration, verification and frame recording.
//!
//! Sorting itself has no error path: a panicking comparator is re-raised on
//! the caller's thread, and channel capacities are sized so that dispatch can
//! never deadlock. Everything that can fail at runtime lives here.

use std::io;
use std::path::PathBuf;

/// Central error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pool was configured with zero workers.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// Batches cannot be aligned to an empty cache line.
    #[error("cache line element count must be at least 1")]
    EmptyCacheLine,

    /// GIF frames are limited to `u16` dimensions.
    #[error("sequence length {len} exceeds the largest frame dimension ({max})")]
    FrameTooLarge { len: usize, max: usize },

    /// The output artifact could not be created.
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The GIF encoder rejected a frame or the trailer.
    #[error("failed to encode frame: {0}")]
    Encode(#[from] gif::EncodingError),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// A sorter returned a sequence that differs from the reference sort.
    #[error("{sorter} left the {case} input unsorted")]
    Unsorted { sorter: String, case: String },
}

pub type Result<T> = std::result::Result<T, Error>;
