//! Shared Sequence Storage
//!
//! The sequence being sorted is shared between the scheduler, every worker
//! and the comparator, and it is mutated while they all hold a reference to
//! it. Each element is therefore an `AtomicI32` cell, and cells are grouped
//! into 64-byte aligned cache lines so a batch that starts on a multiple of
//! [`CACHE_LINE_ELEMS`] starts on a fresh line.
//!
//! All cell accesses are `Relaxed`. A worker only ever touches the indices of
//! the jobs it was handed, and the job/result channel hand-off between phases
//! orders every write of one phase before any read of the next.

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// Number of `i32` elements in a 64-byte cache line.
pub const CACHE_LINE_ELEMS: usize = 16;

/// Comparator over two indices of the live sequence.
///
/// Must be a strict order for the values currently stored at `a` and `b`.
pub type Less<'a> = dyn Fn(&Sequence, usize, usize) -> bool + Sync + 'a;

/// The stock ascending comparator.
#[inline]
pub fn ascending(seq: &Sequence, a: usize, b: usize) -> bool {
    seq.get(a) < seq.get(b)
}

/// Called once after every completed pass or round.
pub trait PassObserver {
    fn on_pass(&mut self, seq: &Sequence);
}

impl<F> PassObserver for F
where
    F: FnMut(&Sequence),
{
    fn on_pass(&mut self, seq: &Sequence) {
        self(seq)
    }
}

#[repr(C, align(64))]
struct CacheLine([AtomicI32; CACHE_LINE_ELEMS]);

impl CacheLine {
    fn zeroed() -> Self {
        CacheLine(std::array::from_fn(|_| AtomicI32::new(0)))
    }
}

/// A fixed-length sequence of `i32` values, readable and writable by index
/// from many threads at once.
pub struct Sequence {
    lines: Vec<CacheLine>,
    len: usize,
}

impl Sequence {
    /// Build a sequence holding `values` in order.
    pub fn new(values: &[i32]) -> Self {
        let mut lines: Vec<CacheLine> = (0..values.len().div_ceil(CACHE_LINE_ELEMS))
            .map(|_| CacheLine::zeroed())
            .collect();
        for (line, chunk) in lines.iter_mut().zip(values.chunks(CACHE_LINE_ELEMS)) {
            for (cell, &value) in line.0.iter_mut().zip(chunk) {
                *cell.get_mut() = value;
            }
        }
        Sequence {
            lines,
            len: values.len(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn cell(&self, index: usize) -> &AtomicI32 {
        assert!(
            index < self.len,
            "index {} out of bounds for sequence of length {}",
            index,
            self.len
        );
        &self.lines[index / CACHE_LINE_ELEMS].0[index % CACHE_LINE_ELEMS]
    }

    /// Current value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.cell(index).load(Ordering::Relaxed)
    }

    #[inline]
    fn store(&self, index: usize, value: i32) {
        self.cell(index).store(value, Ordering::Relaxed);
    }

    /// Compare the adjacent-or-not pair `(a, b)` and exchange it if it is out
    /// of order. Equal values are never exchanged. Returns whether a swap
    /// happened.
    ///
    /// The caller must be the only thread touching `a` and `b` for the
    /// duration of the call.
    #[inline]
    pub(crate) fn order_pair(&self, a: usize, b: usize, less: &Less<'_>) -> bool {
        let (va, vb) = (self.get(a), self.get(b));
        if va == vb || less(self, a, b) {
            return false;
        }
        self.store(a, vb);
        self.store(b, va);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Copy the current values out.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Check if the sequence is in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        (1..self.len).all(|i| self.get(i - 1) <= self.get(i))
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Sequence::new(&values)
    }
}

impl From<&[i32]> for Sequence {
    fn from(values: &[i32]) -> Self {
        Sequence::new(values)
    }
}

impl FromIterator<i32> for Sequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let values: Vec<i32> = iter.into_iter().collect();
        Sequence::new(&values)
    }
}

impl Clone for Sequence {
    fn clone(&self) -> Self {
        Sequence::new(&self.to_vec())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Sequence {}
