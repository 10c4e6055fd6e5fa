//! Coordinate-map storage for non-zero matrix entries
//!
//! The store owns the mapping from `(row, col)` position to non-zero
//! value and enforces the sparsity invariant: a value of exactly zero
//! is never stored, so absence always means zero. Every mutation goes
//! through `set`, which is what keeps that invariant airtight.

use crate::element::MatrixElement;
use hashbrown::HashMap;

/// Sparse coordinate storage keyed by `(row, col)`
///
/// Coordinates are a structural tuple key, not an encoded string, so
/// lookups allocate nothing and large indices stay unambiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct CooStore<E: MatrixElement> {
    entries: HashMap<(usize, usize), E>,
}

impl<E: MatrixElement> Default for CooStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MatrixElement> CooStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the value at a coordinate, or zero if absent
    pub fn get(&self, row: usize, col: usize) -> E {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(E::zero)
    }

    /// Set the value at a coordinate
    ///
    /// Setting exactly zero removes any existing entry (no-op if the
    /// coordinate was already absent); anything else inserts or
    /// overwrites.
    pub fn set(&mut self, row: usize, col: usize, value: E) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Number of non-zero entries stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over stored `(row, col, value)` triples
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, E)> + '_ {
        self.entries.iter().map(|(&(r, c), &v)| (r, c, v))
    }

    /// Elementwise sum of two stores
    ///
    /// The result holds, for every coordinate present in either input,
    /// the sum of both sides' values at that coordinate. Writes are
    /// routed through `set`, so coordinates whose sum is exactly zero
    /// are absent from the result. The outcome does not depend on the
    /// iteration order of either map: each coordinate is combined with
    /// a single commutative sum.
    pub fn merge_add(&self, other: &CooStore<E>) -> CooStore<E> {
        let mut result = self.clone();
        for (row, col, value) in other.iter() {
            result.set(row, col, result.get(row, col) + value);
        }
        result
    }
}
