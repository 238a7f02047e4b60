//! Sparse vector interchange type
//!
//! `SparseVector` is the only type that crosses the matrix boundary: rows and
//! columns go in and come out as ordered index → value maps. Near-zero values
//! are never stored through [`SparseVector::insert`].

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::vec::Vec;
use core::ops::{Add, Index, Sub};

use crate::error::{DcsrError, Result};

/// Magnitude at or below which [`SparseVector::insert`] drops a value
pub const ZERO_TOLERANCE: f64 = 1e-12;

static ZERO: f64 = 0.0;

/// Ordered sparse vector of `f64` values keyed by index
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseVector {
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `index` unless it is near zero
    ///
    /// Returns whether the value was stored. A stored value replaces any
    /// previous value at the same index.
    pub fn insert(&mut self, index: usize, value: f64) -> bool {
        if value.abs() <= ZERO_TOLERANCE {
            return false;
        }
        self.entries.insert(index, value);
        true
    }

    /// Store `value` at `index` unconditionally, zeros included
    ///
    /// Prefer [`SparseVector::insert`]; explicit zeros count towards `len`.
    pub fn set(&mut self, index: usize, value: f64) {
        self.entries.insert(index, value);
    }

    /// Remove the value at `index`, returning whether one was present
    pub fn remove(&mut self, index: usize) -> bool {
        self.entries.remove(&index).is_some()
    }

    /// Remove every stored value
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Value at `index`, or 0.0 when absent
    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    /// Alias of [`SparseVector::get`]
    pub fn at(&self, index: usize) -> f64 {
        self.get(index)
    }

    /// Whether a value is stored at `index`
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no values are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    /// Greatest stored index
    pub fn max_index(&self) -> Result<usize> {
        self.entries
            .last_key_value()
            .map(|(&index, _)| index)
            .ok_or(DcsrError::EmptyContainer)
    }

    /// Logical length: greatest index + 1, or 0 when empty
    pub fn dimension(&self) -> usize {
        self.max_index().map_or(0, |index| index + 1)
    }

    /// Iterate over (index, value) pairs in ascending index order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Stored (index, value) pairs in ascending index order
    pub fn elements(&self) -> Vec<(usize, f64)> {
        self.iter().collect()
    }

    /// Dot product over the shared indices
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut lhs = self.iter().peekable();
        let mut rhs = other.iter().peekable();
        let mut sum = 0.0;

        while let (Some(&(i, a)), Some(&(j, b))) = (lhs.peek(), rhs.peek()) {
            match i.cmp(&j) {
                core::cmp::Ordering::Less => {
                    lhs.next();
                }
                core::cmp::Ordering::Greater => {
                    rhs.next();
                }
                core::cmp::Ordering::Equal => {
                    sum += a * b;
                    lhs.next();
                    rhs.next();
                }
            }
        }

        sum
    }

    /// Apply `op` over the union of both index sets
    ///
    /// Results go through `insert`, so entries that cancel out disappear.
    pub fn zip_with<F>(&self, other: &SparseVector, op: F) -> SparseVector
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut indices: Vec<usize> = self
            .entries
            .keys()
            .chain(other.entries.keys())
            .copied()
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut result = SparseVector::new();
        for index in indices {
            result.insert(index, op(self.get(index), other.get(index)));
        }
        result
    }
}

/// Ascending iterator over a [`SparseVector`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, usize, f64>,
}

impl Iterator for Iter<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, &value)| (index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = (usize, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(usize, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        let mut vector = SparseVector::new();
        vector.extend(iter);
        vector
    }
}

impl Extend<(usize, f64)> for SparseVector {
    fn extend<I: IntoIterator<Item = (usize, f64)>>(&mut self, iter: I) {
        for (index, value) in iter {
            self.insert(index, value);
        }
    }
}

impl Index<usize> for SparseVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        self.entries.get(&index).unwrap_or(&ZERO)
    }
}

impl Add for &SparseVector {
    type Output = SparseVector;

    fn add(self, rhs: &SparseVector) -> SparseVector {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &SparseVector {
    type Output = SparseVector;

    fn sub(self, rhs: &SparseVector) -> SparseVector {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl core::fmt::Display for SparseVector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, value) in self {
            writeln!(f, "{index} : {value}")?;
        }
        Ok(())
    }
}
