//! The truncated power series container.
//!
//! Index `i` holds the coefficient of `x^i`. The length is the truncation
//! order, not a degree bound, so trailing zeros are meaningful and are
//! only dropped by an explicit [`Fps::shrink`].

use std::ops::{Index, IndexMut};

use quartus_rings::traits::Ring;

/// A power series truncated to `len` coefficients.
///
/// Integer indexing accepts negative positions counted from the end:
/// `f[-1]` is the last coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fps<T> {
    coeffs: Vec<T>,
}

impl<T> Fps<T> {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Wraps a coefficient vector, constant term first.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Returns the truncation length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if there are no coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficients as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the coefficients as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.coeffs
    }

    /// Unwraps the coefficient vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.coeffs
    }

    /// Iterates over the coefficients, constant term first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Iterates mutably over the coefficients.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.coeffs.iter_mut()
    }

    /// Appends a coefficient, growing the length by one.
    pub fn push(&mut self, c: T) {
        self.coeffs.push(c);
    }

    /// Keeps only the first `len` coefficients.
    pub fn truncate(&mut self, len: usize) {
        self.coeffs.truncate(len);
    }

    /// Reverses the coefficient order in place.
    pub fn reverse(&mut self) {
        self.coeffs.reverse();
    }

    /// Resolves a possibly negative index.
    fn position(&self, index: isize) -> usize {
        match usize::try_from(index) {
            Ok(i) => i,
            Err(_) => self
                .len()
                .checked_sub(index.unsigned_abs())
                .unwrap_or_else(|| {
                    panic!("index {index} out of range for series of length {}", self.len())
                }),
        }
    }

    /// Maps a possibly negative endpoint onto `[lo, len]`.
    fn endpoint(&self, index: isize, lo: usize) -> usize {
        let len = self.len();
        let resolved = match usize::try_from(index) {
            Ok(i) => Some(i),
            Err(_) => len.checked_sub(index.unsigned_abs()),
        };
        resolved.unwrap_or(0).clamp(lo, len)
    }
}

impl<T: Clone> Fps<T> {
    /// Returns a reversed copy.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut f = self.clone();
        f.reverse();
        f
    }

    /// Copies the half-open range `[left, right)`.
    ///
    /// Negative endpoints count from the end. `left` is clamped into
    /// `[0, len]` and `right` into `[left, len]`, so an inverted or
    /// out-of-range request gives an empty series.
    #[must_use]
    pub fn slice(&self, left: isize, right: isize) -> Self {
        let l = self.endpoint(left, 0);
        let r = self.endpoint(right, l);
        Self::from_coeffs(self.coeffs[l..r].to_vec())
    }

    /// Returns coefficients from index `from` on, never padding.
    #[must_use]
    pub fn suffix(&self, from: isize) -> Self {
        self.slice(from, isize::MAX)
    }
}

impl<T: Ring> Fps<T> {
    /// Creates a series of `len` zero coefficients.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::from_coeffs(vec![T::zero(); len])
    }

    /// Returns the coefficient of `x^i`, zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Resizes to `len`, padding with zeros.
    pub fn resize(&mut self, len: usize) {
        self.coeffs.resize(len, T::zero());
    }

    /// Returns the first `len` coefficients, zero-padded if `len`
    /// exceeds the current length.
    ///
    /// A negative `len` counts from the end and never pads.
    #[must_use]
    pub fn prefix(&self, len: isize) -> Self {
        let mut f = self.slice(0, len);
        if let Ok(len) = usize::try_from(len) {
            if f.len() < len {
                f.resize(len);
            }
        }
        f
    }

    /// Drops trailing zero coefficients.
    pub fn shrink(&mut self) {
        while self.coeffs.last().is_some_and(Ring::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Counts the nonzero coefficients.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }
}

impl<T> Default for Fps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Fps<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl<T> FromIterator<T> for Fps<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_coeffs(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Fps<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Fps<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<T> Index<isize> for Fps<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        &self.coeffs[self.position(index)]
    }
}

impl<T> IndexMut<isize> for Fps<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        let i = self.position(index);
        &mut self.coeffs[i]
    }
}
