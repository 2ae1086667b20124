//! Formal calculus and EGF/OGF transforms.
//!
//! Integration and the factorial transforms read their scalars from a
//! [`FactorialTable`], passed explicitly so that one table can serve many
//! series.

use quartus_binom::FactorialTable;
use quartus_rings::traits::PrimeField;

use crate::fps::Fps;

/// Converts a coefficient index into a table argument.
///
/// Indices past `i64::MAX` saturate, which the table rejects as past the
/// modulus.
pub(crate) fn table_index(i: usize) -> i64 {
    i64::try_from(i).unwrap_or(i64::MAX)
}

impl<T: PrimeField> Fps<T> {
    /// Replaces the series by its derivative.
    ///
    /// The length drops by one; an empty series stays empty.
    pub fn differentiate(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut coeffs = std::mem::take(self).into_vec();
        for (i, c) in coeffs.iter_mut().enumerate().skip(1) {
            *c = *c * T::from_u64(i as u64);
        }
        coeffs.remove(0);
        *self = Self::from(coeffs);
    }

    /// Returns the derivative.
    #[must_use]
    pub fn differentiated(&self) -> Self {
        let mut f = self.clone();
        f.differentiate();
        f
    }

    /// Replaces the series by its antiderivative with zero constant term.
    ///
    /// The length grows by one.
    ///
    /// # Panics
    ///
    /// Panics if the current length is at least `P`, since the new top
    /// coefficient would need `1 / P`.
    pub fn integrate(&mut self, table: &mut FactorialTable<T>) {
        let mut coeffs = std::mem::take(self).into_vec();
        coeffs.insert(0, T::zero());
        for (i, c) in coeffs.iter_mut().enumerate().skip(1) {
            *c = *c * table.inverse(table_index(i));
        }
        *self = Self::from(coeffs);
    }

    /// Returns the antiderivative with zero constant term.
    ///
    /// # Panics
    ///
    /// Panics if the length is at least `P`.
    #[must_use]
    pub fn integrated(&self, table: &mut FactorialTable<T>) -> Self {
        let mut f = self.clone();
        f.integrate(table);
        f
    }

    /// Multiplies coefficient `i` by `i!`, turning an ordinary generating
    /// function into an exponential one.
    ///
    /// # Panics
    ///
    /// Panics if the length exceeds `P`.
    pub fn fact_mul(&mut self, table: &mut FactorialTable<T>) {
        for (i, c) in self.iter_mut().enumerate() {
            *c = *c * table.factorial(table_index(i));
        }
    }

    /// Returns the series with coefficient `i` multiplied by `i!`.
    ///
    /// # Panics
    ///
    /// Panics if the length exceeds `P`.
    #[must_use]
    pub fn fact_muled(&self, table: &mut FactorialTable<T>) -> Self {
        let mut f = self.clone();
        f.fact_mul(table);
        f
    }

    /// Divides coefficient `i` by `i!`, the inverse of [`Fps::fact_mul`].
    ///
    /// # Panics
    ///
    /// Panics if the length exceeds `P`.
    pub fn fact_div(&mut self, table: &mut FactorialTable<T>) {
        for (i, c) in self.iter_mut().enumerate() {
            *c = *c * table.inverse_factorial(table_index(i));
        }
    }

    /// Returns the series with coefficient `i` divided by `i!`.
    ///
    /// # Panics
    ///
    /// Panics if the length exceeds `P`.
    #[must_use]
    pub fn fact_dived(&self, table: &mut FactorialTable<T>) -> Self {
        let mut f = self.clone();
        f.fact_div(table);
        f
    }
}
