//! The factorial table.
//!
//! Three parallel arrays over `[0, len)`:
//! - `fact[i] = i!`
//! - `inv_fact[i] = 1 / i!`
//! - `inv[i] = 1 / i` (`inv[0]` is a sentinel `1`)
//!
//! `len` only grows, never past the modulus.

use quartus_rings::traits::PrimeField;

use crate::error::{BinomError, Result};

/// Lazily grown factorial, inverse factorial and inverse tables.
///
/// One table serves one field. Accessors take `&mut self` because a read
/// past the current bound extends the table first.
#[derive(Clone, Debug)]
pub struct FactorialTable<T> {
    fact: Vec<T>,
    inv_fact: Vec<T>,
    inv: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: PrimeField> FactorialTable<T> {
    /// Creates a table covering only index 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fact: vec![T::one()],
            inv_fact: vec![T::one()],
            inv: vec![T::one()],
        }
    }

    /// Creates a table already covering `0..=bound`.
    ///
    /// The bound is clamped to `P - 1`.
    #[must_use]
    pub fn with_bound(bound: usize) -> Self {
        let mut table = Self::new();
        let bound = bound.min(Self::cap() - 1);
        if let Err(err) = table.try_extend(bound) {
            // only a composite modulus gets here
            log::debug!("factorial table: eager growth stopped: {err}");
        }
        table
    }

    /// Returns the number of covered indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fact.len()
    }

    /// Largest length the field allows.
    fn cap() -> usize {
        usize::try_from(T::modulus()).unwrap_or(usize::MAX)
    }

    /// Grows the table so that `index` is covered.
    ///
    /// A no-op when `index < len`. Otherwise the new length is
    /// `min(max(index + 1, 2 * len), P)`. Either the whole step is
    /// committed or, on error, nothing changes.
    ///
    /// # Errors
    ///
    /// [`BinomError::BeyondModulus`] if `index >= P`;
    /// [`BinomError::NotInvertible`] if a factorial below `P` is zero,
    /// which only happens for a composite modulus.
    pub fn try_extend(&mut self, index: usize) -> Result<()> {
        let old = self.fact.len();
        if index < old {
            return Ok(());
        }

        let modulus = T::modulus();
        let cap = Self::cap();
        if index >= cap {
            return Err(BinomError::BeyondModulus {
                index: index as u64,
                modulus,
            });
        }
        let new_len = (index + 1).max(old.saturating_mul(2)).min(cap);

        // forward pass: factorials
        let mut fact = Vec::with_capacity(new_len - old);
        let mut acc = self.fact[old - 1];
        for i in old..new_len {
            acc = acc * T::from_u64(i as u64);
            fact.push(acc);
        }

        // the single inversion of this step
        let last = new_len - 1;
        let mut next_inv_fact = acc.inv().ok_or(BinomError::NotInvertible {
            index: last as u64,
            modulus,
        })?;

        // backward pass: 1/i! = (i+1) / (i+1)!
        let mut inv_fact = vec![T::zero(); new_len - old];
        inv_fact[last - old] = next_inv_fact;
        for i in (old..last).rev() {
            next_inv_fact = next_inv_fact * T::from_u64((i + 1) as u64);
            inv_fact[i - old] = next_inv_fact;
        }

        // 1/i = (i-1)! / i!
        let inv: Vec<T> = (old..new_len)
            .map(|i| {
                let prev_fact = if i == old { self.fact[old - 1] } else { fact[i - 1 - old] };
                inv_fact[i - old] * prev_fact
            })
            .collect();

        log::debug!("factorial table: grew {old} -> {new_len} (modulus {modulus})");
        self.fact.extend(fact);
        self.inv_fact.extend(inv_fact);
        self.inv.extend(inv);
        Ok(())
    }

    /// Extends to cover `index`, panicking on contract violations.
    fn ensure(&mut self, index: u64) -> usize {
        let index = usize::try_from(index).unwrap_or(usize::MAX);
        if let Err(err) = self.try_extend(index) {
            panic!("{err}");
        }
        index
    }

    /// Returns `index!`, growing the table as needed.
    pub(crate) fn fact_at(&mut self, index: u64) -> T {
        let i = self.ensure(index);
        self.fact[i]
    }

    /// Returns `1 / index!`, growing the table as needed.
    pub(crate) fn inv_fact_at(&mut self, index: u64) -> T {
        let i = self.ensure(index);
        self.inv_fact[i]
    }

    /// Returns `i!`, or zero for negative `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= P`.
    pub fn factorial(&mut self, i: i64) -> T {
        match u64::try_from(i) {
            Ok(index) => self.fact_at(index),
            Err(_) => T::zero(),
        }
    }

    /// Returns `1 / i!`, or zero for negative `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= P`.
    pub fn inverse_factorial(&mut self, i: i64) -> T {
        match u64::try_from(i) {
            Ok(index) => self.inv_fact_at(index),
            Err(_) => T::zero(),
        }
    }

    /// Returns `1 / i`; negative `i` gives `-(1 / -i)`.
    ///
    /// # Panics
    ///
    /// Panics if `i == 0` or `|i| >= P`.
    pub fn inverse(&mut self, i: i64) -> T {
        assert!(i != 0, "inverse of zero is undefined");
        let index = self.ensure(i.unsigned_abs());
        let value = self.inv[index];
        if i < 0 {
            -value
        } else {
            value
        }
    }
}

impl<T: PrimeField> Default for FactorialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
