//! A factorial table shared across threads.
//!
//! Table growth is a check-then-extend sequence, so concurrent users of one
//! table must serialize access. [`SharedFactorialTable`] holds the table
//! behind a mutex and hands out exclusive access for the duration of a
//! closure.

use std::sync::Arc;

use parking_lot::Mutex;
use quartus_rings::traits::PrimeField;

use crate::table::FactorialTable;

/// A cloneable handle to one lock-guarded [`FactorialTable`].
///
/// Clones share the same table, so one instance per field can be created
/// at startup and passed to every user.
#[derive(Debug)]
pub struct SharedFactorialTable<T> {
    inner: Arc<Mutex<FactorialTable<T>>>,
}

impl<T> Clone for SharedFactorialTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T: PrimeField> SharedFactorialTable<T> {
    /// Creates a handle to a fresh table.
    #[must_use]
    pub fn new() -> Self {
        Self::from_table(FactorialTable::new())
    }

    /// Wraps an existing table.
    #[must_use]
    pub fn from_table(table: FactorialTable<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    /// Runs `f` with exclusive access to the table.
    ///
    /// The lock is held while `f` runs and is not reentrant, so `f` must
    /// work only through the `&mut FactorialTable` it is given. Calling
    /// [`SharedFactorialTable::binomial`], [`SharedFactorialTable::len`]
    /// or `with` on any handle to the same table from inside `f` deadlocks.
    pub fn with<R>(&self, f: impl FnOnce(&mut FactorialTable<T>) -> R) -> R {
        let mut table = self.inner.lock();
        f(&mut *table)
    }

    /// Returns `C(n, k)`; see [`FactorialTable::binomial`].
    ///
    /// # Panics
    ///
    /// Panics if the (reflected) upper argument is at least `P`.
    pub fn binomial(&self, n: i64, k: i64) -> T {
        self.with(|table| table.binomial(n, k))
    }

    /// Returns the number of covered indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with(|table| table.len())
    }
}

impl<T: PrimeField> Default for SharedFactorialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
