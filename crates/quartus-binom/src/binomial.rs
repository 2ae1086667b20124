//! Binomial coefficients and their relatives.
//!
//! `C(n, k)` is continued to negative `n` and `k` so that, for every
//! integer pair,
//! - `C(n, k) = C(n, n - k)`
//! - `k * C(n, k) = n * C(n - 1, k - 1)`
//! - `C(n, k) = C(n - 1, k - 1) + C(n - 1, k)` except at `(0, 0)`
//!
//! cf. <https://hos-lyric.hatenablog.com/entry/2021/06/10/004947>

use quartus_rings::traits::PrimeField;

use crate::table::FactorialTable;

/// Reduces an arbitrary integer into the field.
fn from_i128<T: PrimeField>(v: i128) -> T {
    let r = v.rem_euclid(i128::from(T::modulus()));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    T::from_u64(r as u64)
}

/// Narrows a table argument; anything past `i64::MAX` is past the modulus
/// too and saturates into the out-of-range panic.
fn saturate(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}

/// `(-1)^e * v`
fn signed<T: PrimeField>(e: i128, v: T) -> T {
    if e % 2 == 0 {
        v
    } else {
        -v
    }
}

impl<T: PrimeField> FactorialTable<T> {
    /// Returns the generalized binomial coefficient `C(n, k)`.
    ///
    /// For `n >= 0` this is `n! / (k! (n-k)!)` inside `0 <= k <= n` and
    /// zero outside. For `n < 0`:
    /// - `k >= 0`: `(-1)^k C(k - n - 1, k)`
    /// - `k <= n`: `(-1)^(n-k) C(-k - 1, n - k)`
    /// - `n < k < 0`: zero
    ///
    /// # Panics
    ///
    /// Panics if the (reflected) upper argument is at least `P`.
    pub fn binomial(&mut self, n: i64, k: i64) -> T {
        self.binomial_wide(i128::from(n), i128::from(k))
    }

    fn binomial_wide(&mut self, n: i128, k: i128) -> T {
        if n < 0 {
            if k >= 0 {
                return signed(k, self.binomial_wide(k - n - 1, k));
            }
            if k <= n {
                return signed(n - k, self.binomial_wide(-k - 1, n - k));
            }
            return T::zero();
        }
        if k < 0 || k > n {
            return T::zero();
        }
        let (n, k) = (saturate(n), saturate(k));
        self.factorial(n) * self.inverse_factorial(k) * self.inverse_factorial(n - k)
    }

    /// Returns `C(n, k)` as a falling product of `min(k, n - k)` factors.
    ///
    /// Agrees with [`FactorialTable::binomial`] but only needs the table to
    /// cover `min(k, n - k)`, so `n` may be far beyond the modulus. Negative
    /// `n` is reflected the same way.
    ///
    /// # Panics
    ///
    /// Panics if `min(k, n - k)` (after reflection) is at least `P`.
    pub fn binomial_naive(&mut self, n: i64, k: i64) -> T {
        self.binomial_naive_wide(i128::from(n), i128::from(k))
    }

    fn binomial_naive_wide(&mut self, n: i128, k: i128) -> T {
        if n < 0 {
            if k >= 0 {
                return signed(k, self.binomial_naive_wide(k - n - 1, k));
            }
            if k <= n {
                return signed(n - k, self.binomial_naive_wide(-k - 1, n - k));
            }
            return T::zero();
        }
        let k = k.min(n - k);
        if k < 0 {
            return T::zero();
        }
        let mut ans = self.inverse_factorial(saturate(k));
        for i in 0..k {
            ans = ans * from_i128(n - i);
        }
        ans
    }

    /// Returns the permutation count `P(n, k) = n! / (n-k)!`.
    ///
    /// Zero unless `0 <= k <= n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= P`.
    pub fn permutation(&mut self, n: i64, k: i64) -> T {
        if n < 0 || k < 0 || n < k {
            return T::zero();
        }
        self.factorial(n) * self.inverse_factorial(n - k)
    }

    /// Returns `[x^k] 1 / (1-x)^n = C(n + k - 1, k)`, zero for `k < 0`.
    ///
    /// # Panics
    ///
    /// Panics if the binomial's reflected upper argument is at least `P`.
    pub fn multichoose(&mut self, n: i64, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        self.binomial_wide(i128::from(n) + i128::from(k) - 1, i128::from(k))
    }

    /// Returns `[x^k] 1 / (1-x)^n` through [`FactorialTable::binomial_naive`].
    ///
    /// # Panics
    ///
    /// Panics if `k >= P`.
    pub fn multichoose_naive(&mut self, n: i64, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        self.binomial_naive_wide(i128::from(n) + i128::from(k) - 1, i128::from(k))
    }

    /// Returns the multinomial coefficient `(k_1 + ... + k_m)! / (k_1! ... k_m!)`.
    ///
    /// An empty sequence gives one.
    ///
    /// # Panics
    ///
    /// Panics if the total is at least `P`.
    pub fn multinomial<I>(&mut self, parts: I) -> T
    where
        I: IntoIterator<Item = usize>,
    {
        let mut den = T::one();
        let mut n = 0u64;
        for k in parts {
            let k = k as u64;
            den = den * self.inv_fact_at(k);
            n = n.saturating_add(k);
        }
        den * self.fact_at(n)
    }
}
