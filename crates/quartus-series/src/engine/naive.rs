//! Quadratic coefficient recurrences.
//!
//! Each routine fills the result one coefficient at a time from the
//! already computed ones. Callers check preconditions and lengths.

use quartus_binom::FactorialTable;
use quartus_rings::traits::PrimeField;

use crate::calculus::table_index;

/// Coefficient `i` of `f`, zero past the end.
fn at<T: PrimeField>(f: &[T], i: usize) -> T {
    f.get(i).copied().unwrap_or_else(T::zero)
}

/// `g = 1 / f` from `g_n = -(1/f_0) Σ_{i=1..n} f_i g_{n-i}`.
pub(super) fn inverse<T: PrimeField>(f: &[T], c_inv: T, len: usize) -> Vec<T> {
    let mut g: Vec<T> = Vec::with_capacity(len);
    for n in 0..len {
        if n == 0 {
            g.push(c_inv);
            continue;
        }
        let mut sum = T::zero();
        for (i, &fi) in f.iter().enumerate().take(n + 1).skip(1) {
            sum = sum + fi * g[n - i];
        }
        g.push(-(sum * c_inv));
    }
    g
}

/// `g = log f` for `f_0 = 1`, from `f' = f g'`:
/// `n g_n = n f_n - Σ_{i=1..n-1} i g_i f_{n-i}`.
pub(super) fn log<T: PrimeField>(f: &[T], len: usize, table: &mut FactorialTable<T>) -> Vec<T> {
    let mut g = vec![T::zero(); len];
    // dg[i] = i g_i
    let mut dg = vec![T::zero(); len];
    for n in 1..len {
        let mut sum = T::zero();
        for i in 1..n {
            sum = sum + dg[i] * at(f, n - i);
        }
        let n_t = T::from_u64(n as u64);
        dg[n] = n_t * at(f, n) - sum;
        g[n] = dg[n] * table.inverse(table_index(n));
    }
    g
}

/// `g = exp f` for `f_0 = 0`, from `g' = f' g`:
/// `n g_n = Σ_{i=1..n} i f_i g_{n-i}`.
pub(super) fn exp<T: PrimeField>(f: &[T], len: usize, table: &mut FactorialTable<T>) -> Vec<T> {
    if len == 0 {
        return Vec::new();
    }
    let df: Vec<T> = (0..len).map(|i| T::from_u64(i as u64) * at(f, i)).collect();
    let mut g = Vec::with_capacity(len);
    g.push(T::one());
    for n in 1..len {
        let mut sum = T::zero();
        for i in 1..=n {
            sum = sum + df[i] * g[n - i];
        }
        g.push(sum * table.inverse(table_index(n)));
    }
    g
}

/// `g = a^e` for `a_0 != 0` by J.C.P. Miller's recurrence, from
/// `a g' = e a' g`:
/// `g_n = 1/(n a_0) Σ_{k=1..n} ((e+1) k - n) a_k g_{n-k}`.
///
/// `g0` must be a chosen value of `a_0^e`. The exponent only enters as a
/// field element, so a fractional `e` such as `1/2` works as well.
pub(super) fn miller<T: PrimeField>(
    a: &[T],
    g0: T,
    e: T,
    len: usize,
    table: &mut FactorialTable<T>,
) -> Vec<T> {
    if len == 0 {
        return Vec::new();
    }
    let a0_inv = T::one() / a[0];
    let e1 = e + T::one();
    let mut g = Vec::with_capacity(len);
    g.push(g0);
    for n in 1..len {
        let n_t = T::from_u64(n as u64);
        let mut sum = T::zero();
        for (k, &ak) in a.iter().enumerate().take(n + 1).skip(1) {
            let w = e1 * T::from_u64(k as u64) - n_t;
            sum = sum + w * ak * g[n - k];
        }
        g.push(sum * a0_inv * table.inverse(table_index(n)));
    }
    g
}

/// Square root in characteristic 2, where squaring is the Frobenius map
/// `Σ g_i x^i ↦ Σ g_i x^{2i}`.
///
/// Returns `None` if an odd coefficient below `len` is nonzero.
pub(super) fn frobenius_root<T: PrimeField>(f: &[T], len: usize) -> Option<Vec<T>> {
    if (0..len).any(|j| j % 2 == 1 && !at(f, j).is_zero()) {
        return None;
    }
    Some((0..len).map(|i| if 2 * i < len { at(f, 2 * i) } else { T::zero() }).collect())
}
