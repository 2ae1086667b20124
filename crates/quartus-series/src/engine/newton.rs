//! Newton doubling iterations.
//!
//! Each step doubles the number of correct coefficients, so the total cost
//! is a constant number of convolutions at the final length.

use quartus_binom::FactorialTable;
use quartus_poly::Convolution;
use quartus_rings::traits::PrimeField;

use crate::fps::Fps;

/// Leading `len` coefficients of `f`, without padding.
fn head<T>(f: &[T], len: usize) -> &[T] {
    &f[..f.len().min(len)]
}

/// `g ← g (2 - f g)`, starting from `g = 1 / f_0`.
pub(super) fn inverse<T, C>(f: &[T], c_inv: T, len: usize, conv: &C) -> Vec<T>
where
    T: PrimeField,
    C: Convolution<T>,
{
    if len == 0 {
        return Vec::new();
    }
    let two = T::from_u64(2);
    let mut g = vec![c_inv];
    let mut k = 1;
    while k < len {
        let k2 = (2 * k).min(len);
        let mut h = conv.convolve(head(f, k2), &g, k2);
        for x in &mut h {
            *x = -*x;
        }
        h[0] = h[0] + two;
        g = conv.convolve(&g, &h, k2);
        k = k2;
    }
    g
}

/// `log f = ∫ f' / f` for `f_0 = 1`.
pub(super) fn log<T, C>(f: &[T], len: usize, table: &mut FactorialTable<T>, conv: &C) -> Vec<T>
where
    T: PrimeField,
    C: Convolution<T>,
{
    if len == 0 {
        return Vec::new();
    }
    let mut df = Fps::from(head(f, len).to_vec());
    df.resize(len);
    df.differentiate();
    let f_inv = inverse(f, T::one(), len - 1, conv);
    let q = conv.convolve(df.as_slice(), &f_inv, len - 1);
    Fps::from(q).integrated(table).into_vec()
}

/// `g ← g (1 - log g + f)`, starting from `g = 1`, for `f_0 = 0`.
pub(super) fn exp<T, C>(f: &[T], len: usize, table: &mut FactorialTable<T>, conv: &C) -> Vec<T>
where
    T: PrimeField,
    C: Convolution<T>,
{
    if len == 0 {
        return Vec::new();
    }
    let mut g = vec![T::one()];
    let mut k = 1;
    while k < len {
        let k2 = (2 * k).min(len);
        let lg = log(&g, k2, table, conv);
        let mut h: Vec<T> = (0..k2)
            .map(|i| f.get(i).copied().unwrap_or_else(T::zero) - lg[i])
            .collect();
        h[0] = h[0] + T::one();
        g = conv.convolve(&g, &h, k2);
        k = k2;
    }
    g
}

/// `a^e = a_0^e exp(e log(a / a_0))` for `a_0 != 0`.
pub(super) fn pow<T, C>(a: &[T], e: u64, len: usize, table: &mut FactorialTable<T>, conv: &C) -> Vec<T>
where
    T: PrimeField,
    C: Convolution<T>,
{
    if len == 0 {
        return Vec::new();
    }
    let c = a[0];
    let monic = Fps::from(head(a, len).to_vec()) / c;
    let scaled = Fps::from(log(monic.as_slice(), len, table, conv)) * T::from_u64(e);
    let g = Fps::from(exp(scaled.as_slice(), len, table, conv)) * c.pow(e);
    g.into_vec()
}

/// `g ← (g + a / g) / 2`, starting from a root `r` of `a_0`.
///
/// The modulus must be odd.
pub(super) fn sqrt<T, C>(a: &[T], r: T, len: usize, conv: &C) -> Vec<T>
where
    T: PrimeField,
    C: Convolution<T>,
{
    if len == 0 {
        return Vec::new();
    }
    let half = T::from_u64(T::modulus().div_ceil(2));
    // every iterate keeps g_0 = r
    let r_inv = T::one() / r;
    let mut g = vec![r];
    let mut k = 1;
    while k < len {
        let k2 = (2 * k).min(len);
        let g_inv = inverse(&g, r_inv, k2, conv);
        let t = conv.convolve(head(a, k2), &g_inv, k2);
        g.resize(k2, T::zero());
        for (gi, ti) in g.iter_mut().zip(t) {
            *gi = (*gi + ti) * half;
        }
        k = k2;
    }
    g
}
