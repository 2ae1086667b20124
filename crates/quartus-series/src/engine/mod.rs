//! Inverse, logarithm, exponential, power and square root.
//!
//! Every operation reads a series, truncates to a requested length
//! (default: the series' own length) and runs one of two strategies:
//!
//! | Strategy | Cost | Needs |
//! |----------|------|-------|
//! | [`Strategy::Naive`] | O(n²) field operations | the factorial table |
//! | [`Strategy::Newton`] | O(M(n)) via the convolution | the factorial table and the convolution |
//!
//! Both give identical coefficients.

mod naive;
mod newton;

use quartus_binom::FactorialTable;
use quartus_poly::{AutoConvolution, Convolution};
use quartus_rings::traits::PrimeField;

use crate::error::{Result, SeriesError};
use crate::fps::Fps;

/// Algorithm choice for a transcendental operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Naive up to [`EngineConfig::naive_threshold`] and while the length
    /// stays within the field, Newton otherwise.
    #[default]
    Auto,
    /// Coefficient recurrences.
    Naive,
    /// Newton iteration over the context's convolution.
    Newton,
}

/// Tuning for [`Strategy::Auto`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Longest truncation that [`Strategy::Auto`] computes naively.
    pub naive_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { naive_threshold: 64 }
    }
}

/// Everything the transcendental operations draw on: a factorial table,
/// a convolution and the strategy thresholds.
///
/// One context serves any number of series over the same field; the
/// table inside keeps growing across calls.
#[derive(Clone, Debug)]
pub struct SeriesContext<T, C = AutoConvolution<T>> {
    table: FactorialTable<T>,
    conv: C,
    config: EngineConfig,
}

impl<T: PrimeField> SeriesContext<T> {
    /// Creates a context with an empty table, [`AutoConvolution`] and
    /// default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_convolution(AutoConvolution::new())
    }
}

impl<T: PrimeField> Default for SeriesContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeField, C: Convolution<T>> SeriesContext<T, C> {
    /// Creates a context around the given convolution.
    #[must_use]
    pub fn with_convolution(conv: C) -> Self {
        Self::from_parts(FactorialTable::new(), conv, EngineConfig::default())
    }

    /// Creates a context from its parts.
    #[must_use]
    pub fn from_parts(table: FactorialTable<T>, conv: C, config: EngineConfig) -> Self {
        Self { table, conv, config }
    }

    /// Returns the factorial table, e.g. for calculus on the same field.
    pub fn table(&mut self) -> &mut FactorialTable<T> {
        &mut self.table
    }

    /// Returns the convolution.
    pub fn convolution(&self) -> &C {
        &self.conv
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Replaces the thresholds.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Decides whether `op` at `len` runs naively.
    fn use_naive(&self, op: &str, strategy: Strategy, len: usize) -> bool {
        let naive = match strategy {
            Strategy::Auto => len <= self.config.naive_threshold && fits_field::<T>(len),
            Strategy::Naive => true,
            Strategy::Newton => false,
        };
        log::debug!(
            "series: {op} of length {len} ({strategy:?}) runs {}",
            if naive { "naive" } else { "newton" }
        );
        naive
    }
}

/// Whether a recurrence over `len` coefficients only divides by `n < P`.
fn fits_field<T: PrimeField>(len: usize) -> bool {
    u64::try_from(len).is_ok_and(|l| l <= T::modulus())
}

/// Rejects lengths whose recurrences would divide by some `n >= P`.
fn check_len<T: PrimeField>(len: usize) -> Result<()> {
    if !fits_field::<T>(len) {
        return Err(SeriesError::LengthExceedsField { len, modulus: T::modulus() });
    }
    Ok(())
}

/// `a^e mod x^len` by square-and-multiply over the convolution.
fn binary_pow<T: PrimeField, C: Convolution<T>>(a: &[T], mut e: u64, len: usize, conv: &C) -> Vec<T> {
    let mut acc = vec![T::zero(); len];
    if len == 0 {
        return acc;
    }
    acc[0] = T::one();
    let mut base = a[..a.len().min(len)].to_vec();
    while e > 0 {
        if e & 1 == 1 {
            acc = conv.convolve(&acc, &base, len);
        }
        e >>= 1;
        if e > 0 {
            base = conv.convolve(&base, &base, len);
        }
    }
    acc
}

/// `x^shift g`.
fn shifted<T: PrimeField>(shift: usize, g: Vec<T>) -> Fps<T> {
    let mut coeffs = vec![T::zero(); shift];
    coeffs.extend(g);
    Fps::from(coeffs)
}

impl<T: PrimeField> Fps<T> {
    /// Index of the lowest nonzero coefficient below `len`.
    fn lowest_nonzero(&self, len: usize) -> Option<usize> {
        self.iter().take(len).position(|c| !c.is_zero())
    }

    /// Coefficients `from..from + len`, zero-padded.
    fn window(&self, from: usize, len: usize) -> Vec<T> {
        (from..from + len).map(|i| self.coeff(i)).collect()
    }

    /// Returns `g` with `f g ≡ 1 (mod x^len)`.
    ///
    /// `len` defaults to the current length.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NotInvertible`] if the constant term is zero.
    pub fn inverse<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
    ) -> Result<Self> {
        self.inverse_with(ctx, len, Strategy::Auto)
    }

    /// [`Fps::inverse`] with an explicit strategy.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NotInvertible`] if the constant term is zero.
    pub fn inverse_with<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
        strategy: Strategy,
    ) -> Result<Self> {
        let len = len.unwrap_or(self.len());
        let c_inv = self.coeff(0).inv().ok_or(SeriesError::NotInvertible)?;
        let g = if ctx.use_naive("inverse", strategy, len) {
            naive::inverse(self.as_slice(), c_inv, len)
        } else {
            newton::inverse(self.as_slice(), c_inv, len, &ctx.conv)
        };
        Ok(Self::from(g))
    }

    /// Returns `log f` truncated to `len` coefficients.
    ///
    /// The result has zero constant term and satisfies
    /// `(log f)' ≡ f' / f`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::ConstantTermNotOne`] unless the constant term is one;
    /// [`SeriesError::LengthExceedsField`] if `len > P`.
    pub fn log<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
    ) -> Result<Self> {
        self.log_with(ctx, len, Strategy::Auto)
    }

    /// [`Fps::log`] with an explicit strategy.
    ///
    /// # Errors
    ///
    /// As [`Fps::log`].
    pub fn log_with<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
        strategy: Strategy,
    ) -> Result<Self> {
        let len = len.unwrap_or(self.len());
        let c = self.coeff(0);
        if !c.is_one() {
            return Err(SeriesError::ConstantTermNotOne { constant: c.value() });
        }
        check_len::<T>(len)?;
        let g = if ctx.use_naive("log", strategy, len) {
            naive::log(self.as_slice(), len, &mut ctx.table)
        } else {
            newton::log(self.as_slice(), len, &mut ctx.table, &ctx.conv)
        };
        Ok(Self::from(g))
    }

    /// Returns `exp f` truncated to `len` coefficients.
    ///
    /// The result has constant term one and satisfies `g' ≡ f' g`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::ConstantTermNotZero`] unless the constant term is
    /// zero; [`SeriesError::LengthExceedsField`] if `len > P`.
    pub fn exp<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
    ) -> Result<Self> {
        self.exp_with(ctx, len, Strategy::Auto)
    }

    /// [`Fps::exp`] with an explicit strategy.
    ///
    /// # Errors
    ///
    /// As [`Fps::exp`].
    pub fn exp_with<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
        strategy: Strategy,
    ) -> Result<Self> {
        let len = len.unwrap_or(self.len());
        let c = self.coeff(0);
        if !c.is_zero() {
            return Err(SeriesError::ConstantTermNotZero { constant: c.value() });
        }
        check_len::<T>(len)?;
        let g = if ctx.use_naive("exp", strategy, len) {
            naive::exp(self.as_slice(), len, &mut ctx.table)
        } else {
            newton::exp(self.as_slice(), len, &mut ctx.table, &ctx.conv)
        };
        Ok(Self::from(g))
    }

    /// Returns `f^e` truncated to `len` coefficients.
    ///
    /// Agrees with `e`-fold multiplication. `f^0` is one, even for the
    /// zero series. When the lowest nonzero term is `c x^d`, the result is
    /// `c^e x^{de} (f / (c x^d))^e`, all zeros once `de >= len`.
    ///
    /// If the part after the `x^{de}` shift is longer than `P`, neither
    /// recurrence applies and the power is taken by square-and-multiply
    /// over the context's convolution, whatever the strategy.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` matches the other operations.
    pub fn pow<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        e: u64,
        len: Option<usize>,
    ) -> Result<Self> {
        self.pow_with(ctx, e, len, Strategy::Auto)
    }

    /// [`Fps::pow`] with an explicit strategy.
    ///
    /// # Errors
    ///
    /// As [`Fps::pow`].
    pub fn pow_with<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        e: u64,
        len: Option<usize>,
        strategy: Strategy,
    ) -> Result<Self> {
        let len = len.unwrap_or(self.len());
        if e == 0 {
            let mut g = Self::zeros(len);
            if len > 0 {
                g[0] = T::one();
            }
            return Ok(g);
        }
        let Some(d) = self.lowest_nonzero(len) else {
            return Ok(Self::zeros(len));
        };
        let shift = u128::from(d as u64) * u128::from(e);
        let Some(shift) = usize::try_from(shift).ok().filter(|&s| s < len) else {
            return Ok(Self::zeros(len));
        };

        let m = len - shift;
        let a = self.window(d, m);
        let g = if !fits_field::<T>(m) {
            log::debug!("series: pow of length {m} exceeds the field, squaring");
            binary_pow(&a, e, m, &ctx.conv)
        } else if ctx.use_naive("pow", strategy, m) {
            naive::miller(&a, a[0].pow(e), T::from_u64(e), m, &mut ctx.table)
        } else {
            newton::pow(&a, e, m, &mut ctx.table, &ctx.conv)
        };

        Ok(shifted(shift, g))
    }

    /// Returns some `g` with `g² ≡ f (mod x^len)`, or `None` if there is
    /// none.
    ///
    /// A root exists when the lowest nonzero term `c x^d` has even `d` and
    /// `c` a square in the field. The zero series has root zero.
    ///
    /// # Errors
    ///
    /// [`SeriesError::LengthExceedsField`] if [`Strategy::Naive`] is forced
    /// on more than `P` coefficients. [`Strategy::Auto`] picks Newton there.
    pub fn sqrt<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
    ) -> Result<Option<Self>> {
        self.sqrt_with(ctx, len, Strategy::Auto)
    }

    /// [`Fps::sqrt`] with an explicit strategy.
    ///
    /// # Errors
    ///
    /// As [`Fps::sqrt`].
    pub fn sqrt_with<C: Convolution<T>>(
        &self,
        ctx: &mut SeriesContext<T, C>,
        len: Option<usize>,
        strategy: Strategy,
    ) -> Result<Option<Self>> {
        let len = len.unwrap_or(self.len());
        if T::modulus() == 2 {
            return Ok(naive::frobenius_root(self.as_slice(), len).map(Self::from));
        }
        let Some(d) = self.lowest_nonzero(len) else {
            return Ok(Some(Self::zeros(len)));
        };
        if d % 2 == 1 {
            return Ok(None);
        }
        let Some(r) = self.coeff(d).sqrt() else {
            return Ok(None);
        };

        let shift = d / 2;
        let m = len - shift;
        let a = self.window(d, m);
        let g = if ctx.use_naive("sqrt", strategy, m) {
            check_len::<T>(m)?;
            let half = T::from_u64(T::modulus().div_ceil(2));
            naive::miller(&a, r, half, m, &mut ctx.table)
        } else {
            newton::sqrt(&a, r, m, &ctx.conv)
        };

        Ok(Some(shifted(shift, g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartus_integers::{Mod998244353, ModInt};
    use quartus_poly::Schoolbook;

    type F = Mod998244353;
    type Ctx = SeriesContext<F>;

    fn fps(v: &[i64]) -> Fps<F> {
        v.iter().copied().map(F::from_signed).collect()
    }

    const BOTH: [Strategy; 2] = [Strategy::Naive, Strategy::Newton];

    #[test]
    fn test_inverse_geometric() {
        let mut ctx = Ctx::new();
        let f = fps(&[1, -1]);
        for s in BOTH {
            assert_eq!(f.inverse_with(&mut ctx, Some(5), s).unwrap(), fps(&[1, 1, 1, 1, 1]));
        }
        // default length is the series' own
        assert_eq!(f.inverse(&mut ctx, None).unwrap(), fps(&[1, 1]));
    }

    #[test]
    fn test_inverse_requires_nonzero_constant() {
        let mut ctx = Ctx::new();
        assert_eq!(fps(&[0, 1]).inverse(&mut ctx, Some(3)), Err(SeriesError::NotInvertible));
        assert_eq!(fps(&[]).inverse(&mut ctx, Some(3)), Err(SeriesError::NotInvertible));
    }

    #[test]
    fn test_log_and_exp_preconditions() {
        let mut ctx = Ctx::new();
        assert_eq!(
            fps(&[2, 1]).log(&mut ctx, None),
            Err(SeriesError::ConstantTermNotOne { constant: 2 })
        );
        assert_eq!(
            fps(&[1, 1]).exp(&mut ctx, None),
            Err(SeriesError::ConstantTermNotZero { constant: 1 })
        );
        // log 1 = 0 and exp 0 = 1
        assert_eq!(fps(&[1]).log(&mut ctx, Some(4)).unwrap(), fps(&[0, 0, 0, 0]));
        assert_eq!(fps(&[]).exp(&mut ctx, Some(3)).unwrap(), fps(&[1, 0, 0]));
    }

    #[test]
    fn test_exp_log_known_series() {
        let mut ctx = Ctx::new();
        // exp(x) * n! = 1
        for s in BOTH {
            let e = fps(&[0, 1]).exp_with(&mut ctx, Some(10), s).unwrap();
            for n in 0..10i64 {
                assert_eq!(e[n as isize] * ctx.table().factorial(n), F::new(1));
            }
        }
        // log(1/(1-x)) = Σ x^n / n
        for s in BOTH {
            let l = fps(&[1, -1]).log_with(&mut ctx, Some(8), s).unwrap();
            assert_eq!(l[0], F::new(0));
            for n in 1..8i64 {
                assert_eq!(l[n as isize] * F::from_signed(n), F::new(1), "n = {n}");
            }
        }
    }

    #[test]
    fn test_length_beyond_small_field() {
        let mut ctx = SeriesContext::<ModInt<7>>::new();
        let f: Fps<ModInt<7>> = vec![ModInt::new(0), ModInt::new(1)].into();
        assert_eq!(
            f.exp(&mut ctx, Some(8)),
            Err(SeriesError::LengthExceedsField { len: 8, modulus: 7 })
        );
        assert!(f.exp(&mut ctx, Some(7)).is_ok());
    }

    #[test]
    fn test_pow_zero_and_shift() {
        let mut ctx = Ctx::new();
        let zero = fps(&[0, 0, 0]);
        assert_eq!(zero.pow(&mut ctx, 0, None).unwrap(), fps(&[1, 0, 0]));
        assert_eq!(zero.pow(&mut ctx, 3, None).unwrap(), fps(&[0, 0, 0]));
        assert_eq!(fps(&[]).pow(&mut ctx, 0, None).unwrap(), fps(&[]));

        // (x^2)^2 = x^4, beyond length 4
        let x2 = fps(&[0, 0, 1, 0]);
        assert_eq!(x2.pow(&mut ctx, 2, None).unwrap(), fps(&[0, 0, 0, 0]));
        assert_eq!(x2.pow(&mut ctx, 2, Some(6)).unwrap(), fps(&[0, 0, 0, 0, 1, 0]));
        assert_eq!(x2.pow(&mut ctx, u64::MAX, None).unwrap(), fps(&[0, 0, 0, 0]));
    }

    #[test]
    fn test_pow_with_leading_zeros() {
        let mut ctx = Ctx::new();
        // (2x + x^2)^3 = 8x^3 + 12x^4 + 6x^5 + x^6
        let f = fps(&[0, 2, 1]);
        for s in BOTH {
            assert_eq!(
                f.pow_with(&mut ctx, 3, Some(8), s).unwrap(),
                fps(&[0, 0, 0, 8, 12, 6, 1, 0]),
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_pow_exponent_beyond_modulus() {
        // Fermat: (1 + x)^7 = 1 + x^7 over F_7
        type G = ModInt<7>;
        let mut ctx = SeriesContext::<G>::new();
        let f: Fps<G> = vec![G::new(1), G::new(1)].into();
        let expected: Fps<G> = [1, 0, 0, 0, 0, 0, 0].into_iter().map(G::new).collect();
        for s in BOTH {
            assert_eq!(f.pow_with(&mut ctx, 7, Some(7), s).unwrap(), expected);
        }
    }

    #[test]
    fn test_pow_longer_than_field() {
        type G = ModInt<7>;
        let mut ctx = SeriesContext::<G>::new();
        let f: Fps<G> = vec![G::new(1), G::new(1)].into();
        let expected: Fps<G> = [1, 3, 3, 1, 0, 0, 0, 0, 0, 0].into_iter().map(G::new).collect();
        assert_eq!(f.pow(&mut ctx, 3, Some(10)).unwrap(), expected);

        let g: Fps<G> = [2, 5, 0, 3, 1, 6].into_iter().map(G::new).collect();
        for e in [1, 2, 5, 8, 13] {
            let mut repeated = Fps::zeros(12);
            repeated[0] = G::new(1);
            for _ in 0..e {
                repeated = repeated.mul_with(&g, &Schoolbook, 12);
            }
            for s in [Strategy::Auto, Strategy::Naive, Strategy::Newton] {
                assert_eq!(g.pow_with(&mut ctx, e, Some(12), s).unwrap(), repeated, "e = {e}, {s:?}");
            }
        }
    }

    #[test]
    fn test_sqrt_existence() {
        let mut ctx = Ctx::new();
        // 4 + 4x + x^2 = (2 + x)^2
        let f = fps(&[4, 4, 1]);
        for s in BOTH {
            let g = f.sqrt_with(&mut ctx, Some(5), s).unwrap().unwrap();
            assert_eq!(g.mul_with(&g, &Schoolbook, 5), f.prefix(5));
        }

        // x^2 (9 + x) has a root, x (1 + x) does not
        let shifted = fps(&[0, 0, 9, 1]);
        let g = shifted.sqrt(&mut ctx, None).unwrap().unwrap();
        assert_eq!(g[0], F::new(0));
        assert_eq!(g.mul_with(&g, &Schoolbook, 4), shifted);
        assert_eq!(fps(&[0, 1, 1]).sqrt(&mut ctx, None), Ok(None));

        // zero has root zero
        assert_eq!(fps(&[0, 0]).sqrt(&mut ctx, None), Ok(Some(fps(&[0, 0]))));
    }

    #[test]
    fn test_sqrt_non_residue() {
        // 3 is not a square mod 7
        type G = ModInt<7>;
        let mut ctx = SeriesContext::<G>::new();
        let f: Fps<G> = vec![G::new(3), G::new(1)].into();
        assert_eq!(f.sqrt(&mut ctx, None), Ok(None));
    }

    #[test]
    fn test_sqrt_characteristic_two() {
        type G = ModInt<2>;
        let mut ctx = SeriesContext::<G>::new();
        let f: Fps<G> = [1, 0, 1].into_iter().map(G::new).collect();
        let g = f.sqrt(&mut ctx, None).unwrap().unwrap();
        assert_eq!(g.mul_with(&g, &Schoolbook, 3), f);
    }

    #[test]
    fn test_auto_sqrt_longer_than_field() {
        type G = ModInt<7>;
        let mut ctx = SeriesContext::<G>::new();
        let f: Fps<G> = vec![G::new(1), G::new(1)].into();
        let newton = f.sqrt_with(&mut ctx, Some(10), Strategy::Newton).unwrap();
        assert_eq!(f.sqrt(&mut ctx, Some(10)).unwrap(), newton);

        let g = newton.unwrap();
        assert_eq!(g.mul_with(&g, &Schoolbook, 10), f.prefix(10));
        assert_eq!(
            f.sqrt_with(&mut ctx, Some(10), Strategy::Naive),
            Err(SeriesError::LengthExceedsField { len: 10, modulus: 7 })
        );
    }

    #[test]
    fn test_auto_switches_at_threshold() {
        let mut ctx = Ctx::new();
        ctx.set_config(EngineConfig { naive_threshold: 4 });
        assert_eq!(ctx.config().naive_threshold, 4);

        let f = fps(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let auto = f.inverse(&mut ctx, Some(20)).unwrap();
        let naive = f.inverse_with(&mut ctx, Some(20), Strategy::Naive).unwrap();
        assert_eq!(auto, naive);
    }
}
