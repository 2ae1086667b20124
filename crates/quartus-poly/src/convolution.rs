//! The convolution capability.
//!
//! Power series never multiply two series on their own; every product goes
//! through a [`Convolution`] chosen by the caller.

use quartus_rings::traits::{PrimeField, Ring};

use crate::algorithms::karatsuba::{karatsuba_mul, karatsuba_mul_with_threshold, schoolbook_mul_truncated};
use crate::algorithms::ntt::Ntt;

/// Truncated polynomial multiplication.
pub trait Convolution<T> {
    /// Returns the first `len` coefficients of `a * b`.
    ///
    /// The result always has exactly `len` entries; positions past the end
    /// of the full product are zero.
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T>;
}

impl<T, C: Convolution<T> + ?Sized> Convolution<T> for &C {
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T> {
        (**self).convolve(a, b, len)
    }
}

/// Quadratic multiplication that skips products past the truncation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Schoolbook;

impl<T: Ring> Convolution<T> for Schoolbook {
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T> {
        schoolbook_mul_truncated(a, b, len)
    }
}

/// Karatsuba multiplication over any ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct Karatsuba;

impl<T: Ring> Convolution<T> for Karatsuba {
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T> {
        let a = &a[..a.len().min(len)];
        let b = &b[..b.len().min(len)];
        let mut product = karatsuba_mul(a, b);
        product.resize(len, T::zero());
        product
    }
}

impl<T: PrimeField> Convolution<T> for Ntt<T> {
    /// # Panics
    ///
    /// Panics if the product does not fit one transform; check
    /// [`Ntt::supports`] first or use [`AutoConvolution`].
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T> {
        let a = &a[..a.len().min(len)];
        let b = &b[..b.len().min(len)];
        let mut product = self.multiply(a, b);
        product.resize(len, T::zero());
        product
    }
}

/// Length thresholds for [`AutoConvolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvolutionConfig {
    /// Operands shorter than this use schoolbook multiplication. Also the
    /// base case of the Karatsuba recursion.
    pub schoolbook_threshold: usize,
    /// Operands at least this long use NTT when the field supports the
    /// product length; shorter ones use Karatsuba.
    pub karatsuba_threshold: usize,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            schoolbook_threshold: 32,
            karatsuba_threshold: 128,
        }
    }
}

/// Picks schoolbook, Karatsuba or NTT per call.
#[derive(Clone, Copy, Debug)]
pub struct AutoConvolution<T> {
    ntt: Ntt<T>,
    config: ConvolutionConfig,
}

impl<T: PrimeField> AutoConvolution<T> {
    /// Creates a convolution with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ConvolutionConfig::default())
    }

    /// Creates a convolution with explicit thresholds.
    #[must_use]
    pub fn with_config(config: ConvolutionConfig) -> Self {
        Self {
            ntt: Ntt::new(),
            config,
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> ConvolutionConfig {
        self.config
    }
}

impl<T: PrimeField> Default for AutoConvolution<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeField> Convolution<T> for AutoConvolution<T> {
    fn convolve(&self, a: &[T], b: &[T], len: usize) -> Vec<T> {
        let a = &a[..a.len().min(len)];
        let b = &b[..b.len().min(len)];
        let shorter = a.len().min(b.len());

        if shorter == 0 || shorter < self.config.schoolbook_threshold {
            return Schoolbook.convolve(a, b, len);
        }
        let product_len = a.len() + b.len() - 1;
        if shorter >= self.config.karatsuba_threshold && self.ntt.supports(product_len) {
            self.ntt.convolve(a, b, len)
        } else {
            let mut product = karatsuba_mul_with_threshold(a, b, self.config.schoolbook_threshold);
            product.resize(len, T::zero());
            product
        }
    }
}
