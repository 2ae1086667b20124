//! Number Theoretic Transform (NTT) for exact polynomial multiplication.
//!
//! NTT is the finite field analog of FFT, enabling exact O(n log n)
//! polynomial multiplication without floating-point errors. It needs a
//! primitive n-th root of unity, so a prime P supports transforms up to
//! the largest power of two dividing P - 1.

use quartus_rings::traits::PrimeField;

/// Transform tables for one prime field.
///
/// Holds a primitive `2^two_adicity`-th root of unity; roots of every
/// smaller power-of-two order are powers of it.
#[derive(Clone, Copy, Debug)]
pub struct Ntt<T> {
    two_adicity: u32,
    root: T,
}

impl<T: PrimeField> Ntt<T> {
    /// Prepares transforms for the field `T`.
    ///
    /// Writing `P - 1 = q * 2^s` with `q` odd, `z^q` is a primitive
    /// `2^s`-th root of unity for any quadratic non-residue `z`.
    #[must_use]
    pub fn new() -> Self {
        let p = T::modulus();
        let mut q = p - 1;
        let mut s = 0u32;
        while q != 0 && q % 2 == 0 {
            q /= 2;
            s += 1;
        }

        let root = if s == 0 {
            T::one()
        } else {
            let mut z = T::from_u64(2);
            while z.is_zero() || z.is_quadratic_residue() {
                z = z + T::one();
            }
            z.pow(q)
        };

        // lengths are usize, so drop roots of order beyond usize::MAX
        let two_adicity = s.min(usize::BITS - 1);
        let root = root.pow(1u64 << (s - two_adicity));

        log::trace!("ntt: modulus {p} has 2-adicity {s}, root {}", root.value());
        Self { two_adicity, root }
    }

    /// Returns the longest supported transform length.
    #[must_use]
    pub fn max_len(&self) -> usize {
        1 << self.two_adicity
    }

    /// Returns true if a product of `len` coefficients fits one transform.
    #[must_use]
    pub fn supports(&self, len: usize) -> bool {
        len.next_power_of_two() <= self.max_len()
    }

    /// Returns a primitive n-th root of unity, `n` a supported power of two.
    fn root_of_order(&self, n: usize) -> T {
        debug_assert!(n.is_power_of_two() && n <= self.max_len());
        let shift = self.two_adicity - n.trailing_zeros();
        self.root.pow(1u64 << shift)
    }

    /// Computes the NTT of a polynomial in-place.
    ///
    /// The input length must be a supported power of 2. After the transform,
    /// `a[i]` holds the evaluation at ω^i where ω is a primitive n-th root.
    pub fn forward(&self, a: &mut [T]) {
        let n = a.len();
        if n <= 1 {
            return;
        }
        transform(a, self.root_of_order(n));
    }

    /// Computes the inverse NTT in-place.
    ///
    /// # Panics
    ///
    /// Panics if the length is zero in the field, which cannot happen for a
    /// supported length.
    pub fn inverse(&self, a: &mut [T]) {
        let n = a.len();
        if n <= 1 {
            return;
        }
        let w = self.root_of_order(n);
        transform(a, w.inv().expect("root of unity is nonzero"));

        let n_inv = T::from_u64(n as u64)
            .inv()
            .expect("supported transform length is invertible");
        for x in a.iter_mut() {
            *x = *x * n_inv;
        }
    }

    /// Multiplies two polynomials using NTT.
    ///
    /// Returns the full product, `a.len() + b.len() - 1` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if the product length exceeds [`Ntt::max_len`].
    #[must_use]
    pub fn multiply(&self, a: &[T], b: &[T]) -> Vec<T> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }

        let result_len = a.len() + b.len() - 1;
        assert!(
            self.supports(result_len),
            "product length {result_len} exceeds NTT capacity {} for modulus {}",
            self.max_len(),
            T::modulus()
        );
        let n = result_len.next_power_of_two();

        let mut a_padded = Vec::with_capacity(n);
        a_padded.extend_from_slice(a);
        a_padded.resize(n, T::zero());

        let mut b_padded = Vec::with_capacity(n);
        b_padded.extend_from_slice(b);
        b_padded.resize(n, T::zero());

        self.forward(&mut a_padded);
        self.forward(&mut b_padded);

        for (x, y) in a_padded.iter_mut().zip(&b_padded) {
            *x = *x * *y;
        }

        self.inverse(&mut a_padded);

        a_padded.truncate(result_len);
        a_padded
    }
}

impl<T: PrimeField> Default for Ntt<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterative Cooley-Tukey butterfly with `w` a primitive `a.len()`-th root.
fn transform<T: PrimeField>(a: &mut [T], w: T) {
    let n = a.len();
    bit_reverse(a);

    let mut len = 2;
    while len <= n {
        // ω_len = w^(n / len)
        let w_len = w.pow((n / len) as u64);

        for chunk in a.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut tw = T::one();
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let x = *u;
                let y = *v * tw;
                *u = x + y;
                *v = x - y;
                tw = tw * w_len;
            }
        }
        len *= 2;
    }
}

/// Performs bit-reversal permutation in-place.
fn bit_reverse<T>(a: &mut [T]) {
    let n = a.len();
    let log_n = n.trailing_zeros();

    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            a.swap(i, j);
        }
    }
}

/// Reverses the lower `bits` bits of `x`.
#[inline]
fn reverse_bits(x: usize, bits: u32) -> usize {
    if bits == 0 {
        return x;
    }
    x.reverse_bits() >> (usize::BITS - bits)
}
