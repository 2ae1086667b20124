//! Algebraic structure traits.
//!
//! This module defines the capability set that factorial tables and power
//! series are generic over.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n using binary exponentiation.
    #[must_use]
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}

/// The prime field Z/PZ.
///
/// Beyond the field operations this exposes the modulus, which is what
/// bounds factorial tables: `n!` vanishes for every `n >= P`.
pub trait PrimeField: Field + Copy {
    /// Returns the characteristic P.
    fn modulus() -> u64;

    /// Reduces an unsigned integer into the field.
    fn from_u64(value: u64) -> Self;

    /// Reduces a signed integer into the field.
    fn from_i64(value: i64) -> Self;

    /// Returns the canonical representative in `[0, P)`.
    fn value(self) -> u64;

    /// Returns true if the element is a nonzero square.
    fn is_quadratic_residue(&self) -> bool {
        let p = Self::modulus();
        !self.is_zero() && (p == 2 || self.pow((p - 1) / 2).is_one())
    }

    /// Computes a square root using Tonelli-Shanks.
    ///
    /// Returns `None` when the element is a quadratic non-residue. Either of
    /// the two roots may be returned.
    fn sqrt(&self) -> Option<Self> {
        let p = Self::modulus();
        if self.is_zero() || p == 2 {
            return Some(*self);
        }
        if !self.is_quadratic_residue() {
            return None;
        }

        // p - 1 = q * 2^s with q odd
        let mut q = p - 1;
        let mut s = 0u32;
        while q % 2 == 0 {
            q /= 2;
            s += 1;
        }

        let mut z = Self::from_u64(2);
        while z.is_quadratic_residue() {
            z = z + Self::one();
        }

        let mut m = s;
        let mut c = z.pow(q);
        let mut t = self.pow(q);
        let mut r = self.pow(q.div_ceil(2));

        while !t.is_one() {
            let mut i = 0u32;
            let mut t2 = t;
            while !t2.is_one() {
                t2 = t2 * t2;
                i += 1;
            }

            let mut b = c;
            for _ in 0..m - i - 1 {
                b = b * b;
            }

            m = i;
            c = b * b;
            t = t * c;
            r = r * b;
        }

        Some(r)
    }
}
