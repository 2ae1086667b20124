//! Modular arithmetic.
//!
//! Integers modulo a compile-time prime, the scalar type underneath the
//! factorial tables and power series of the other quartus crates.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A modular integer with a compile-time modulus.
///
/// The stored value is always reduced into `[0, P)`. `P` must be below
/// `2^63` so that a sum of two reduced values fits in a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    /// Creates a new modular integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a modular integer from a signed value.
    #[must_use]
    pub const fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value >= 0 || r == 0 {
            Self(r)
        } else {
            Self(P - r)
        }
    }

    /// Returns the value as a u64.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(self, P) != 1).
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        let t = t.rem_euclid(i128::from(P));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self(t as u64))
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self(1 % P)
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.0 + rhs.0;
        Self(if sum >= P { sum - P } else { sum })
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + P - rhs.0)
        }
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // u128 keeps the product exact before reduction
        #[allow(clippy::cast_possible_truncation)]
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inv().expect("division by non-invertible element")
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> AddAssign for ModInt<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for ModInt<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> MulAssign for ModInt<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// Common NTT-friendly primes.
pub mod primes {
    /// 2^23 * 7 * 17 + 1 = 998244353 (common competitive programming prime)
    pub const P998244353: u64 = 998_244_353;

    /// 2^24 * 73 + 1 = 1224736769
    pub const P1224736769: u64 = 1_224_736_769;

    /// 2^26 * 7 + 1 = 469762049
    pub const P469762049: u64 = 469_762_049;

    /// 10^9 + 7, prime but only 2^1 divides P - 1.
    pub const P1000000007: u64 = 1_000_000_007;
}

/// Type alias for the common NTT prime.
pub type Mod998244353 = ModInt<{ primes::P998244353 }>;
