//! The prime field Z_p backed by `ModInt<P>`.

use crate::traits::{Field, PrimeField, Ring};
use quartus_integers::ModInt;

impl<const P: u64> Ring for ModInt<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn is_one(&self) -> bool {
        *self == Self::new(1)
    }

    fn pow(&self, n: u64) -> Self {
        ModInt::pow(*self, n)
    }
}

impl<const P: u64> Field for ModInt<P> {
    fn inv(&self) -> Option<Self> {
        ModInt::inv(*self)
    }
}

impl<const P: u64> PrimeField for ModInt<P> {
    fn modulus() -> u64 {
        P
    }

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }

    fn from_i64(value: i64) -> Self {
        Self::from_signed(value)
    }

    fn value(self) -> u64 {
        ModInt::value(self)
    }
}

/// Type alias for the common NTT prime field.
pub type GF998244353 = quartus_integers::Mod998244353;
