//! Ring operations on power series.
//!
//! Sums and differences take the longer operand's length. An operand
//! passed by value lends its buffer to the result when it is at least as
//! long as the other side; borrowed operands are never modified.
//!
//! There is deliberately no `Mul<Fps>`: series products go through
//! [`Fps::mul_with`] and an explicit [`Convolution`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use quartus_poly::Convolution;
use quartus_rings::traits::{Field, Ring};

use crate::fps::Fps;

impl<T: Ring> Fps<T> {
    /// Negates every coefficient in place.
    fn negate(&mut self) {
        for c in self.iter_mut() {
            *c = -c.clone();
        }
    }

    /// Adds `c` to the constant term, growing an empty series to length 1.
    pub fn add_scalar(&mut self, c: T) {
        if self.is_empty() {
            self.push(T::zero());
        }
        self[0] = self[0].clone() + c;
    }

    /// Subtracts `c` from the constant term, growing an empty series to
    /// length 1.
    pub fn sub_scalar(&mut self, c: T) {
        if self.is_empty() {
            self.push(T::zero());
        }
        self[0] = self[0].clone() - c;
    }
}

impl<T> Fps<T> {
    /// Returns the first `len` coefficients of `self * rhs`.
    #[must_use]
    pub fn mul_with<C: Convolution<T>>(&self, rhs: &Self, conv: &C, len: usize) -> Self {
        Self::from(conv.convolve(self.as_slice(), rhs.as_slice(), len))
    }
}

impl<T: Ring> AddAssign<&Fps<T>> for Fps<T> {
    fn add_assign(&mut self, rhs: &Fps<T>) {
        if self.len() < rhs.len() {
            self.resize(rhs.len());
        }
        for (a, b) in self.iter_mut().zip(rhs) {
            *a = a.clone() + b.clone();
        }
    }
}

impl<T: Ring> AddAssign for Fps<T> {
    fn add_assign(&mut self, mut rhs: Fps<T>) {
        if self.len() < rhs.len() {
            std::mem::swap(self, &mut rhs);
        }
        *self += &rhs;
    }
}

impl<T: Ring> SubAssign<&Fps<T>> for Fps<T> {
    fn sub_assign(&mut self, rhs: &Fps<T>) {
        if self.len() < rhs.len() {
            self.resize(rhs.len());
        }
        for (a, b) in self.iter_mut().zip(rhs) {
            *a = a.clone() - b.clone();
        }
    }
}

impl<T: Ring> SubAssign for Fps<T> {
    fn sub_assign(&mut self, mut rhs: Fps<T>) {
        if self.len() < rhs.len() {
            // a - b = -(b) + a, reusing b's buffer
            std::mem::swap(self, &mut rhs);
            self.negate();
            *self += &rhs;
        } else {
            *self -= &rhs;
        }
    }
}

impl<T: Ring> Add for Fps<T> {
    type Output = Fps<T>;

    fn add(mut self, rhs: Fps<T>) -> Fps<T> {
        self += rhs;
        self
    }
}

impl<T: Ring> Add<&Fps<T>> for Fps<T> {
    type Output = Fps<T>;

    fn add(mut self, rhs: &Fps<T>) -> Fps<T> {
        self += rhs;
        self
    }
}

impl<T: Ring> Add<Fps<T>> for &Fps<T> {
    type Output = Fps<T>;

    fn add(self, rhs: Fps<T>) -> Fps<T> {
        rhs + self
    }
}

impl<T: Ring> Add for &Fps<T> {
    type Output = Fps<T>;

    fn add(self, rhs: &Fps<T>) -> Fps<T> {
        if self.len() >= rhs.len() {
            self.clone() + rhs
        } else {
            rhs.clone() + self
        }
    }
}

impl<T: Ring> Sub for Fps<T> {
    type Output = Fps<T>;

    fn sub(mut self, rhs: Fps<T>) -> Fps<T> {
        self -= rhs;
        self
    }
}

impl<T: Ring> Sub<&Fps<T>> for Fps<T> {
    type Output = Fps<T>;

    fn sub(mut self, rhs: &Fps<T>) -> Fps<T> {
        self -= rhs;
        self
    }
}

impl<T: Ring> Sub<Fps<T>> for &Fps<T> {
    type Output = Fps<T>;

    fn sub(self, rhs: Fps<T>) -> Fps<T> {
        -rhs + self
    }
}

impl<T: Ring> Sub for &Fps<T> {
    type Output = Fps<T>;

    fn sub(self, rhs: &Fps<T>) -> Fps<T> {
        self.clone() - rhs
    }
}

impl<T: Ring> Neg for Fps<T> {
    type Output = Fps<T>;

    fn neg(mut self) -> Fps<T> {
        self.negate();
        self
    }
}

impl<T: Ring> Neg for &Fps<T> {
    type Output = Fps<T>;

    fn neg(self) -> Fps<T> {
        -self.clone()
    }
}

impl<T: Ring> MulAssign<T> for Fps<T> {
    fn mul_assign(&mut self, rhs: T) {
        if rhs.is_one() {
            return;
        }
        if (-rhs.clone()).is_one() {
            self.negate();
            return;
        }
        for c in self.iter_mut() {
            *c = c.clone() * rhs.clone();
        }
    }
}

impl<T: Ring> Mul<T> for Fps<T> {
    type Output = Fps<T>;

    fn mul(mut self, rhs: T) -> Fps<T> {
        self *= rhs;
        self
    }
}

impl<T: Ring> Mul<T> for &Fps<T> {
    type Output = Fps<T>;

    fn mul(self, rhs: T) -> Fps<T> {
        self.clone() * rhs
    }
}

impl<T: Field> DivAssign<T> for Fps<T> {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: T) {
        let inv = rhs.inv().expect("division of a power series by zero");
        *self *= inv;
    }
}

impl<T: Field> Div<T> for Fps<T> {
    type Output = Fps<T>;

    fn div(mut self, rhs: T) -> Fps<T> {
        self /= rhs;
        self
    }
}

impl<T: Field> Div<T> for &Fps<T> {
    type Output = Fps<T>;

    fn div(self, rhs: T) -> Fps<T> {
        self.clone() / rhs
    }
}
