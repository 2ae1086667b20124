//! Karatsuba multiplication algorithm.
//!
//! This module provides the Karatsuba divide-and-conquer multiplication
//! algorithm, which achieves O(n^1.58) complexity.

use quartus_rings::traits::Ring;

/// Karatsuba multiplication threshold.
///
/// Below this length, schoolbook multiplication is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Performs Karatsuba multiplication on coefficient slices.
///
/// Returns the full product, `a.len() + b.len() - 1` coefficients, or an
/// empty vector when either operand is empty.
#[must_use]
pub fn karatsuba_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    karatsuba_mul_with_threshold(a, b, KARATSUBA_THRESHOLD)
}

/// [`karatsuba_mul`] falling back to schoolbook once an operand is shorter
/// than `threshold` (at least 2).
#[must_use]
pub fn karatsuba_mul_with_threshold<R: Ring>(a: &[R], b: &[R], threshold: usize) -> Vec<R> {
    let threshold = threshold.max(2);
    let n = a.len();
    let m = b.len();

    if n < threshold || m < threshold {
        return schoolbook_mul(a, b);
    }

    // Make both the same size (power of 2)
    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, R::zero());
    b_ext.resize(size, R::zero());

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul_with_threshold(a0, b0, threshold);
    let z2 = karatsuba_mul_with_threshold(a1, b1, threshold);

    let a01: Vec<R> = a0.iter().zip(a1).map(|(x, y)| x.clone() + y.clone()).collect();
    let b01: Vec<R> = b0.iter().zip(b1).map(|(x, y)| x.clone() + y.clone()).collect();

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul_with_threshold(&a01, &b01, threshold);
    for (i, c) in z0.iter().enumerate() {
        z1[i] = z1[i].clone() - c.clone();
    }
    for (i, c) in z2.iter().enumerate() {
        z1[i] = z1[i].clone() - c.clone();
    }

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result = vec![R::zero(); 2 * size - 1];

    for (i, c) in z0.into_iter().enumerate() {
        result[i] = c;
    }
    for (i, c) in z1.into_iter().enumerate() {
        result[i + half] = result[i + half].clone() + c;
    }
    for (i, c) in z2.into_iter().enumerate() {
        result[i + 2 * half] = result[i + 2 * half].clone() + c;
    }

    result.truncate(n + m - 1);
    result
}

/// Schoolbook multiplication: O(n²).
#[must_use]
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    schoolbook_mul_truncated(a, b, a.len() + b.len() - 1)
}

/// Schoolbook multiplication keeping only the first `len` coefficients.
///
/// Products landing at or beyond `len` are never formed.
#[must_use]
pub fn schoolbook_mul_truncated<R: Ring>(a: &[R], b: &[R], len: usize) -> Vec<R> {
    let mut result = vec![R::zero(); len];

    for (i, x) in a.iter().enumerate().take(len) {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate().take(len - i) {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }

    result
}
