//! # quartus-poly
//!
//! Polynomial multiplication over prime fields for the quartus toolkit.
//!
//! This crate provides the convolution capability consumed by power
//! series: given two coefficient slices and a truncation length, produce
//! the truncated product.
//!
//! ## Algorithm Selection
//!
//! [`AutoConvolution`] picks per call:
//! - Short operands: Schoolbook O(n²)
//! - Medium operands, or fields without enough 2-adic roots: Karatsuba O(n^1.58)
//! - Long operands on NTT-friendly primes: NTT O(n log n)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod convolution;

#[cfg(test)]
mod proptests;

pub use algorithms::ntt::Ntt;
pub use convolution::{AutoConvolution, Convolution, ConvolutionConfig, Karatsuba, Schoolbook};
