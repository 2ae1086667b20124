//! # quartus-series
//!
//! Truncated formal power series over a prime field.
//!
//! This crate provides:
//! - [`Fps`]: a coefficient vector read modulo `x^len`, with negative
//!   "from the end" addressing, slicing and opt-in normalization
//! - Ring operations, with moved-in operands donating their storage
//! - Calculus and EGF/OGF transforms backed by a factorial table
//! - Inverse, logarithm, exponential, power and square root through a
//!   [`SeriesContext`]
//!
//! ## Multiplication
//!
//! Series never multiply on their own. Products go through
//! [`Fps::mul_with`] with a caller-supplied [`Convolution`], and the
//! transcendental operations use the convolution held by their context.
//!
//! ## Strategies
//!
//! Each transcendental operation runs either an O(n²) coefficient
//! recurrence ([`Strategy::Naive`]) or a Newton doubling iteration over
//! the convolution ([`Strategy::Newton`]). [`Strategy::Auto`] picks by
//! truncation length and field size.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod engine;
pub mod error;
pub mod fps;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use engine::{EngineConfig, SeriesContext, Strategy};
pub use error::{Result, SeriesError};
pub use fps::Fps;
pub use quartus_poly::Convolution;
