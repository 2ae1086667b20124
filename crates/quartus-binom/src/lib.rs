//! # quartus-binom
//!
//! Factorial tables and binomial coefficients over a prime field.
//!
//! This crate provides:
//! - [`FactorialTable`]: lazily grown `n!`, `1/n!` and `1/n` tables
//! - Binomial coefficients continued to negative arguments
//! - Permutations, multiset coefficients and multinomials
//! - [`SharedFactorialTable`]: a lock-guarded table for sharing one
//!   instance per field across threads
//!
//! ## Growth
//!
//! Tables grow geometrically and spend exactly one field inversion per
//! growth step; every other inverse is derived by multiplication.
//! Growth stops at the modulus, since `P!` vanishes in the field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binomial;
pub mod error;
pub mod shared;
pub mod table;

#[cfg(test)]
mod proptests;

pub use error::{BinomError, Result};
pub use shared::SharedFactorialTable;
pub use table::FactorialTable;
