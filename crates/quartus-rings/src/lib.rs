//! # quartus-rings
//!
//! Algebraic capability traits for the quartus toolkit.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `PrimeField`
//! - Their implementation for `ModInt<P>`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//!       └── PrimeField
//! ```
//!
//! Factorial tables and power series are written against `PrimeField`
//! only; they never reduce modulo `P` themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::GF998244353;
pub use traits::{Field, PrimeField, Ring};
