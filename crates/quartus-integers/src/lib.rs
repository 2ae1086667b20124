//! # quartus-integers
//!
//! Modular integers for the quartus finite-field toolkit.
//!
//! This crate provides [`ModInt`], an integer modulo a compile-time
//! modulus `P`. Every other quartus crate is generic over the field
//! capability traits in `quartus-rings`; `ModInt` is the element type
//! they are usually instantiated with.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod modular;

#[cfg(test)]
mod proptests;

pub use modular::{primes, Mod998244353, ModInt};
