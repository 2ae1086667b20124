//! Polynomial multiplication algorithms.
//!
//! This module contains:
//! - Schoolbook and Karatsuba multiplication over any ring
//! - Number Theoretic Transform multiplication over prime fields

pub mod karatsuba;
pub mod ntt;
