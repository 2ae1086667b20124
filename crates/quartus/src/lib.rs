//! # Quartus
//!
//! Finite-field combinatorics and truncated power series.
//!
//! ## Features
//!
//! - **Modular integers**: `ModInt<P>` with a compile-time prime
//! - **Factorial tables**: `n!`, `1/n!` and `1/n` with one field
//!   inversion per growth step
//! - **Generalized binomials**: `C(n, k)` for all integer `n` and `k`
//! - **Power series**: slicing, calculus, EGF/OGF transforms, and
//!   inverse/log/exp/pow/sqrt over a pluggable convolution
//!
//! ## Quick Start
//!
//! ```rust
//! use quartus::prelude::*;
//!
//! let mut table = FactorialTable::<Mod998244353>::new();
//! assert_eq!(table.binomial(5, 2).value(), 10);
//! assert_eq!(table.binomial(-1, 5).value(), 998_244_352);
//!
//! // 1 / (1 + x) = 1 - x + x^2 - x^3 + ...
//! let mut ctx = SeriesContext::<Mod998244353>::new();
//! let f: Fps<Mod998244353> = vec![Mod998244353::new(1), Mod998244353::new(1)].into();
//! let g = f.inverse(&mut ctx, Some(4)).unwrap();
//! let coeffs: Vec<u64> = g.iter().map(|c| c.value()).collect();
//! assert_eq!(coeffs, [1, 998_244_352, 1, 998_244_352]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quartus_binom as binom;
pub use quartus_integers as integers;
pub use quartus_poly as poly;
pub use quartus_rings as rings;
pub use quartus_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quartus_binom::{BinomError, FactorialTable, SharedFactorialTable};
    pub use quartus_integers::{Mod998244353, ModInt};
    pub use quartus_poly::{AutoConvolution, Convolution, ConvolutionConfig};
    pub use quartus_rings::{Field, PrimeField, Ring};
    pub use quartus_series::{EngineConfig, Fps, SeriesContext, SeriesError, Strategy};
}
