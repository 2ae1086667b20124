//! Error types for power series operations.

use thiserror::Error;

/// Contract violations of the transcendental operations.
///
/// A square root that does not exist is not an error; see
/// [`Fps::sqrt`](crate::Fps::sqrt).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The constant term is zero, so the series has no inverse.
    #[error("series with zero constant term is not invertible")]
    NotInvertible,

    /// The logarithm needs a constant term of one.
    #[error("logarithm needs constant term 1, found {constant}")]
    ConstantTermNotOne {
        /// The offending constant term.
        constant: u64,
    },

    /// The exponential needs a constant term of zero.
    #[error("exponential needs constant term 0, found {constant}")]
    ConstantTermNotZero {
        /// The offending constant term.
        constant: u64,
    },

    /// The requested length needs `1 / n` for some `n >= P`.
    #[error("truncation length {len} exceeds what modulus {modulus} can divide by")]
    LengthExceedsField {
        /// The requested truncation length.
        len: usize,
        /// The field modulus.
        modulus: u64,
    },
}

/// Result alias for power series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
