//! Error types for factorial tables.

use thiserror::Error;

/// Errors raised while growing a factorial table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BinomError {
    /// The requested index is at least the modulus, where `n!` is zero
    /// and no inverse exists.
    #[error("factorial table index {index} is out of range for modulus {modulus}")]
    BeyondModulus {
        /// The requested index.
        index: u64,
        /// The field modulus.
        modulus: u64,
    },

    /// A factorial below the modulus turned out to be zero.
    #[error("{index}! is not invertible modulo {modulus}; the modulus is not prime")]
    NotInvertible {
        /// The index whose factorial vanished.
        index: u64,
        /// The field modulus.
        modulus: u64,
    },
}

/// Result alias for factorial table operations.
pub type Result<T> = std::result::Result<T, BinomError>;
