//! Domain errors for undefined operations.
//!
//! Only mathematically undefined requests fail. Empty sequences and
//! negative geometric dimensions are answered with defined values instead.

/// Input lies outside the domain of the requested operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The divisor was zero (either sign).
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Square root of a negative number.
    #[error("cannot calculate square root of negative number {0}")]
    NegativeSquareRoot(f64),

    /// Logarithm argument was zero or negative.
    #[error("cannot calculate logarithm of zero or negative number {0}")]
    NonPositiveLogarithm(f64),

    /// Logarithm base was zero, negative, or one.
    #[error("invalid logarithm base {0}")]
    InvalidLogBase(f64),

    /// No integer lies in `[ceil(min), floor(max)]`, or a bound is not finite.
    #[error("no integer in range [{min}, {max}]")]
    EmptyRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

/// Result alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, DomainError>;
