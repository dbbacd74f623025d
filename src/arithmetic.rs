//! Arithmetic primitives, powers, and roots.
//!
//! Plain IEEE-754 operations. Only [`divide`] and [`square_root`] validate
//! their input; everything else follows native floating-point behaviour,
//! including NaN and infinity propagation.

use crate::error::{DomainError, Result};

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// [`DomainError::DivisionByZero`] if `b` is `0.0` or `-0.0`.
///
/// # Examples
/// ```
/// use math_toolkit::arithmetic::divide;
/// assert_eq!(divide(6.0, 3.0), Ok(2.0));
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        log::debug!("rejected division of {a} by zero");
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to `exponent`.
///
/// Negative and fractional exponents follow IEEE semantics, so a negative
/// base with a fractional exponent yields NaN rather than an error.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Principal (non-negative) square root.
///
/// NaN is passed through as NaN since it is not less than zero.
///
/// # Errors
/// [`DomainError::NegativeSquareRoot`] if `x < 0`.
///
/// # Examples
/// ```
/// use math_toolkit::arithmetic::square_root;
/// assert_eq!(square_root(9.0), Ok(3.0));
/// assert!(square_root(-1.0).is_err());
/// ```
pub fn square_root(x: f64) -> Result<f64> {
    if x < 0.0 {
        log::debug!("rejected square root of {x}");
        return Err(DomainError::NegativeSquareRoot(x));
    }
    Ok(x.sqrt())
}

/// Returns `|x|`.
pub fn absolute(x: f64) -> f64 {
    x.abs()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(-2.0, 3.5), -7.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
        assert_eq!(divide(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(1.0, 0.0), Err(DomainError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(DomainError::DivisionByZero));
        assert_eq!(divide(-3.0, -0.0), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn test_divide_nan_divisor() {
        assert!(divide(1.0, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(4.0, 0.5), 2.0);
        assert_eq!(power(2.0, -1.0), 0.5);
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(0.0), Ok(0.0));
        assert_eq!(
            square_root(-4.0),
            Err(DomainError::NegativeSquareRoot(-4.0))
        );
        assert!(square_root(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(-3.5), 3.5);
        assert_eq!(absolute(3.5), 3.5);
        assert_eq!(absolute(f64::NEG_INFINITY), f64::INFINITY);
    }
}
