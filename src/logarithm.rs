//! Natural and arbitrary-base logarithms with domain checks.

use crate::error::{DomainError, Result};

/// Natural logarithm of `x`.
///
/// # Errors
/// [`DomainError::NonPositiveLogarithm`] if `x <= 0`.
///
/// # Examples
/// ```
/// use math_toolkit::logarithm::log;
/// assert_eq!(log(1.0), Ok(0.0));
/// assert!(log(0.0).is_err());
/// ```
pub fn log(x: f64) -> Result<f64> {
    check_argument(x)?;
    Ok(x.ln())
}

/// Logarithm of `x` in the given `base`, computed as `ln(x) / ln(base)`.
///
/// The argument is validated before the base.
///
/// # Errors
/// - [`DomainError::NonPositiveLogarithm`] if `x <= 0`.
/// - [`DomainError::InvalidLogBase`] if `base <= 0` or `base == 1`.
///
/// # Examples
/// ```
/// use math_toolkit::logarithm::log_base;
/// assert!((log_base(8.0, 2.0).unwrap() - 3.0).abs() < 1e-12);
/// ```
pub fn log_base(x: f64, base: f64) -> Result<f64> {
    check_argument(x)?;
    if base <= 0.0 || base == 1.0 {
        log::debug!("rejected logarithm base {base}");
        return Err(DomainError::InvalidLogBase(base));
    }
    Ok(x.ln() / base.ln())
}

fn check_argument(x: f64) -> Result<()> {
    if x <= 0.0 {
        log::debug!("rejected logarithm of {x}");
        return Err(DomainError::NonPositiveLogarithm(x));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn unit_and_zero_base_always_fail(x in 1e-300_f64..1e300) {
            prop_assert_eq!(log_base(x, 1.0), Err(DomainError::InvalidLogBase(1.0)));
            prop_assert_eq!(log_base(x, 0.0), Err(DomainError::InvalidLogBase(0.0)));
        }

        #[test]
        fn log_base_inverts_power(base in 1.1_f64..10.0, exponent in -20.0_f64..20.0) {
            let x = base.powf(exponent);
            let back = log_base(x, base).unwrap();
            prop_assert!((back - exponent).abs() < 1e-9, "log_{}({}) = {}", base, x, back);
        }
    }
}
