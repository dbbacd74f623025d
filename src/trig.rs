//! Angle conversion and trigonometric functions.
//!
//! The circular functions [`sin`], [`cos`] and [`tan`] take **degrees**.
//! The hyperbolic functions [`sinh`], [`cosh`] and [`tanh`] take their
//! argument as-is, with no degree conversion.

use std::f64::consts::PI;

/// Converts degrees to radians, `d × π/180`.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees, `r × 180/π`.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Sine of an angle given in degrees.
///
/// # Examples
/// ```
/// use math_toolkit::trig::sin;
/// assert!((sin(90.0) - 1.0).abs() < 1e-15);
/// ```
pub fn sin(degrees: f64) -> f64 {
    degrees_to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees.
pub fn cos(degrees: f64) -> f64 {
    degrees_to_radians(degrees).cos()
}

/// Tangent of an angle given in degrees.
///
/// Odd multiples of 90° do not hit an exact pole in floating point, so the
/// result there is a very large finite number rather than infinity.
pub fn tan(degrees: f64) -> f64 {
    degrees_to_radians(degrees).tan()
}

/// Hyperbolic sine of `x`.
pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

/// Hyperbolic cosine of `x`.
pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

/// Hyperbolic tangent of `x`.
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn conversion_roundtrip(deg in -1e6_f64..1e6) {
            let back = radians_to_degrees(degrees_to_radians(deg));
            prop_assert!((back - deg).abs() <= 1e-9 * deg.abs().max(1.0));
        }

        #[test]
        fn pythagorean_identity(deg in -720.0_f64..720.0) {
            let s = sin(deg);
            let c = cos(deg);
            prop_assert!((s * s + c * c - 1.0).abs() < 1e-12);
        }

        #[test]
        fn hyperbolic_identity(x in -20.0_f64..20.0) {
            let c = cosh(x);
            let s = sinh(x);
            prop_assert!((c * c - s * s - 1.0).abs() < 1e-9 * c * c);
        }
    }
}
