//! Rounding, formatting, and small numeric utilities.
//!
//! [`round`] rounds halves toward +∞ and [`to_fixed`] rounds exact decimal
//! ties away from zero. Neither matches `f64::round`, so both are
//! implemented here rather than delegated.

/// Default decimal places used by [`to_fixed_default`].
pub const DEFAULT_DECIMALS: u32 = 2;

/// Largest decimal count accepted by [`to_fixed`]; larger requests saturate.
pub const MAX_DECIMALS: u32 = 100;

/// Extra digits printed when probing whether a value sits exactly on a tie.
const TIE_PROBE_DIGITS: usize = 30;

/// Rounds to the nearest integer, with halves going toward +∞.
///
/// # Examples
/// ```
/// use math_toolkit::rounding::round;
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -2.0);
/// assert_eq!(round(2.4), 2.0);
/// ```
pub fn round(x: f64) -> f64 {
    let down = x.floor();
    // x - floor(x) is exact for every finite f64
    let rounded = if x - down >= 0.5 { down + 1.0 } else { down };
    if rounded == 0.0 {
        0.0_f64.copysign(x)
    } else {
        rounded
    }
}

/// Smallest integer not less than `x`.
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Largest integer not greater than `x`.
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Drops digits beyond `decimals` places, truncating toward zero.
///
/// `decimals` may be negative, in which case digits left of the decimal
/// point are dropped (`truncate(1234.0, -2) == 1200.0`).
///
/// # Examples
/// ```
/// use math_toolkit::rounding::truncate;
/// assert_eq!(truncate(3.14159, 2), 3.14);
/// assert_eq!(truncate(-3.14159, 2), -3.14);
/// ```
pub fn truncate(x: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (x * factor).trunc() / factor
}

/// Returns `-1.0` or `1.0` by sign; zeros and NaN are returned unchanged.
pub fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

/// Bounds `x` to `[lo, hi]` as `min(max(x, lo), hi)`.
///
/// Unlike `f64::clamp` this never panics. When `lo > hi` the result is `hi`.
///
/// # Returns
/// - `f64::NAN` if `x`, `lo` or `hi` is NaN.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() || lo.is_nan() || hi.is_nan() {
        return f64::NAN;
    }
    x.max(lo).min(hi)
}

/// Largest of `values`.
///
/// # Returns
/// - `f64::NEG_INFINITY` for an empty slice.
/// - `f64::NAN` if any value is NaN.
///
/// # Examples
/// ```
/// use math_toolkit::rounding::maximum;
/// assert_eq!(maximum(&[3.0, 1.0, 4.0, 1.0, 5.0]), 5.0);
/// assert_eq!(maximum(&[]), f64::NEG_INFINITY);
/// ```
pub fn maximum(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .try_fold(f64::NEG_INFINITY, |acc, x| {
            if x.is_nan() {
                None
            } else {
                Some(acc.max(x))
            }
        })
        .unwrap_or(f64::NAN)
}

/// Smallest of `values`.
///
/// # Returns
/// - `f64::INFINITY` for an empty slice.
/// - `f64::NAN` if any value is NaN.
pub fn minimum(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .try_fold(f64::INFINITY, |acc, x| {
            if x.is_nan() {
                None
            } else {
                Some(acc.min(x))
            }
        })
        .unwrap_or(f64::NAN)
}

/// True if `x` is finite and has no fractional part.
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

/// True if `x` is neither infinite nor NaN.
pub fn is_finite(x: f64) -> bool {
    x.is_finite()
}

/// Rounds `x` to `decimals` places and returns the result as a number.
///
/// Rounding is decided on the exact decimal expansion of `x`, so `1.005`
/// (stored as `1.00499999…`) rounds to `1.0` at two places. Exact ties
/// round away from zero. Non-finite input is returned unchanged and
/// `decimals` saturates at [`MAX_DECIMALS`].
///
/// # Examples
/// ```
/// use math_toolkit::rounding::to_fixed;
/// assert_eq!(to_fixed(3.14159, 2), 3.14);
/// assert_eq!(to_fixed(2.5, 0), 3.0);
/// assert_eq!(to_fixed(1.005, 2), 1.0);
/// ```
pub fn to_fixed(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let digits = decimals.min(MAX_DECIMALS) as usize;
    let magnitude = x.abs();

    let rounded = if is_exact_tie(magnitude, digits) {
        // Drop the trailing '5' and step one unit up in the last kept place.
        let probe = format!("{:.*}", digits + 1, magnitude);
        let truncated: f64 = probe[..probe.len() - 1]
            .trim_end_matches('.')
            .parse()
            .unwrap_or(magnitude);
        let step = 10.0_f64.powi(-(digits as i32));
        format!("{:.*}", digits, truncated + step)
            .parse()
            .unwrap_or(magnitude)
    } else {
        format!("{:.*}", digits, magnitude)
            .parse()
            .unwrap_or(magnitude)
    };
    rounded.copysign(x)
}

/// [`to_fixed`] with [`DEFAULT_DECIMALS`] places.
pub fn to_fixed_default(x: f64) -> f64 {
    to_fixed(x, DEFAULT_DECIMALS)
}

/// True when the decimal expansion of `magnitude` is exactly `…d5000…`
/// with the `5` sitting one place past `digits`.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let probe = format!("{:.*}", digits + TIE_PROBE_DIGITS, magnitude);
    let Some((_, fraction)) = probe.split_once('.') else {
        return false;
    };
    let mut tail = fraction[digits..].chars();
    tail.next() == Some('5') && tail.all(|c| c == '0')
}

// ============================================================================
// Tests
// ============================================================================
