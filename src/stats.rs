//! Descriptive statistics over borrowed numeric sequences.
//!
//! Empty input is answered with a defined value rather than an error:
//! `0.0` for [`mean`] and [`median`], an empty `Vec` for [`mode`].
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier (improved Kahan) compensated summation, so the
//!   error does not grow with `n`.
//! - **Median**: sort a copy with `f64::total_cmp`, pick the middle.
//! - **Mode**: frequency table keyed on the value's bit pattern, with
//!   `-0.0` folded into `0.0` and every NaN folded into one key.

use std::collections::HashMap;

/// Arithmetic mean, or `0.0` for an empty slice.
///
/// Finite input is summed with [`kahan_sum`]. If any element is infinite
/// or NaN the plain sum is used so that infinities and NaN propagate the
/// same way ordinary addition would.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use math_toolkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let total = if data.iter().all(|x| x.is_finite()) {
        kahan_sum(data)
    } else {
        data.iter().sum()
    };
    total / data.len() as f64
}

/// Median of `data` without mutating the input, or `0.0` when empty.
///
/// Clones and sorts the data ascending, then returns the middle element
/// (odd length) or the average of the two middle elements (even length).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use math_toolkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// All values sharing the highest occurrence count, in ascending order.
///
/// Ties return every tied value. An empty slice returns an empty `Vec`.
/// `0.0` and `-0.0` count as the same value (reported as `0.0`), and all
/// NaN payloads count as a single NaN value.
///
/// # Complexity
/// Time: O(n + k log k) for `k` distinct values, Space: O(k)
///
/// # Examples
/// ```
/// use math_toolkit::stats::mode;
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
/// assert!(mode(&[]).is_empty());
/// ```
pub fn mode(data: &[f64]) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut frequency: HashMap<u64, (f64, usize)> = HashMap::new();
    for &x in data {
        let value = canonical(x);
        frequency.entry(value.to_bits()).or_insert((value, 0)).1 += 1;
    }

    let max_count = frequency
        .values()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    let mut modes: Vec<f64> = frequency
        .into_values()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect();
    modes.sort_unstable_by(f64::total_cmp);
    modes
}

/// Folds `-0.0` into `0.0` and every NaN into the canonical NaN.
fn canonical(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x == 0.0 {
        0.0
    } else {
        x
    }
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// # Algorithm
/// Maintains a running compensation variable `c`. At each step, the
/// branch ensures the smaller operand's low-order bits are captured.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_non_finite_propagates() {
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), f64::INFINITY);
        assert!(mean(&[1.0, f64::NAN, 3.0]).is_nan());
        assert!(mean(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_mean_compensated() {
        // each 1e-16 is below half an ulp of 1.0, so naive summation drops all ten
        let mut data = vec![1.0];
        data.extend(std::iter::repeat(1e-16).take(10));
        let naive: f64 = data.iter().sum();
        assert_eq!(naive, 1.0);
        assert!(kahan_sum(&data) - 1.0 > 5e-16);
        assert!(mean(&data) > 1.0 / 11.0);
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 3.0, 2.0]), 2.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = [5.0, 1.0, 4.0];
        let _ = median(&data);
        assert_eq!(data, [5.0, 1.0, 4.0]);
    }

    #[test]
    fn test_median_negative_values() {
        assert_eq!(median(&[-10.0, -2.0, 3.0, -7.0]), -4.5);
    }

    // --- mode ---

    #[test]
    fn test_mode_single_winner() {
        assert_eq!(mode(&[4.0, 1.0, 4.0, 2.0]), vec![4.0]);
    }

    #[test]
    fn test_mode_tie() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
    }

    #[test]
    fn test_mode_all_distinct() {
        assert_eq!(mode(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mode_empty() {
        assert!(mode(&[]).is_empty());
    }

    #[test]
    fn test_mode_signed_zero_merged() {
        let m = mode(&[0.0, -0.0, 5.0]);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_mode_nan_counted_once() {
        let m = mode(&[f64::NAN, f64::NAN, 1.0]);
        assert_eq!(m.len(), 1);
        assert!(m[0].is_nan());
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_basic() {
        let v = [1.0, 2.0, 3.0];
        assert!((kahan_sum(&v) - 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_kahan_sum_precision() {
        // Large + small values: naive summation loses the small terms
        let v = [1e16, 1.0, -1e16];
        assert_eq!(kahan_sum(&v), 1.0);
    }
}
