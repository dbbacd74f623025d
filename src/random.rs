//! Uniform random numbers over caller-supplied bounds.
//!
//! Every helper takes the generator explicitly so runs can be reproduced.
//! The `_thread` variants draw from the thread-local generator instead.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::error::{DomainError, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use math_toolkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Uniform float in `[min, max)`, computed as `u × (max − min) + min`.
///
/// Bounds are not validated. Reversed bounds give a value in `(max, min]`
/// and equal bounds always return `min`.
///
/// # Examples
/// ```
/// use math_toolkit::random::{create_rng, random_between};
/// let mut rng = create_rng(7);
/// let x = random_between(2.0, 5.0, &mut rng);
/// assert!((2.0..5.0).contains(&x));
/// ```
pub fn random_between<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    u * (max - min) + min
}

/// Uniform integer in `[ceil(min), floor(max)]`, both ends inclusive.
///
/// # Errors
/// [`DomainError::EmptyRange`] if either bound is not finite or the
/// interval contains no integer (e.g. `min = 1.2, max = 1.8`).
///
/// # Examples
/// ```
/// use math_toolkit::random::{create_rng, random_int_between};
/// let mut rng = create_rng(7);
/// let roll = random_int_between(1.0, 6.0, &mut rng).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn random_int_between<R: Rng>(min: f64, max: f64, rng: &mut R) -> Result<i64> {
    let (lo, hi) = integer_bounds(min, max)?;
    Ok(rng.random_range(lo..=hi))
}

/// [`random_between`] using the thread-local generator.
pub fn random_between_thread(min: f64, max: f64) -> f64 {
    random_between(min, max, &mut rand::rng())
}

/// [`random_int_between`] using the thread-local generator.
pub fn random_int_between_thread(min: f64, max: f64) -> Result<i64> {
    random_int_between(min, max, &mut rand::rng())
}

/// Narrows float bounds to the inclusive integer interval they enclose.
fn integer_bounds(min: f64, max: f64) -> Result<(i64, i64)> {
    let lo = min.ceil();
    let hi = max.floor();
    // i64::MAX as f64 rounds up to 2^63, so the upper limit is exclusive
    let representable = |v: f64| v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64;
    if !representable(lo) || !representable(hi) || lo > hi {
        log::debug!("rejected empty integer range [{min}, {max}]");
        return Err(DomainError::EmptyRange { min, max });
    }
    Ok((lo as i64, hi as i64))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn random_int_stays_in_bounds(
            seed in 0_u64..10000,
            min in -1000.0_f64..1000.0,
            width in 1.0_f64..500.0,
        ) {
            let max = min + width;
            let mut rng = create_rng(seed);
            for _ in 0..50 {
                let v = random_int_between(min, max, &mut rng).unwrap() as f64;
                prop_assert!(v >= min.ceil() && v <= max.floor(), "{} not in [{}, {}]", v, min, max);
            }
        }

        #[test]
        fn random_between_stays_in_bounds(
            seed in 0_u64..10000,
            min in -1e6_f64..1e6,
            width in 1e-3_f64..1e6,
        ) {
            let max = min + width;
            let mut rng = create_rng(seed);
            let x = random_between(min, max, &mut rng);
            // u * width + min can round up to max when width is tiny next to |min|
            prop_assert!(x >= min && x <= max);
        }

        #[test]
        fn random_between_excludes_upper_bound(seed in 0_u64..10000) {
            // on [0, 1) the formula reduces to u * 1.0 + 0.0 == u, which is below 1
            let mut rng = create_rng(seed);
            for _ in 0..50 {
                let x = random_between(0.0, 1.0, &mut rng);
                prop_assert!((0.0..1.0).contains(&x), "{} not in [0, 1)", x);
            }
        }
    }
}
