//! # math-toolkit
//!
//! Small, stateless numeric and string helpers.
//!
//! Every function takes primitive inputs and returns a primitive result.
//! Operations that are mathematically undefined (division by zero, square
//! root of a negative number, logarithm outside its domain) return
//! [`DomainError`]; everything else answers with a defined value.
//!
//! ## Modules
//!
//! - [`arithmetic`] — add, subtract, multiply, divide, power, square root, absolute
//! - [`geometry`] — rectangle and circle areas, cube volume
//! - [`stats`] — mean, median, mode over borrowed slices
//! - [`trig`] — degree/radian conversion, degree-based circular functions, hyperbolic functions
//! - [`rounding`] — rounding, truncation, clamping, extrema, `to_fixed`
//! - [`logarithm`] — natural and arbitrary-base logarithms
//! - [`random`] — uniform floats and integers over caller bounds
//! - [`strings`] — string operations with an injectable output sink
//!
//! ## Conventions
//!
//! - Angles passed to [`trig::sin`], [`trig::cos`] and [`trig::tan`] are in degrees;
//!   the hyperbolic functions take raw values.
//! - Empty sequences give `0.0` for mean and median and an empty `Vec` for mode.

pub mod arithmetic;
pub mod error;
pub mod geometry;
pub mod logarithm;
pub mod random;
pub mod rounding;
pub mod stats;
pub mod strings;
pub mod trig;

pub use error::{DomainError, Result};
