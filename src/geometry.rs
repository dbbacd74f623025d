//! Areas and volumes of simple shapes.
//!
//! Dimensions are trusted. Negative lengths are not rejected and simply
//! flow through the formula.

use std::f64::consts::PI;

/// Area of a rectangle, `length × width`.
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Area of a circle, `π r²`.
///
/// # Examples
/// ```
/// use math_toolkit::geometry::circle_area;
/// assert!((circle_area(1.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Volume of a cube, `side³`.
pub fn cube_volume(side: f64) -> f64 {
    side.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        assert_eq!(rectangle_area(3.0, 4.0), 12.0);
        assert_eq!(rectangle_area(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_rectangle_negative_dimension() {
        assert_eq!(rectangle_area(-3.0, 4.0), -12.0);
        assert_eq!(rectangle_area(-3.0, -4.0), 12.0);
    }

    #[test]
    fn test_circle_area() {
        assert!((circle_area(2.0) - 4.0 * PI).abs() < 1e-12);
        // r² makes the sign irrelevant
        assert_eq!(circle_area(-2.0), circle_area(2.0));
    }

    #[test]
    fn test_cube_volume() {
        assert_eq!(cube_volume(3.0), 27.0);
        assert_eq!(cube_volume(-2.0), -8.0);
        assert_eq!(cube_volume(0.5), 0.125);
    }
}
