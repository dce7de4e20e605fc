// ============================================================================
// Precise Circle Library
// Circle geometry over arbitrary-precision decimal arithmetic
// ============================================================================

//! # Precise Circle
//!
//! A circle value object whose coordinates, radius and derived quantities are
//! arbitrary-precision decimals, so results are reproducible and free of
//! binary floating-point drift.
//!
//! ## Features
//!
//! - **Configurable precision**: significant digits and rounding mode fixed
//!   per circle (default: 34 digits, half-even, as IEEE 754 decimal128)
//! - **Derived quantities**: diameter, area and circumference can be read
//!   and written; writes are converted back to the radius
//! - **Point queries**: center distance, signed edge distance and
//!   inside/boundary/outside classification
//! - **Flexible inputs**: integers, floats, `rust_decimal::Decimal`,
//!   [`BigDecimal`](numeric::BigDecimal) or decimal literals
//!
//! ## Example
//!
//! ```rust
//! use precise_circle::prelude::*;
//!
//! let mut circle = Circle::new();
//! circle.set_radius(5).unwrap();
//! assert!(circle.area().unwrap().to_string().starts_with("78.5398163"));
//!
//! circle.set_diameter("10").unwrap();
//! assert_eq!(circle.radius().to_string(), "5");
//!
//! // Fewer digits, same geometry
//! let coarse = Circle::with_context(MathContext::DECIMAL32);
//! assert_eq!(coarse.pi().to_string(), "3.141593");
//!
//! // Negative lengths are rejected and leave the circle untouched
//! assert!(circle.set_area(-1).is_err());
//! assert_eq!(circle.radius().to_string(), "5");
//! ```

pub mod circle;
pub mod errors;
pub mod numeric;
pub mod value;

pub use circle::Circle;
pub use errors::{CircleError, CircleResult};
pub use value::{Number, Value};

// Re-exports for convenience
pub mod prelude {
    pub use crate::circle::Circle;
    pub use crate::errors::{CircleError, CircleResult};
    pub use crate::numeric::{BigDecimal, MathContext, NumericError, RoundingMode};
    pub use crate::value::{Number, Value};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::cmp::Ordering;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_radius_five_quantities() {
        let mut circle = Circle::new();
        circle.set_radius(5).unwrap();

        assert!(circle.area().unwrap().to_string().starts_with("78.5398163"));
        assert!(circle
            .circumference()
            .unwrap()
            .to_string()
            .starts_with("31.4159265"));
    }

    #[test]
    fn test_diameter_sets_radius() {
        let mut circle = Circle::new();
        circle.set_diameter(10).unwrap();
        assert_eq!(circle.radius(), &dec("5"));
    }

    #[test]
    fn test_boundary_point() {
        let mut circle = Circle::new();
        circle.set_coordinates(0, 0).unwrap();
        circle.set_radius(5).unwrap();

        assert_eq!(circle.center_distance_to_point(5, 0).unwrap(), dec("5"));
        assert!(circle.distance_to_point(5, 0).unwrap().is_zero());
        assert_eq!(circle.compare_point_to_circle(5, 0).unwrap(), 0);
    }

    #[test]
    fn test_inside_and_outside_points() {
        let mut circle = Circle::new();
        circle.set_coordinates(0, 0).unwrap();
        circle.set_radius(5).unwrap();

        assert!(circle.compare_point_to_circle(0, 0).unwrap() < 0);
        assert!(circle.compare_point_to_circle(100, 100).unwrap() > 0);
        assert_eq!(circle.point_position(3, "4").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_negative_area_keeps_radius() {
        let mut circle = Circle::new();
        circle.set_radius(5).unwrap();

        let result = circle.set_area(-1);
        assert_eq!(result, Err(CircleError::Negative { field: "area" }));
        assert_eq!(circle.radius(), &dec("5"));
    }

    #[test]
    fn test_precisions_agree_within_tolerance() {
        let mut coarse = Circle::with_context(MathContext::DECIMAL32);
        let mut fine = Circle::with_context(MathContext::DECIMAL128);

        for circle in [&mut coarse, &mut fine] {
            circle.set_coordinates("0.5", "-1.25").unwrap();
            circle.set_area("1234.5678").unwrap();
        }

        // Both agree up to the coarse circle's seven digits
        let coarse_radius = coarse.radius().clone();
        let fine_radius = fine.radius().round(coarse.context());
        assert_eq!(coarse_radius, fine_radius);

        let distance_gap = coarse
            .distance_to_point(10, 10)
            .unwrap()
            .sub_ctx(&fine.distance_to_point(10, 10).unwrap(), fine.context())
            .abs();
        assert!(distance_gap < dec("1e-5"));

        // The fine circle carries more stable digits
        assert!(fine.radius().digits() > coarse.radius().digits());
    }

    #[test]
    fn test_inputs_of_every_kind() {
        let mut circle = Circle::new();

        circle.set_radius(2u8).unwrap();
        assert_eq!(circle.radius(), &dec("2"));

        circle.set_radius(0.75f32).unwrap();
        assert_eq!(circle.radius(), &dec("0.75"));

        circle.set_radius(rust_decimal::Decimal::new(125, 1)).unwrap();
        assert_eq!(circle.radius(), &dec("12.5"));

        circle.set_radius(dec("3.0")).unwrap();
        assert_eq!(circle.radius(), &dec("3"));

        circle.set_radius(Value::Number(Number::Integer(9))).unwrap();
        assert_eq!(circle.diameter().unwrap(), dec("18"));
    }

    #[test]
    fn test_extreme_inputs_fail_cleanly() {
        let mut circle = Circle::with_context(MathContext::DECIMAL32);
        circle.set_radius(5).unwrap();

        // Out-of-range literals are malformed input
        assert_eq!(
            circle.set_radius("1e-5000000000000000000"),
            Err(CircleError::MalformedLiteral(NumericError::InvalidInput))
        );

        // In range, but the square is not
        circle.set_radius("1e-1500000000").unwrap();
        assert_eq!(
            circle.area(),
            Err(CircleError::Arithmetic(NumericError::Overflow))
        );
        assert_eq!(circle.radius().to_string(), "1E-1500000000");

        // Point queries whose squares stay in range still answer
        assert_eq!(circle.compare_point_to_circle(0, 0).unwrap(), -1);
        assert_eq!(circle.compare_point_to_circle(0, "1e-1000000000").unwrap(), 1);
        assert_eq!(
            circle.compare_point_to_circle(0, "1e-1600000000"),
            Err(CircleError::Arithmetic(NumericError::Overflow))
        );
    }

    #[test]
    fn test_high_precision_circle() {
        let mc = MathContext::new(60, RoundingMode::HalfUp).unwrap();
        let mut circle = Circle::with_context(mc);
        circle.set_radius(1).unwrap();

        let area = circle.area().unwrap();
        assert_eq!(area.digits(), 60);
        assert!(area
            .to_string()
            .starts_with("3.14159265358979323846264338327950288419716939937510"));
    }
}
