// ============================================================================
// Convertible Values
// Numeric or textual inputs accepted by circle setters and queries
// ============================================================================

use crate::errors::{CircleError, CircleResult};
use crate::numeric::{BigDecimal, MathContext};
use rust_decimal::Decimal;

/// A numeric input of any supported representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Any primitive integer
    Integer(i128),
    /// Binary floating point (NaN and infinities are unsupported)
    Float(f64),
    /// Single-precision floating point, read through its own shortest literal
    Float32(f32),
    /// Fixed-precision decimal
    Decimal(Decimal),
    /// Arbitrary-precision decimal
    Exact(BigDecimal),
}

/// Input accepted wherever a circle takes a coordinate or a length.
///
/// Usually built implicitly through `From`:
///
/// ```
/// use precise_circle::{Circle, Value};
///
/// let mut circle = Circle::new();
/// circle.set_radius(5).unwrap();
/// circle.set_radius(2.5).unwrap();
/// circle.set_radius("1.25").unwrap();
/// assert!(circle.set_radius(Value::from("one")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number
    Number(Number),
    /// A decimal literal such as `"-12.5"` or `"1e-3"`
    Literal(String),
}

impl Number {
    /// Exact decimal value of the number.
    ///
    /// Floats are read as the shortest literal that prints them, not as
    /// their binary expansion.
    ///
    /// # Errors
    /// Returns `UnsupportedValue` for non-finite floats.
    fn to_exact(&self) -> CircleResult<BigDecimal> {
        match self {
            Number::Integer(value) => Ok(BigDecimal::from(*value)),
            Number::Float(value) => BigDecimal::try_from(*value).map_err(|_| non_finite(value)),
            Number::Float32(value) => BigDecimal::try_from(*value).map_err(|_| non_finite(value)),
            Number::Decimal(value) => Ok(BigDecimal::from(*value)),
            Number::Exact(value) => Ok(value.clone()),
        }
    }
}

fn non_finite(value: &impl std::fmt::Display) -> CircleError {
    CircleError::UnsupportedValue(format!("non-finite float {}", value))
}

impl Value {
    /// Convert to a decimal rounded to `mc`.
    ///
    /// # Errors
    /// - `UnsupportedValue` for non-finite floats
    /// - `MalformedLiteral` if a literal is not a decimal number or its
    ///   exponent is out of range
    pub fn to_decimal(&self, mc: &MathContext) -> CircleResult<BigDecimal> {
        match self {
            Value::Number(number) => Ok(number.to_exact()?.round(mc)),
            Value::Literal(literal) => {
                BigDecimal::parse_with_context(literal, mc).map_err(CircleError::MalformedLiteral)
            },
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::Number(Number::Integer(i128::from(value)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Number(Number::Float32(value))
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(value: Decimal) -> Self {
        Value::Number(Number::Decimal(value))
    }
}

impl From<BigDecimal> for Value {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Value::Number(Number::Exact(value))
    }
}

impl From<&BigDecimal> for Value {
    #[inline]
    fn from(value: &BigDecimal) -> Self {
        Value::Number(Number::Exact(value.clone()))
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn convert(value: impl Into<Value>) -> CircleResult<BigDecimal> {
        value.into().to_decimal(&MathContext::DECIMAL128)
    }

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_integers() {
        assert_eq!(convert(42).unwrap(), dec("42"));
        assert_eq!(convert(-7i64).unwrap(), dec("-7"));
        assert_eq!(convert(u64::MAX).unwrap(), dec("18446744073709551615"));
    }

    #[test]
    fn test_floats_use_shortest_literal() {
        assert_eq!(convert(0.1).unwrap().to_string(), "0.1");
        assert_eq!(convert(0.1f32).unwrap().to_string(), "0.1");
        assert_eq!(convert(-2.5).unwrap(), dec("-2.5"));
    }

    #[test]
    fn test_non_finite_floats_unsupported() {
        assert!(matches!(
            convert(f64::NAN),
            Err(CircleError::UnsupportedValue(_))
        ));
        assert!(matches!(
            convert(f64::NEG_INFINITY),
            Err(CircleError::UnsupportedValue(_))
        ));
        assert_eq!(
            convert(f32::INFINITY),
            Err(CircleError::UnsupportedValue("non-finite float inf".to_string()))
        );
    }

    #[test]
    fn test_float_extremes() {
        let largest = convert(f64::MAX).unwrap();
        assert_eq!(largest.adjusted_exponent(), 308);
        assert_eq!(largest.digits(), 34);

        let smallest = convert(f64::MIN_POSITIVE / 4.0).unwrap();
        assert_eq!(smallest.signum(), 1);
        assert_eq!(smallest.adjusted_exponent(), -309);
        assert_eq!(convert(-0.0f32).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn test_decimals() {
        assert_eq!(convert(Decimal::new(12345, 2)).unwrap(), dec("123.45"));
        assert_eq!(convert(dec("1e-40")).unwrap(), dec("1e-40"));
        assert_eq!(convert(&dec("3")).unwrap(), dec("3"));
    }

    #[test]
    fn test_literals() {
        assert_eq!(convert("-12.5").unwrap(), dec("-12.5"));
        assert_eq!(convert(String::from("1e3")).unwrap(), dec("1000"));
        assert_eq!(
            convert("twelve"),
            Err(CircleError::MalformedLiteral(NumericError::InvalidInput))
        );
    }

    #[test]
    fn test_literals_at_the_scale_limits() {
        assert_eq!(convert("1e-2147483647").unwrap().scale(), 2147483647);
        for literal in ["1e-5000000000000000000", "1e9999999999", "1e-9223372036854775808"] {
            assert_eq!(
                convert(literal),
                Err(CircleError::MalformedLiteral(NumericError::InvalidInput)),
                "literal {literal}"
            );
        }
    }

    #[test]
    fn test_conversion_rounds_to_context() {
        let value = Value::from("1.23456789");
        let rounded = value.to_decimal(&MathContext::DECIMAL32).unwrap();
        assert_eq!(rounded.to_string(), "1.234568");

        let long = Value::from(BigDecimal::from(u128::MAX));
        assert_eq!(long.to_decimal(&MathContext::DECIMAL32).unwrap(), dec("3.402824e38"));
    }
}
