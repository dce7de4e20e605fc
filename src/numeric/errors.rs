// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string or value is not a decimal literal
    InvalidInput,
    /// Attempted division by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeSquareRoot,
    /// A precision context with zero significant digits
    InvalidPrecision,
    /// Result scale outside the representable range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
            NumericError::InvalidPrecision => {
                write!(f, "invalid precision: at least one significant digit is required")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result scale out of range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
