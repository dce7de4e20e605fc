// ============================================================================
// Circle Errors
// Invalid-argument failures raised by circle setters and queries
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Every failure a [`Circle`](crate::Circle) can report.
///
/// All variants describe an invalid argument supplied by the caller; they are
/// raised at the offending call and never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircleError {
    /// The value cannot be represented as a decimal (e.g. NaN or infinity)
    UnsupportedValue(String),
    /// A textual literal failed to parse
    MalformedLiteral(NumericError),
    /// A non-negative quantity received a negative value
    Negative {
        /// Name of the rejected quantity
        field: &'static str,
    },
    /// Decimal arithmetic failed while deriving a value
    Arithmetic(NumericError),
}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircleError::UnsupportedValue(value) => write!(f, "unsupported value: {}", value),
            CircleError::MalformedLiteral(err) => write!(f, "malformed decimal literal: {}", err),
            CircleError::Negative { field } => {
                write!(f, "value cannot be negative: {}", field)
            },
            CircleError::Arithmetic(err) => write!(f, "arithmetic failure: {}", err),
        }
    }
}

impl std::error::Error for CircleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CircleError::MalformedLiteral(err) | CircleError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CircleError {
    fn from(err: NumericError) -> Self {
        CircleError::Arithmetic(err)
    }
}

/// Result type alias for circle operations
pub type CircleResult<T> = Result<T, CircleError>;
