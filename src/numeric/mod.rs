// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic under a precision context
// ============================================================================
//
// This module provides:
// - BigDecimal: base-10 value (BigInt mantissa, scale bounded to the i32 range)
// - MathContext / RoundingMode: significant digits and rounding rule
// - pi(): π generated at any context precision
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Exact mul/pow; add, sub, division and square root take a context
// - Fallible arithmetic returns Result (no panics); out-of-range scales are
//   reported as Overflow

mod big_decimal;
mod constants;
mod context;
mod errors;

pub use big_decimal::BigDecimal;
pub use constants::pi;
pub use context::{MathContext, RoundingMode};
pub use errors::{NumericError, NumericResult};
