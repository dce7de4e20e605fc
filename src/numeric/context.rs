// ============================================================================
// Precision Context
// Significant-digit count and rounding rule applied to decimal results
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

// ============================================================================
// Rounding Mode
// ============================================================================

/// Rule used to discard digits beyond a context's precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// To nearest, ties away from zero
    HalfUp,
    /// To nearest, ties towards zero
    HalfDown,
    /// To nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
}

impl RoundingMode {
    /// Decide whether a truncated magnitude must be incremented by one unit.
    ///
    /// - `negative`: sign of the value being rounded
    /// - `odd`: whether the truncated last digit is odd
    /// - `half_cmp`: discarded fraction compared against one half
    /// - `inexact`: whether anything non-zero was discarded
    pub(crate) fn round_away(
        self,
        negative: bool,
        odd: bool,
        half_cmp: std::cmp::Ordering,
        inexact: bool,
    ) -> bool {
        use std::cmp::Ordering::*;

        if !inexact {
            return false;
        }
        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half_cmp != Less,
            RoundingMode::HalfDown => half_cmp == Greater,
            RoundingMode::HalfEven => match half_cmp {
                Greater => true,
                Less => false,
                Equal => odd,
            },
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Math Context
// ============================================================================

/// Precision context: number of significant digits plus rounding mode.
///
/// Every context-aware operation on [`BigDecimal`](super::BigDecimal)
/// rounds its result to `precision` significant digits using `rounding`.
///
/// # Example
/// ```
/// use precise_circle::numeric::{MathContext, RoundingMode};
///
/// let mc = MathContext::DECIMAL64.with_rounding(RoundingMode::HalfUp);
/// assert_eq!(mc.precision(), 16);
/// assert!(mc.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// IEEE 754 decimal32: 7 digits, half-even
    pub const DECIMAL32: Self = Self {
        precision: 7,
        rounding: RoundingMode::HalfEven,
    };

    /// IEEE 754 decimal64: 16 digits, half-even
    pub const DECIMAL64: Self = Self {
        precision: 16,
        rounding: RoundingMode::HalfEven,
    };

    /// IEEE 754 decimal128: 34 digits, half-even
    pub const DECIMAL128: Self = Self {
        precision: 34,
        rounding: RoundingMode::HalfEven,
    };

    /// Create a context.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is zero.
    pub fn new(precision: u32, rounding: RoundingMode) -> NumericResult<Self> {
        let mc = Self {
            precision,
            rounding,
        };
        mc.validate()?;
        Ok(mc)
    }

    /// Number of significant digits kept by this context.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding mode of this context.
    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Builder method: replace the rounding mode
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: replace the precision (checked by [`validate`](Self::validate))
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the context
    pub fn validate(&self) -> NumericResult<()> {
        if self.precision == 0 {
            return Err(NumericError::InvalidPrecision);
        }
        Ok(())
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} roundingMode={}", self.precision, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_presets() {
        assert_eq!(MathContext::DECIMAL32.precision(), 7);
        assert_eq!(MathContext::DECIMAL64.precision(), 16);
        assert_eq!(MathContext::DECIMAL128.precision(), 34);
        assert_eq!(MathContext::default(), MathContext::DECIMAL128);
        assert_eq!(MathContext::default().rounding(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_zero_precision_rejected() {
        assert_eq!(
            MathContext::new(0, RoundingMode::HalfUp),
            Err(NumericError::InvalidPrecision)
        );
        assert!(MathContext::DECIMAL32.with_precision(0).validate().is_err());
    }

    #[test]
    fn test_builder() {
        let mc = MathContext::new(50, RoundingMode::Floor).unwrap();
        assert_eq!(mc.precision(), 50);
        assert_eq!(mc.rounding(), RoundingMode::Floor);

        let mc = mc.with_rounding(RoundingMode::Ceiling).with_precision(12);
        assert_eq!(mc.precision(), 12);
        assert_eq!(mc.rounding(), RoundingMode::Ceiling);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MathContext::DECIMAL128.to_string(),
            "precision=34 roundingMode=HALF_EVEN"
        );
    }

    #[test]
    fn test_round_away_decisions() {
        // Exact results never round
        assert!(!RoundingMode::Up.round_away(false, true, Ordering::Less, false));

        assert!(RoundingMode::Up.round_away(false, false, Ordering::Less, true));
        assert!(!RoundingMode::Down.round_away(false, false, Ordering::Greater, true));
        assert!(RoundingMode::Ceiling.round_away(false, false, Ordering::Less, true));
        assert!(!RoundingMode::Ceiling.round_away(true, false, Ordering::Less, true));
        assert!(RoundingMode::Floor.round_away(true, false, Ordering::Less, true));

        // Ties
        assert!(RoundingMode::HalfUp.round_away(false, false, Ordering::Equal, true));
        assert!(!RoundingMode::HalfDown.round_away(false, false, Ordering::Equal, true));
        assert!(RoundingMode::HalfEven.round_away(false, true, Ordering::Equal, true));
        assert!(!RoundingMode::HalfEven.round_away(false, false, Ordering::Equal, true));
    }
}
