// ============================================================================
// Arbitrary-Precision Decimal
// Exact base-10 arithmetic with context-controlled rounding
// ============================================================================

use super::context::MathContext;
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// Arbitrary-precision decimal number.
///
/// Internally stores `unscaled × 10^(-scale)`, where `unscaled` is an
/// unbounded integer and `scale` may be negative. Parsed values and the
/// results of the checked operations keep their scale within
/// `±`[`MAX_SCALE`](Self::MAX_SCALE); anything further out fails instead of
/// growing without bound.
///
/// Multiplication and integer powers are exact (`checked_mul`,
/// `checked_pow`). Addition, subtraction, division and square root take a
/// [`MathContext`] and round their result to its precision.
///
/// Equality and ordering are numeric: `2.50` equals `2.5`.
///
/// # Example
/// ```
/// use precise_circle::numeric::{BigDecimal, MathContext};
///
/// let one: BigDecimal = "1".parse().unwrap();
/// let three: BigDecimal = "3".parse().unwrap();
/// let third = one.div_ctx(&three, &MathContext::DECIMAL32).unwrap();
/// assert_eq!(third.to_string(), "0.3333333");
/// ```
#[derive(Clone)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i64,
}

// ============================================================================
// Powers of Ten
// ============================================================================

/// Compute 10^n
pub(crate) fn pow10(n: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), n as usize)
}

/// Number of decimal digits in |n| (zero has one digit)
fn digit_count(n: &BigInt) -> u64 {
    if n.is_zero() {
        return 1;
    }
    n.magnitude().to_str_radix(10).len() as u64
}

/// Accept a computed scale only inside `±MAX_SCALE`.
fn bounded_scale(scale: Option<i64>) -> NumericResult<i64> {
    scale
        .filter(|scale| (-BigDecimal::MAX_SCALE..=BigDecimal::MAX_SCALE).contains(scale))
        .ok_or(NumericError::Overflow)
}

impl BigDecimal {
    /// Largest scale magnitude a value may carry (the `i32` range).
    pub const MAX_SCALE: i64 = i32::MAX as i64;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled integer and a scale: `unscaled × 10^(-scale)`.
    #[inline]
    pub fn new(unscaled: BigInt, scale: i32) -> Self {
        Self::from_parts(unscaled, i64::from(scale))
    }

    /// Unchecked constructor for scales already known to be in range.
    #[inline]
    pub(crate) fn from_parts(unscaled: BigInt, scale: i64) -> Self {
        Self { unscaled, scale }
    }

    /// Zero
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(BigInt::zero(), 0)
    }

    /// Parse a decimal literal and round it to `mc`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `s` is not a decimal literal or its scale
    /// is out of range.
    pub fn parse_with_context(s: &str, mc: &MathContext) -> NumericResult<Self> {
        Ok(s.parse::<Self>()?.round(mc))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Unscaled integer value.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits to the right of the decimal point (negative for
    /// values scaled by a positive power of ten).
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Number of significant digits in the unscaled value.
    #[inline]
    pub fn digits(&self) -> u64 {
        digit_count(&self.unscaled)
    }

    /// Power of ten of the leading digit: `digits - 1 - scale`.
    #[inline]
    pub fn adjusted_exponent(&self) -> i64 {
        self.digits() as i64 - 1 - self.scale
    }

    /// -1, 0 or 1 depending on the sign.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.unscaled.is_negative() {
            -1
        } else if self.unscaled.is_zero() {
            0
        } else {
            1
        }
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Get absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.unscaled.abs(), self.scale)
    }

    /// Same value with every trailing zero of the unscaled part removed.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        self.clone().strip_trailing_zeros_to(i64::MIN)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to the precision of `mc`.
    ///
    /// Rounding only removes digits, so the scale moves towards the leading
    /// digit and the value's magnitude is kept.
    #[must_use]
    pub fn round(&self, mc: &MathContext) -> Self {
        Self::round_parts(self.unscaled.clone(), self.scale, mc, false)
    }

    /// Round `unscaled × 10^(-scale)` to `mc`.
    ///
    /// `sticky` marks a non-zero remainder already discarded below the last
    /// digit of `unscaled`; it only breaks ties and flags inexactness.
    fn round_parts(mut unscaled: BigInt, mut scale: i64, mc: &MathContext, sticky: bool) -> Self {
        let precision = u64::from(mc.precision());
        let mut digits = digit_count(&unscaled);

        if digits <= precision {
            if !sticky {
                return Self::from_parts(unscaled, scale);
            }
            // Widen so exactly one digit is dropped and the sticky bit lands below it
            let pad = precision + 1 - digits;
            unscaled *= pow10(pad);
            scale += pad as i64;
            digits = precision + 1;
        }

        let drop = digits - precision;
        let divisor = pow10(drop);
        let negative = unscaled.is_negative();
        let (mut quotient, remainder) = unscaled.div_rem(&divisor);

        let inexact = sticky || !remainder.is_zero();
        let twice = remainder.abs() * BigInt::from(2u8);
        let half_cmp = match twice.cmp(&divisor) {
            Ordering::Equal if sticky => Ordering::Greater,
            other => other,
        };

        if mc
            .rounding()
            .round_away(negative, quotient.is_odd(), half_cmp, inexact)
        {
            if negative {
                quotient -= BigInt::one();
            } else {
                quotient += BigInt::one();
            }
        }
        scale -= drop as i64;

        // Carry out of the top digit (999 -> 1000) leaves one digit too many
        if digit_count(&quotient) > precision {
            quotient /= BigInt::from(10u8);
            scale -= 1;
        }

        Self::from_parts(quotient, scale)
    }

    /// Drop trailing zeros while the scale stays at or above `preferred`.
    fn strip_trailing_zeros_to(mut self, preferred: i64) -> Self {
        let ten = BigInt::from(10u8);
        while self.scale > preferred && !self.unscaled.is_zero() {
            let (quotient, remainder) = self.unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            self.unscaled = quotient;
            self.scale -= 1;
        }
        self
    }

    /// Reject results whose scale left the representable range.
    fn in_range(self) -> NumericResult<Self> {
        bounded_scale(Some(self.scale))?;
        Ok(self)
    }

    /// Bring both operands to the larger scale.
    ///
    /// Callers keep the scale gap small: widening costs one digit per unit of
    /// difference.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Less => {
                let shift = other.scale.abs_diff(self.scale);
                (
                    &self.unscaled * pow10(shift),
                    other.unscaled.clone(),
                    other.scale,
                )
            },
            Ordering::Greater => {
                let shift = self.scale.abs_diff(other.scale);
                (
                    self.unscaled.clone(),
                    &other.unscaled * pow10(shift),
                    self.scale,
                )
            },
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product's scale is out of range.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = bounded_scale(self.scale.checked_add(rhs.scale))?;
        Ok(Self::from_parts(&self.unscaled * &rhs.unscaled, scale))
    }

    /// Exact integer power.
    ///
    /// # Errors
    /// Returns `Overflow` if the result's scale is out of range.
    pub fn checked_pow(&self, exponent: u32) -> NumericResult<Self> {
        let scale = bounded_scale(self.scale.checked_mul(i64::from(exponent)))?;
        Ok(Self::from_parts(
            num_traits::pow(self.unscaled.clone(), exponent as usize),
            scale,
        ))
    }

    /// Addition rounded to `mc`.
    ///
    /// An operand lying wholly below the rounding position of the other is
    /// replaced by a single unit of the same sign just under that position.
    /// The rounded sum is unchanged, and operands of very different
    /// magnitude never need to be widened digit by digit.
    #[must_use]
    pub fn add_ctx(&self, rhs: &Self, mc: &MathContext) -> Self {
        if rhs.is_zero() {
            return self.round(mc);
        }
        if self.is_zero() {
            return rhs.round(mc);
        }

        let (large, small) = if self.adjusted_exponent() >= rhs.adjusted_exponent() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // Below both the last digit of `large` and the last digit the rounded
        // sum can keep (one lower when a borrow shortens it)
        let floor = (-large.scale)
            .min(large.adjusted_exponent() - i64::from(mc.precision()))
            - 1;

        let (lhs, rhs, scale) = if small.adjusted_exponent() < floor {
            let stand_in = Self::from_parts(BigInt::from(small.signum()), 1 - floor);
            large.aligned(&stand_in)
        } else {
            large.aligned(small)
        };
        Self::round_parts(lhs + rhs, scale, mc, false)
    }

    /// Subtraction rounded to `mc`.
    #[must_use]
    pub fn sub_ctx(&self, rhs: &Self, mc: &MathContext) -> Self {
        self.add_ctx(&-rhs, mc)
    }

    /// Multiplication rounded to `mc`.
    ///
    /// # Errors
    /// Returns `Overflow` if the product's scale is out of range.
    pub fn mul_ctx(&self, rhs: &Self, mc: &MathContext) -> NumericResult<Self> {
        Ok(self.checked_mul(rhs)?.round(mc))
    }

    /// Division rounded to `mc`.
    ///
    /// Non-terminating quotients are rounded, never rejected. Trailing zeros
    /// are stripped down to the preferred scale `self.scale - rhs.scale`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, `Overflow` if the
    /// quotient's scale is out of range.
    pub fn div_ctx(&self, rhs: &Self, mc: &MathContext) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let preferred = bounded_scale(self.scale.checked_sub(rhs.scale))?;
        if self.is_zero() {
            return Ok(Self::from_parts(BigInt::zero(), preferred));
        }

        // Enough dividend digits that the quotient has at least precision + 1
        let precision = i64::from(mc.precision());
        let lhs_digits = digit_count(&self.unscaled) as i64;
        let rhs_digits = digit_count(&rhs.unscaled) as i64;
        let shift = (precision + 1 + rhs_digits - lhs_digits).max(0);

        let dividend = &self.unscaled * pow10(shift as u64);
        let (quotient, remainder) = dividend.div_rem(&rhs.unscaled);

        let rounded = Self::round_parts(quotient, preferred + shift, mc, !remainder.is_zero());
        rounded.strip_trailing_zeros_to(preferred).in_range()
    }

    /// Square root rounded to `mc`.
    ///
    /// Trailing zeros are stripped down to the preferred scale `scale / 2`.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` if the value is negative, `Overflow` if
    /// the root's scale is out of range.
    pub fn sqrt(&self, mc: &MathContext) -> NumericResult<Self> {
        match self.signum() {
            -1 => return Err(NumericError::NegativeSquareRoot),
            0 => return Ok(Self::from_parts(BigInt::zero(), self.scale / 2)),
            _ => {},
        }

        // Integer root of unscaled × 10^extra needs at least precision + 1
        // digits, and scale + extra must be even to halve it.
        let precision = i64::from(mc.precision());
        let digits = digit_count(&self.unscaled) as i64;
        let mut extra = (2 * (precision + 1) - digits).max(0);
        if (self.scale + extra).rem_euclid(2) != 0 {
            extra += 1;
        }

        let radicand = &self.unscaled * pow10(extra as u64);
        let root = radicand.sqrt();
        let exact = &root * &root == radicand;

        let rounded = Self::round_parts(root, (self.scale + extra) / 2, mc, !exact);
        rounded.strip_trailing_zeros_to(self.scale / 2).in_range()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal if self.is_zero() => return Ordering::Equal,
            Ordering::Equal => {},
            unequal => return unequal,
        }

        // Leading exponents settle magnitudes without rescaling; when they
        // match, the scales differ by no more than the digit counts do
        let magnitude = match self.adjusted_exponent().cmp(&other.adjusted_exponent()) {
            Ordering::Equal => {
                let (lhs, rhs, _) = self.aligned(other);
                lhs.abs().cmp(&rhs.abs())
            },
            unequal => unequal,
        };

        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::from_parts(-self.unscaled, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::from_parts(-&self.unscaled, self.scale)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigDecimal({}, unscaled={}, scale={})",
            self, self.unscaled, self.scale
        )
    }
}

impl fmt::Display for BigDecimal {
    /// Plain notation while the scale is non-negative and the value has at
    /// most six zeros after the point; otherwise one leading digit and an
    /// exponent (`1.5E+3`, `1E-10`), so output length follows the digit
    /// count rather than the scale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let sign = if self.is_negative() { "-" } else { "" };
        let adjusted = self.adjusted_exponent();

        if self.scale < 0 || adjusted < -6 {
            let (lead, rest) = digits.split_at(1);
            let point = if rest.is_empty() { "" } else { "." };
            return write!(f, "{sign}{lead}{point}{rest}E{adjusted:+}");
        }

        let scale = self.scale as usize;
        if scale == 0 {
            write!(f, "{sign}{digits}")
        } else if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for BigDecimal {
    type Err = NumericError;

    /// Parse an exact decimal literal.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - ".5", "5." -> 0.5, 5
    /// - "1.5e3", "25E-2" -> 1500, 0.25
    ///
    /// Literals whose scale falls outside `±MAX_SCALE` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        // Split off exponent
        let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent: i64 = s[pos + 1..]
                    .parse()
                    .map_err(|_| NumericError::InvalidInput)?;
                (&s[..pos], exponent)
            },
            None => (s, 0),
        };

        // Check for sign
        let (is_negative, mantissa) = if let Some(rest) = mantissa.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = mantissa.strip_prefix('+') {
            (false, rest)
        } else {
            (false, mantissa)
        };

        // Split on decimal point
        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty()) || !all_digits(int_str) || !all_digits(frac_str)
        {
            return Err(NumericError::InvalidInput);
        }

        let scale = i64::try_from(frac_str.len())
            .ok()
            .and_then(|frac_len| frac_len.checked_sub(exponent));
        let scale = bounded_scale(scale).map_err(|_| NumericError::InvalidInput)?;

        let joined = format!("{int_str}{frac_str}");
        let mut unscaled =
            BigInt::parse_bytes(joined.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;
        if is_negative {
            unscaled = -unscaled;
        }

        Ok(Self::from_parts(unscaled, scale))
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigDecimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for BigDecimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<rust_decimal::Decimal> for BigDecimal {
    /// Exact: keeps the mantissa and scale of the `Decimal`.
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::from_parts(BigInt::from(value.mantissa()), i64::from(value.scale()))
    }
}

impl TryFrom<f64> for BigDecimal {
    type Error = NumericError;

    /// Convert through the shortest decimal string that round-trips the
    /// float, so `0.1` becomes exactly `0.1` rather than its binary expansion.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN and infinities.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        value.to_string().parse()
    }
}

impl TryFrom<f32> for BigDecimal {
    type Error = NumericError;

    /// Same as the `f64` conversion, through the shortest `f32` literal:
    /// `0.1f32` becomes `0.1`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN and infinities.
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        value.to_string().parse()
    }
}

// ============================================================================
// Tests
// ============================================================================
