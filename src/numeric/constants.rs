// ============================================================================
// Decimal Constants
// High-precision mathematical constants generated on demand
// ============================================================================

use super::big_decimal::{pow10, BigDecimal};
use super::context::MathContext;
use num_bigint::BigInt;
use num_traits::Zero;

/// Extra digits carried through the series before the final rounding.
const GUARD_DIGITS: u64 = 20;

/// π rounded to `mc`.
///
/// Uses Machin's formula `π = 16·atan(1/5) − 4·atan(1/239)` evaluated in
/// fixed-point integer arithmetic. Cost grows with the precision, so callers
/// that need π repeatedly should keep the result.
///
/// # Example
/// ```
/// use precise_circle::numeric::{pi, MathContext};
///
/// assert_eq!(pi(&MathContext::DECIMAL32).to_string(), "3.141593");
/// ```
pub fn pi(mc: &MathContext) -> BigDecimal {
    let working_digits = u64::from(mc.precision()) + GUARD_DIGITS;
    let unity = pow10(working_digits);

    let pi = arctan_inverse(5, &unity) * BigInt::from(16u8)
        - arctan_inverse(239, &unity) * BigInt::from(4u8);

    BigDecimal::from_parts(pi, working_digits as i64).round(mc)
}

/// atan(1/x) scaled by `unity`, via the Gregory series.
fn arctan_inverse(x: u32, unity: &BigInt) -> BigInt {
    let x = BigInt::from(x);
    let x_squared = &x * &x;

    // unity / x^(2k+1)
    let mut power = unity / &x;
    let mut sum = power.clone();
    let mut k: u32 = 1;

    loop {
        power /= &x_squared;
        if power.is_zero() {
            break;
        }
        let term = &power / BigInt::from(2 * k + 1);
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }

    sum
}
