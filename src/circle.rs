// ============================================================================
// Circle
// Center/radius circle with derived quantities in decimal arithmetic
// ============================================================================

use crate::errors::{CircleError, CircleResult};
use crate::numeric::{pi, BigDecimal, MathContext};
use crate::value::Value;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace, warn};

/// A circle given by its center and radius.
///
/// Only the center coordinates and the radius are stored. Diameter, area and
/// circumference are computed from the radius on read, and setting one of
/// them stores the radius it implies. The radius is never negative.
///
/// Every result is rounded to the [`MathContext`] fixed at construction, and
/// π is computed once at that precision and reused. To work at another
/// precision, build another circle.
///
/// A circle holds no locks; share it across threads behind your own
/// synchronization.
///
/// # Example
/// ```
/// use precise_circle::Circle;
///
/// let mut circle = Circle::new();
/// circle.set_coordinates(0, 0).unwrap();
/// circle.set_radius(5).unwrap();
///
/// assert_eq!(circle.diameter().unwrap().to_string(), "10");
/// assert_eq!(circle.compare_point_to_circle(5, 0).unwrap(), 0);
/// assert!(circle.compare_point_to_circle(100, 100).unwrap() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    context: MathContext,
    pi: BigDecimal,
    radius: BigDecimal,
    center_x: BigDecimal,
    center_y: BigDecimal,
}

impl Circle {
    /// Context used when none (or an invalid one) is supplied: 34 digits,
    /// half-even.
    pub const DEFAULT_CONTEXT: MathContext = MathContext::DECIMAL128;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Circle at the origin with radius zero and the default context.
    pub fn new() -> Self {
        Self::build(Self::DEFAULT_CONTEXT)
    }

    /// Circle at the origin with radius zero computing under `context`.
    ///
    /// `None` or a context that fails validation selects
    /// [`DEFAULT_CONTEXT`](Self::DEFAULT_CONTEXT).
    pub fn with_context(context: impl Into<Option<MathContext>>) -> Self {
        let context = match context.into() {
            Some(context) => match context.validate() {
                Ok(()) => context,
                Err(err) => {
                    warn!(%err, requested = %context, "invalid math context, using default");
                    Self::DEFAULT_CONTEXT
                },
            },
            None => Self::DEFAULT_CONTEXT,
        };
        Self::build(context)
    }

    fn build(context: MathContext) -> Self {
        let pi = pi(&context);
        debug!(%context, %pi, "circle created");

        Self {
            context,
            pi,
            radius: BigDecimal::zero(),
            center_x: BigDecimal::zero(),
            center_y: BigDecimal::zero(),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Precision context of this circle.
    #[inline]
    pub fn context(&self) -> &MathContext {
        &self.context
    }

    /// π at this circle's precision.
    #[inline]
    pub fn pi(&self) -> &BigDecimal {
        &self.pi
    }

    // ========================================================================
    // Center
    // ========================================================================

    /// X coordinate of the center.
    #[inline]
    pub fn center_x(&self) -> &BigDecimal {
        &self.center_x
    }

    /// Set the X coordinate of the center. Negative values are allowed.
    ///
    /// # Errors
    /// Returns `UnsupportedValue` or `MalformedLiteral` if `value` does not
    /// convert to a decimal.
    pub fn set_center_x(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let center_x = self.convert(value)?;
        trace!(%center_x, "center x set");
        self.center_x = center_x;
        Ok(())
    }

    /// Y coordinate of the center.
    #[inline]
    pub fn center_y(&self) -> &BigDecimal {
        &self.center_y
    }

    /// Set the Y coordinate of the center. Negative values are allowed.
    ///
    /// # Errors
    /// Returns `UnsupportedValue` or `MalformedLiteral` if `value` does not
    /// convert to a decimal.
    pub fn set_center_y(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let center_y = self.convert(value)?;
        trace!(%center_y, "center y set");
        self.center_y = center_y;
        Ok(())
    }

    /// Set both center coordinates, X first.
    ///
    /// Not atomic: if `y` fails to convert, the new X coordinate has already
    /// been stored.
    ///
    /// # Errors
    /// Same as [`set_center_x`](Self::set_center_x).
    pub fn set_coordinates(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> CircleResult<()> {
        self.set_center_x(x)?;
        self.set_center_y(y)
    }

    // ========================================================================
    // Radius and Derived Quantities
    // ========================================================================

    /// Radius.
    #[inline]
    pub fn radius(&self) -> &BigDecimal {
        &self.radius
    }

    /// Set the radius.
    ///
    /// # Errors
    /// Returns `Negative` for values below zero, or a conversion error. The
    /// radius is left unchanged on error.
    pub fn set_radius(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let radius = self.convert(value)?;
        check_non_negative(&radius, "radius")?;
        self.store_radius(radius);
        Ok(())
    }

    /// Diameter: `2r`.
    ///
    /// # Errors
    /// Returns `Arithmetic(Overflow)` if the result's scale is out of range.
    pub fn diameter(&self) -> CircleResult<BigDecimal> {
        Ok(self.radius.mul_ctx(&BigDecimal::from(2), &self.context)?)
    }

    /// Set the radius to `diameter / 2`.
    ///
    /// # Errors
    /// Returns `Negative` for values below zero, or a conversion error. The
    /// radius is left unchanged on error.
    pub fn set_diameter(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let diameter = self.convert(value)?;
        check_non_negative(&diameter, "diameter")?;
        let radius = diameter.div_ctx(&BigDecimal::from(2), &self.context)?;
        self.store_radius(radius);
        Ok(())
    }

    /// Area: `πr²`.
    ///
    /// # Errors
    /// Returns `Arithmetic(Overflow)` if the radius is so small or so large
    /// (beyond roughly `10^±1073741823`) that its square's scale is out of
    /// range.
    pub fn area(&self) -> CircleResult<BigDecimal> {
        let squared = self.radius.checked_pow(2)?;
        Ok(self.pi.mul_ctx(&squared, &self.context)?)
    }

    /// Set the radius to `sqrt(area / π)`.
    ///
    /// # Errors
    /// Returns `Negative` for values below zero, or a conversion error. The
    /// radius is left unchanged on error.
    pub fn set_area(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let area = self.convert(value)?;
        check_non_negative(&area, "area")?;
        let radius = area
            .div_ctx(&self.pi, &self.context)?
            .sqrt(&self.context)?;
        self.store_radius(radius);
        Ok(())
    }

    /// Circumference: `2πr`.
    ///
    /// # Errors
    /// Returns `Arithmetic(Overflow)` if the result's scale is out of range.
    pub fn circumference(&self) -> CircleResult<BigDecimal> {
        Ok(self.two_pi()?.mul_ctx(&self.radius, &self.context)?)
    }

    /// Set the radius to `circumference / 2π`.
    ///
    /// # Errors
    /// Returns `Negative` for values below zero, or a conversion error. The
    /// radius is left unchanged on error.
    pub fn set_circumference(&mut self, value: impl Into<Value>) -> CircleResult<()> {
        let circumference = self.convert(value)?;
        check_non_negative(&circumference, "circumference")?;
        let radius = circumference.div_ctx(&self.two_pi()?, &self.context)?;
        self.store_radius(radius);
        Ok(())
    }

    // ========================================================================
    // Point Queries
    // ========================================================================

    /// Euclidean distance from the center to `(x, y)`.
    ///
    /// Differences and the sum of squares are rounded to the circle's
    /// context; the squares themselves are exact.
    ///
    /// # Errors
    /// Returns a conversion error if `x` or `y` does not convert, or
    /// `Arithmetic(Overflow)` if a squared difference leaves the scale range.
    pub fn center_distance_to_point(
        &self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> CircleResult<BigDecimal> {
        let x = self.convert(x)?;
        let y = self.convert(y)?;

        let dx = x.sub_ctx(&self.center_x, &self.context);
        let dy = y.sub_ctx(&self.center_y, &self.context);
        let squared = dx
            .checked_pow(2)?
            .add_ctx(&dy.checked_pow(2)?, &self.context);

        Ok(squared.sqrt(&self.context)?)
    }

    /// Signed distance from the circle's edge to `(x, y)`: positive outside,
    /// negative inside, zero on the boundary.
    ///
    /// # Errors
    /// Same as [`center_distance_to_point`](Self::center_distance_to_point).
    pub fn distance_to_point(
        &self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> CircleResult<BigDecimal> {
        let distance = self.center_distance_to_point(x, y)?;
        Ok(distance.sub_ctx(&self.radius, &self.context))
    }

    /// Where `(x, y)` lies relative to the circle: `Less` inside, `Equal` on
    /// the boundary, `Greater` outside.
    ///
    /// # Errors
    /// Same as [`center_distance_to_point`](Self::center_distance_to_point).
    pub fn point_position(
        &self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> CircleResult<Ordering> {
        let distance = self.center_distance_to_point(x, y)?;
        Ok(distance.cmp(&self.radius))
    }

    /// -1 if `(x, y)` is strictly inside, 0 on the boundary, 1 outside.
    ///
    /// # Errors
    /// Same as [`center_distance_to_point`](Self::center_distance_to_point).
    pub fn compare_point_to_circle(
        &self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> CircleResult<i8> {
        let indicator = match self.point_position(x, y)? {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        Ok(indicator)
    }

    /// Whether `(x, y)` is inside the circle or on its boundary.
    ///
    /// # Errors
    /// Same as [`center_distance_to_point`](Self::center_distance_to_point).
    pub fn contains_point(&self, x: impl Into<Value>, y: impl Into<Value>) -> CircleResult<bool> {
        Ok(self.point_position(x, y)? != Ordering::Greater)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn convert(&self, value: impl Into<Value>) -> CircleResult<BigDecimal> {
        value.into().to_decimal(&self.context)
    }

    fn store_radius(&mut self, radius: BigDecimal) {
        trace!(%radius, "radius set");
        self.radius = radius;
    }

    fn two_pi(&self) -> CircleResult<BigDecimal> {
        Ok(self.pi.checked_mul(&BigDecimal::from(2))?)
    }
}

fn check_non_negative(value: &BigDecimal, field: &'static str) -> CircleResult<()> {
    if value.is_negative() {
        return Err(CircleError::Negative { field });
    }
    Ok(())
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle(center=({}, {}), radius={})",
            self.center_x, self.center_y, self.radius
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
