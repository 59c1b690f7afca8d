// ============================================================================
// Decimal Value Type
// Arbitrary-precision signed decimal: unscaled magnitude plus base-10 scale
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use crate::pow10::Pow10Cache;
use crate::rounding::RoundingMode;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Arbitrary-precision signed decimal number.
///
/// Internally stores an unbounded integer coefficient and a base-10 scale;
/// the represented value is `unscaled × 10^(-scale)`. A positive scale puts
/// that many digits after the decimal point; a negative scale shifts the
/// magnitude the other way (`unscaled 123, scale -3` is `123000`).
///
/// Values are immutable: every operation allocates a fresh result and the
/// coefficient is exclusively owned, so no operation can mutate another
/// value's storage. Trailing zeros are preserved: `"1.50"` and `"1.5"`
/// parse to structurally different values at scales 2 and 1. Equality and
/// ordering compare the numeric value at a common scale, not the raw
/// fields; inspect [`unscaled`](Decimal::unscaled) and
/// [`scale`](Decimal::scale) for structural comparison.
///
/// # Example
/// ```
/// use exactdec::Decimal;
///
/// let price: Decimal = "123.45".parse()?;
/// let qty = Decimal::new(567, 1); // 56.7
/// assert_eq!((price + qty).to_string(), "180.15");
/// # Ok::<(), exactdec::DecimalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) unscaled: BigInt,
    pub(crate) scale: i32,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a decimal from an `i64` coefficient and a scale.
    ///
    /// `Decimal::new(12345, 2)` is `123.45`; `Decimal::new(123, -3)` is
    /// `123000`.
    #[inline]
    pub fn new(unscaled: i64, scale: i32) -> Self {
        Self {
            unscaled: BigInt::from(unscaled),
            scale,
        }
    }

    /// Create a decimal from an arbitrary-precision coefficient and a scale.
    #[inline]
    pub fn from_bigint(unscaled: BigInt, scale: i32) -> Self {
        Self { unscaled, scale }
    }

    /// Zero at scale 0.
    #[inline]
    pub fn zero() -> Self {
        Self {
            unscaled: BigInt::zero(),
            scale: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled coefficient.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The base-10 scale.
    #[inline]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Check if the value is numerically zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.unscaled.sign() == Sign::Plus
    }

    /// Absolute value at the same scale.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            unscaled: self.unscaled.abs(),
            scale: self.scale,
        }
    }

    // ========================================================================
    // Rescale Engine
    // ========================================================================

    /// Produce an equivalent-or-rounded value at `target` scale.
    ///
    /// Raising the scale multiplies the coefficient by the matching power
    /// of ten and is always exact. Lowering it divides with truncation and
    /// lets `mode` decide whether the quotient's magnitude is incremented
    /// away from zero; the increment carries the value's sign.
    ///
    /// # Errors
    /// - `RoundingRequired` if `mode` is [`RoundingMode::Unnecessary`] and
    ///   the downscale is inexact.
    /// - `OutOfRange` if the gap between the scales needs a power of ten
    ///   whose exponent does not fit in `i32`.
    pub fn rescale(&self, target: i32, mode: RoundingMode) -> DecimalResult<Self> {
        if target == self.scale {
            return Ok(self.clone());
        }

        // The gap between two i32 scales can itself exceed i32, so widen
        // before converting to a cache exponent.
        let gap = i64::from(self.scale) - i64::from(target);
        let exp = i32::try_from(gap.abs()).map_err(|_| {
            DecimalError::OutOfRange(format!(
                "rescale from scale {} to {} needs a power of ten beyond i32",
                self.scale, target
            ))
        })?;

        if gap < 0 {
            let multiplier = Pow10Cache::shared().get(exp)?;
            return Ok(Self {
                unscaled: &self.unscaled * &*multiplier,
                scale: target,
            });
        }

        let divisor = Pow10Cache::shared().get(exp)?;
        let (mut quotient, remainder) = self.unscaled.div_rem(&divisor);
        if mode.round_up(self.is_negative(), &quotient, &remainder, &divisor)? {
            quotient += self.increment();
        }
        Ok(Self {
            unscaled: quotient,
            scale: target,
        })
    }

    /// Exact scale raise used by addition, subtraction and comparison to
    /// align operands on the larger of their scales. Never rounds.
    ///
    /// Panics if the gap between the scales exceeds `i32`: the aligned
    /// coefficient would need billions of digits, and the infallible
    /// operator impls have no error channel for it.
    pub(crate) fn upscale(&self, target: i32) -> Self {
        debug_assert!(target >= self.scale);
        if target == self.scale {
            return self.clone();
        }
        let exp = i32::try_from(i64::from(target) - i64::from(self.scale))
            .expect("scale alignment gap exceeds i32");
        let multiplier = Pow10Cache::shared()
            .get(exp)
            .expect("upscale exponent is non-negative");
        Self {
            unscaled: &self.unscaled * &*multiplier,
            scale: target,
        }
    }

    /// A unit step away from zero, matching the value's sign.
    #[inline]
    pub(crate) fn increment(&self) -> i32 {
        if self.is_negative() {
            -1
        } else {
            1
        }
    }
}

impl From<i32> for Decimal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::new(i64::from(value), 0)
    }
}

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    #[inline]
    fn from(value: u64) -> Self {
        Self {
            unscaled: BigInt::from(value),
            scale: 0,
        }
    }
}
