// ============================================================================
// Float / Rational Conversion
// Exact rationals (and through them binary floats) into Decimal
// ============================================================================

use crate::decimal::Decimal;
use crate::errors::{DecimalError, DecimalResult};
use crate::pow10::Pow10Cache;
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Fractional digits used when converting an `f64`. Enough to express the
/// exact decimal expansion relevant to a 64-bit binary float's precision.
const F64_CONVERSION_PRECISION: i32 = 64;

impl Decimal {
    /// Convert an exact rational into a decimal with `precision` fractional
    /// digits, rounding a non-terminating expansion with `mode`.
    ///
    /// # Errors
    /// - `InvalidArgument` for a negative precision.
    /// - `RoundingRequired` if `mode` is [`RoundingMode::Unnecessary`] and
    ///   the expansion does not terminate within `precision` digits.
    pub fn from_rat(
        value: &BigRational,
        precision: i32,
        mode: RoundingMode,
    ) -> DecimalResult<Self> {
        if precision < 0 {
            return Err(DecimalError::InvalidArgument(format!(
                "precision must be non-negative, got {}",
                precision
            )));
        }

        if value.numer().is_zero() {
            return Ok(Decimal::from_bigint(BigInt::zero(), precision));
        }

        // An exact integer at precision zero needs no division at all.
        if precision == 0 && value.is_integer() {
            return Ok(Decimal::from_bigint(value.numer().clone(), 0));
        }

        // Shift the numerator so the integer quotient carries `precision`
        // fractional digits, then let the rounding policy settle the rest.
        // BigRational keeps its denominator positive, so the value's sign
        // is the numerator's.
        let negative = value.numer().is_negative();
        let shifted = value.numer() * &*Pow10Cache::shared().get(precision)?;
        let (mut quotient, remainder) = shifted.div_rem(value.denom());
        if mode.round_up(negative, &quotient, &remainder, value.denom())? {
            quotient += if negative { -1 } else { 1 };
        }

        Ok(Decimal::from_bigint(quotient, precision))
    }

    /// Convert a binary floating-point value exactly.
    ///
    /// The float is first expanded to the rational it actually represents
    /// (its binary fraction, not a decimal approximation) and then reduced
    /// to 64 fractional digits with half-to-even rounding, which round-trips
    /// every finite `f64` through its decimal string.
    ///
    /// # Errors
    /// `Domain` for NaN or infinite input.
    pub fn from_f64(value: f64) -> DecimalResult<Self> {
        if value.is_nan() {
            return Err(DecimalError::Domain("cannot convert NaN".into()));
        }
        if value.is_infinite() {
            return Err(DecimalError::Domain("cannot convert infinity".into()));
        }
        if value == 0.0 {
            return Ok(Decimal::zero());
        }

        let rat = BigRational::from_float(value).ok_or_else(|| {
            DecimalError::Domain(format!("cannot express {} as a rational", value))
        })?;
        Self::from_rat(&rat, F64_CONVERSION_PRECISION, RoundingMode::HalfEven)
    }
}
