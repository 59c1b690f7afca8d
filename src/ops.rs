// ============================================================================
// Arithmetic Operations
// Addition, subtraction, multiplication, division and numeric ordering
// ============================================================================

use crate::decimal::Decimal;
use crate::errors::{DecimalError, DecimalResult};
use crate::pow10::Pow10Cache;
use crate::rounding::RoundingMode;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// Add / Sub / Mul / Neg
// ============================================================================

impl Add for &Decimal {
    type Output = Decimal;

    /// Exact addition. Operands are aligned to the larger of the two
    /// scales (an exact upscale, no rounding), which is also the result's
    /// scale.
    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        let lhs = self.upscale(scale);
        let rhs = rhs.upscale(scale);
        Decimal::from_bigint(lhs.unscaled + rhs.unscaled, scale)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    /// Exact subtraction; alignment as in [`Add`].
    fn sub(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        let lhs = self.upscale(scale);
        let rhs = rhs.upscale(scale);
        Decimal::from_bigint(lhs.unscaled - rhs.unscaled, scale)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    /// Exact multiplication. Coefficients multiply directly and the result
    /// scale is the sum of the operand scales; no precision is lost.
    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::from_bigint(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::from_bigint(-&self.unscaled, self.scale)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::from_bigint(-self.unscaled, self.scale)
    }
}

// ============================================================================
// Division
// ============================================================================

impl Decimal {
    /// Divide, producing a quotient at the requested `scale`.
    ///
    /// The mathematical quotient may not terminate, so the target scale and
    /// rounding mode are explicit: the dividend's coefficient is shifted by
    /// the scale difference, divided with truncation, and `mode` decides
    /// the final away-from-zero increment.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor.
    /// - `RoundingRequired` if `mode` is [`RoundingMode::Unnecessary`] and
    ///   the division is inexact.
    pub fn div(&self, rhs: &Decimal, scale: i32, mode: RoundingMode) -> DecimalResult<Decimal> {
        if rhs.unscaled.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        // Result coefficient is a·10^(scale − a.scale + b.scale) / b; a
        // negative shift multiplies the divisor instead.
        let shift = i64::from(scale) - i64::from(self.scale) + i64::from(rhs.scale);
        let exp = i32::try_from(shift.unsigned_abs()).map_err(|_| {
            DecimalError::OutOfRange(format!("quotient shift {} does not fit in i32", shift))
        })?;

        let power = Pow10Cache::shared().get(exp)?;
        let (dividend, divisor) = if shift >= 0 {
            (&self.unscaled * &*power, rhs.unscaled.clone())
        } else {
            (self.unscaled.clone(), &rhs.unscaled * &*power)
        };

        let negative = !dividend.is_zero() && dividend.sign() != divisor.sign();
        let divisor_abs = divisor.abs();
        let (mut quotient, remainder) = dividend.div_rem(&divisor);
        if mode.round_up(negative, &quotient, &remainder, &divisor_abs)? {
            quotient += if negative { -1 } else { 1 };
        }

        Ok(Decimal::from_bigint(quotient, scale))
    }

    /// Divide and also return the exact residue `self − quotient·rhs`,
    /// so `quotient·rhs + residue == self` holds for every rounding mode.
    ///
    /// # Errors
    /// As [`Decimal::div`].
    pub fn div_rem(
        &self,
        rhs: &Decimal,
        scale: i32,
        mode: RoundingMode,
    ) -> DecimalResult<(Decimal, Decimal)> {
        let quotient = self.div(rhs, scale, mode)?;
        let residue = self - &(&quotient * rhs);
        Ok((quotient, residue))
    }

    /// The residue of [`Decimal::div_rem`] alone.
    ///
    /// # Errors
    /// As [`Decimal::div`].
    pub fn rem(&self, rhs: &Decimal, scale: i32, mode: RoundingMode) -> DecimalResult<Decimal> {
        Ok(self.div_rem(rhs, scale, mode)?.1)
    }
}

// ============================================================================
// Numeric Ordering
// ============================================================================

impl Ord for Decimal {
    /// Numeric comparison at a common scale. `1.50` and `1.5` compare
    /// equal even though their coefficients differ.
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs_sign, rhs_sign) = (self.unscaled.sign(), other.unscaled.sign());
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        let scale = self.scale.max(other.scale);
        self.upscale(scale).unscaled.cmp(&other.upscale(scale).unscaled)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}
