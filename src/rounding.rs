// ============================================================================
// Rounding Modes
// Tie-break and direction policy applied to inexact truncating divisions
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// Policy governing how the quotient of an inexact division is adjusted.
///
/// Every mode is a pure decision over the remainder of a truncating
/// division, the (positive) divisor, the truncated quotient and the sign of
/// the value being rounded. "Round up" always means incrementing the
/// quotient's magnitude away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Truncate toward zero
    Down,
    /// Round away from zero whenever the remainder is non-zero
    Up,
    /// Round toward positive infinity
    Ceiling,
    /// Round toward negative infinity
    Floor,
    /// Round to nearest; ties go away from zero
    HalfUp,
    /// Round to nearest; ties go toward zero
    HalfDown,
    /// Round to nearest; ties go to the even neighbor (bankers' rounding)
    HalfEven,
    /// Assert that no rounding is needed; error on any non-zero remainder
    Unnecessary,
}

impl RoundingMode {
    /// Decide whether the truncated quotient should be incremented in
    /// magnitude, away from zero.
    ///
    /// `negative` is the mathematical sign of the value being rounded (not
    /// the truncated quotient's sign, which collapses to zero for values in
    /// `(-1, 1)`). `divisor` is positive; `remainder` carries the dividend's
    /// sign as produced by truncating division.
    ///
    /// Half-way comparisons use exact integer arithmetic: `2·|remainder|`
    /// against `divisor`, so an odd divisor is never halved.
    ///
    /// # Errors
    /// `RoundingRequired` if the mode is [`RoundingMode::Unnecessary`] and
    /// the remainder is non-zero.
    pub fn round_up(
        self,
        negative: bool,
        quotient: &BigInt,
        remainder: &BigInt,
        divisor: &BigInt,
    ) -> DecimalResult<bool> {
        if remainder.is_zero() {
            return Ok(false);
        }

        let twice_remainder = remainder.magnitude() << 1u32;
        let half_cmp = twice_remainder.cmp(divisor.magnitude());

        let up = match self {
            RoundingMode::Down => false,
            RoundingMode::Up => true,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half_cmp != std::cmp::Ordering::Less,
            RoundingMode::HalfDown => half_cmp == std::cmp::Ordering::Greater,
            RoundingMode::HalfEven => match half_cmp {
                std::cmp::Ordering::Greater => true,
                // On an exact tie the truncated quotient's parity decides:
                // increment only when it is odd, landing on the even neighbor.
                std::cmp::Ordering::Equal => quotient.bit(0),
                std::cmp::Ordering::Less => false,
            },
            RoundingMode::Unnecessary => return Err(DecimalError::RoundingRequired),
        };
        Ok(up)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Down => "Down",
            RoundingMode::Up => "Up",
            RoundingMode::Ceiling => "Ceiling",
            RoundingMode::Floor => "Floor",
            RoundingMode::HalfUp => "HalfUp",
            RoundingMode::HalfDown => "HalfDown",
            RoundingMode::HalfEven => "HalfEven",
            RoundingMode::Unnecessary => "Unnecessary",
        };
        f.write_str(name)
    }
}
