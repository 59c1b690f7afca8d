// ============================================================================
// Decimal Formatting
// Canonical text rendering: [sign] digits ['.' digits], never scientific
// ============================================================================

use crate::decimal::Decimal;
use std::fmt;

impl fmt::Display for Decimal {
    /// Render the canonical decimal form.
    ///
    /// Scale 0 emits the bare signed integer. A negative scale shifts the
    /// coefficient up by the matching power of ten and emits the resulting
    /// integer (a non-zero coefficient gains `|scale|` trailing zeros). A
    /// positive scale splits the coefficient's digits `scale` places from
    /// the right, zero-filling a short coefficient, so `Decimal::new(5, 1)`
    /// renders `"0.5"` and `Decimal::new(100000, 2)` renders `"1000.00"`.
    /// The sign appears exactly once.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale < 0 {
            // Multiplying by 10^|scale| just appends zeros in base 10, so
            // emit the digits directly; the widening also keeps an
            // i32::MIN scale from overflowing on negation.
            if self.is_zero() {
                return f.write_str("0");
            }
            if self.is_negative() {
                f.write_str("-")?;
            }
            f.write_str(&self.unscaled.magnitude().to_str_radix(10))?;
            for _ in 0..i64::from(self.scale).unsigned_abs() {
                f.write_str("0")?;
            }
            return Ok(());
        }

        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }

        if self.is_negative() {
            f.write_str("-")?;
        }

        let digits = self.unscaled.magnitude().to_str_radix(10);
        let scale = self.scale as usize;
        if digits.len() > scale {
            let split = digits.len() - scale;
            write!(f, "{}.{}", &digits[..split], &digits[split..])
        } else {
            // Coefficient shorter than the scale: integer part is "0" and
            // the fraction is left-filled up to scale digits.
            write!(f, "0.{:0>width$}", digits, width = scale)
        }
    }
}
