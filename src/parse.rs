// ============================================================================
// Decimal Parsing
// Decimal and scientific-notation text into (coefficient, scale)
// ============================================================================

use crate::decimal::Decimal;
use crate::errors::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use std::str::FromStr;

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parse a decimal string, with optional scientific notation.
    ///
    /// Accepted grammar: `[+|-] digits ['.' digits] [('e'|'E') [+|-] digits]`.
    /// The fractional digit count becomes the mantissa scale and the final
    /// scale is `mantissa scale − exponent`, so `"1.23e+5"` parses to
    /// coefficient `123` at scale `-3` and `"-4.5E-2"` to `-45` at scale `3`.
    ///
    /// # Errors
    /// - `Format` for an empty string, a bare sign, multiple decimal
    ///   points, non-digit characters, or missing exponent digits.
    /// - `OutOfRange` for an exponent beyond `i64` or a final scale beyond
    ///   `i32`.
    fn from_str(input: &str) -> DecimalResult<Self> {
        if input.is_empty() {
            return Err(DecimalError::Format("empty string".into()));
        }

        let (negative, rest) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(marker) => {
                let exp_str = &rest[marker + 1..];
                parse_exponent(exp_str, input).map(|exp| (&rest[..marker], exp))?
            },
            None => (rest, 0i64),
        };

        let (unscaled_digits, mantissa_scale) = split_mantissa(mantissa, input)?;

        // The sign was stripped above, so only bare digits are acceptable
        // here; this also rejects a second sign buried in the mantissa.
        if unscaled_digits.is_empty() || !unscaled_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecimalError::Format(format!(
                "invalid characters in number part: {:?}",
                input
            )));
        }

        let mut unscaled = BigInt::parse_bytes(unscaled_digits.as_bytes(), 10)
            .ok_or_else(|| {
                DecimalError::Format(format!("invalid characters in number part: {:?}", input))
            })?;
        if negative {
            unscaled = -unscaled;
        }

        let final_scale = mantissa_scale - exponent;
        let scale = i32::try_from(final_scale).map_err(|_| {
            DecimalError::OutOfRange(format!(
                "scale {} does not fit in i32: {:?}",
                final_scale, input
            ))
        })?;

        Ok(Decimal::from_bigint(unscaled, scale))
    }
}

/// Validate and parse the digit string following an `e`/`E` marker.
fn parse_exponent(exp_str: &str, input: &str) -> DecimalResult<i64> {
    if exp_str.is_empty() {
        return Err(DecimalError::Format(format!(
            "missing exponent after 'e' in {:?}",
            input
        )));
    }

    let digits = exp_str
        .strip_prefix(['+', '-'])
        .unwrap_or(exp_str)
        .as_bytes();
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(DecimalError::Format(format!(
            "invalid exponent in scientific notation: {:?}",
            input
        )));
    }

    // Characters are already known-valid, so a parse failure here can only
    // mean the magnitude does not fit.
    exp_str
        .parse::<i64>()
        .map_err(|_| DecimalError::OutOfRange(format!("exponent out of i64 range: {:?}", input)))
}

/// Split the mantissa on its decimal point; returns the concatenated digit
/// string and the number of fractional digits.
fn split_mantissa(mantissa: &str, input: &str) -> DecimalResult<(String, i64)> {
    match mantissa.split_once('.') {
        None => Ok((mantissa.to_owned(), 0)),
        Some((integer_part, fractional_part)) => {
            if fractional_part.contains('.') {
                return Err(DecimalError::Format(format!(
                    "multiple decimal points in {:?}",
                    input
                )));
            }
            // A trailing point ("123.") carries no fractional digits.
            if fractional_part.is_empty() {
                return Ok((integer_part.to_owned(), 0));
            }
            if !fractional_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DecimalError::Format(format!(
                    "invalid character in fractional part: {:?}",
                    input
                )));
            }
            let mut digits = String::with_capacity(integer_part.len() + fractional_part.len());
            digits.push_str(integer_part);
            digits.push_str(fractional_part);
            Ok((digits, fractional_part.len() as i64))
        },
    }
}

impl Decimal {
    /// Parse a decimal from raw bytes; the bytes are decoded as UTF-8 and
    /// treated exactly like text input.
    ///
    /// # Errors
    /// Everything [`FromStr`] reports, plus `Format` for non-UTF-8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> DecimalResult<Self> {
        if bytes.is_empty() {
            return Err(DecimalError::Format("empty bytes".into()));
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|_| DecimalError::Format("input bytes are not valid UTF-8".into()))?;
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DecimalResult<Decimal> {
        s.parse()
    }

    #[test]
    fn test_parse_valid() {
        // (input, coefficient, scale)
        let cases = [
            ("0", "0", 0),
            ("123", "123", 0),
            ("-123", "-123", 0),
            ("+123", "123", 0),
            ("123.45", "12345", 2),
            ("-123.45", "-12345", 2),
            ("123.", "123", 0),
            (".5", "5", 1),
            ("0.123", "123", 3),
            ("1.23e+2", "123", 0),
            ("-1.23e-2", "-123", 4),
            ("1.23e+5", "123", -3),
            ("-4.5E-2", "-45", 3),
            ("1.23e+100", "123", -98),
            ("1.23e-100", "123", 102),
            ("000123.45", "12345", 2),
            ("123.450", "123450", 3),
            ("0.0", "0", 1),
            ("123.e+5", "123", -5),
        ];
        for (input, want_unscaled, want_scale) in cases {
            let d = parse(input).unwrap_or_else(|e| panic!("parse({:?}) failed: {}", input, e));
            assert_eq!(d.unscaled().to_string(), want_unscaled, "input {:?}", input);
            assert_eq!(d.scale(), want_scale, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_format_errors() {
        let bad = [
            "", "+", "-", ".", "123.45.67", "123.4x5", "abc", "1e", "1E", "1e+", "1e1.5",
            "--123", "1-2",
        ];
        for input in bad {
            assert!(
                matches!(parse(input), Err(DecimalError::Format(_))),
                "expected format error for {:?}, got {:?}",
                input,
                parse(input)
            );
        }
    }

    #[test]
    fn test_parse_exponent_out_of_range() {
        assert!(matches!(
            parse("1e99999999999999999999"),
            Err(DecimalError::OutOfRange(_))
        ));
        // Exponent fits i64 but the final scale cannot fit i32.
        assert!(matches!(
            parse("1e9999999999"),
            Err(DecimalError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_scale_at_i32_boundaries() {
        // 0 - 2147483648 is exactly i32::MIN and still parses.
        let d = parse("1e2147483648").unwrap();
        assert_eq!(d.unscaled().to_string(), "1");
        assert_eq!(d.scale(), i32::MIN);

        // One further is out of range.
        assert!(matches!(
            parse("1e2147483649"),
            Err(DecimalError::OutOfRange(_))
        ));

        let d = parse("1e-2147483647").unwrap();
        assert_eq!(d.scale(), i32::MAX);
    }

    #[test]
    fn test_parse_huge_coefficient() {
        let d = parse("123456789012345678901234567890.5").unwrap();
        assert_eq!(d.unscaled().to_string(), "1234567890123456789012345678905");
        assert_eq!(d.scale(), 1);
    }

    #[test]
    fn test_from_bytes() {
        let cases: [(&[u8], &str, i32); 4] = [
            (b"123", "123", 0),
            (b"-123.45", "-12345", 2),
            (b"1.23e+2", "123", 0),
            (b"0.00123", "123", 5),
        ];
        for (input, want_unscaled, want_scale) in cases {
            let d = Decimal::from_bytes(input).unwrap();
            assert_eq!(d.unscaled().to_string(), want_unscaled);
            assert_eq!(d.scale(), want_scale);
        }

        assert!(matches!(
            Decimal::from_bytes(b""),
            Err(DecimalError::Format(_))
        ));
        assert!(matches!(
            Decimal::from_bytes(b"abc"),
            Err(DecimalError::Format(_))
        ));
        assert!(matches!(
            Decimal::from_bytes(&[0xff, 0xfe]),
            Err(DecimalError::Format(_))
        ));
    }
}
