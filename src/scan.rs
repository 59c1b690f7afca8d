// ============================================================================
// Database Scan Adapter
// Opaque scanned values (NULL / text / bytes) into Decimal
// ============================================================================

use crate::decimal::Decimal;
use crate::errors::{DecimalError, DecimalResult};

/// An opaque value as surfaced by a database driver's row scan.
///
/// Only textual representations carry a decimal; numeric driver types must
/// be rendered to text upstream so no binary float imprecision leaks in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanValue<'a> {
    /// SQL NULL
    Null,
    /// A text column value
    Text(&'a str),
    /// A raw byte column value
    Bytes(&'a [u8]),
    /// An integer column value (unsupported, see [`Decimal::from_scan`])
    Integer(i64),
    /// A floating-point column value (unsupported)
    Real(f64),
}

impl Decimal {
    /// Build a decimal from a scanned database value.
    ///
    /// `Null` maps to zero at scale 0. Text and bytes delegate to the
    /// parser, with failures wrapped in scan context.
    ///
    /// # Errors
    /// - Parser errors for malformed text or bytes.
    /// - `TypeMismatch` for integer or floating-point column values.
    pub fn from_scan(value: ScanValue<'_>) -> DecimalResult<Self> {
        match value {
            ScanValue::Null => Ok(Decimal::zero()),
            ScanValue::Text(text) => text.parse().map_err(with_scan_context),
            ScanValue::Bytes(bytes) => Decimal::from_bytes(bytes).map_err(with_scan_context),
            ScanValue::Integer(_) => Err(DecimalError::TypeMismatch(
                "cannot scan an integer column into Decimal; select it as text".into(),
            )),
            ScanValue::Real(_) => Err(DecimalError::TypeMismatch(
                "cannot scan a float column into Decimal; select it as text".into(),
            )),
        }
    }
}

/// Prefix message-bearing parse errors with the adapter's context.
fn with_scan_context(err: DecimalError) -> DecimalError {
    match err {
        DecimalError::Format(msg) => DecimalError::Format(format!("scan: {}", msg)),
        DecimalError::OutOfRange(msg) => DecimalError::OutOfRange(format!("scan: {}", msg)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_null_is_zero() {
        let d = Decimal::from_scan(ScanValue::Null).unwrap();
        assert_eq!(d.unscaled().to_string(), "0");
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_scan_text_and_bytes() {
        let cases: [(ScanValue<'_>, &str, i32); 5] = [
            (ScanValue::Text("123"), "123", 0),
            (ScanValue::Text("-123.45"), "-12345", 2),
            (ScanValue::Text("0.00123"), "123", 5),
            (ScanValue::Text("1.23e+2"), "123", 0),
            (ScanValue::Bytes(b"-123.45"), "-12345", 2),
        ];
        for (value, want_unscaled, want_scale) in cases {
            let d = Decimal::from_scan(value).unwrap();
            assert_eq!(d.unscaled().to_string(), want_unscaled);
            assert_eq!(d.scale(), want_scale);
        }
    }

    #[test]
    fn test_scan_wraps_parse_errors() {
        let err = Decimal::from_scan(ScanValue::Text("invalid")).unwrap_err();
        match err {
            DecimalError::Format(msg) => assert!(msg.starts_with("scan: "), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_scan_type_mismatch() {
        assert!(matches!(
            Decimal::from_scan(ScanValue::Integer(42)),
            Err(DecimalError::TypeMismatch(_))
        ));
        assert!(matches!(
            Decimal::from_scan(ScanValue::Real(1.5)),
            Err(DecimalError::TypeMismatch(_))
        ));
    }
}
