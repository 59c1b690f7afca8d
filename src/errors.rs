// ============================================================================
// Decimal Errors
// Error types for decimal construction, parsing and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on a [`Decimal`].
///
/// [`Decimal`]: crate::Decimal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Input text is not a valid decimal number
    Format(String),
    /// An exponent or scale does not fit its integer type
    OutOfRange(String),
    /// A caller-supplied argument violates the operation's contract
    InvalidArgument(String),
    /// `RoundingMode::Unnecessary` was requested but the division was inexact
    RoundingRequired,
    /// Input value is outside the representable domain (NaN, infinity)
    Domain(String),
    /// Attempted division by zero
    DivisionByZero,
    /// A scanned database value has an unsupported type
    TypeMismatch(String),
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::Format(msg) => write!(f, "invalid decimal format: {}", msg),
            DecimalError::OutOfRange(msg) => write!(f, "value out of range: {}", msg),
            DecimalError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            DecimalError::RoundingRequired => {
                write!(f, "rounding required but RoundingMode::Unnecessary was specified")
            },
            DecimalError::Domain(msg) => write!(f, "domain error: {}", msg),
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::TypeMismatch(msg) => write!(f, "type mismatch: {}", msg),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
