// ============================================================================
// exactdec
// Arbitrary-precision signed decimal arithmetic with explicit rounding
// ============================================================================

//! # exactdec
//!
//! An arbitrary-precision signed decimal number type for exact financial
//! and scientific computation.
//!
//! A [`Decimal`] is an unbounded integer coefficient plus a base-10 scale,
//! so values like `0.1` are represented exactly instead of as the nearest
//! binary fraction. Trailing zeros are preserved (`"1.50"` keeps scale 2);
//! equality and ordering compare numeric value at a common scale.
//!
//! ## Features
//!
//! - **Exact add/sub/mul**: operands align on the larger scale, products
//!   sum their scales; no precision is ever lost silently
//! - **Explicit division**: quotient scale and [`RoundingMode`] are always
//!   caller-chosen, since the mathematical result may not terminate
//! - **Eight rounding modes**: directed, half-way and assertion
//!   (`Unnecessary`) policies shared by rescaling, division and rational
//!   conversion
//! - **Exact float conversion**: an `f64` converts through the rational
//!   it actually represents, not a lossy decimal literal
//! - **Canonical text**: parses decimal and scientific notation, always
//!   renders plain `[sign] digits ['.' digits]`
//!
//! ## Example
//!
//! ```rust
//! use exactdec::{Decimal, RoundingMode};
//!
//! let price: Decimal = "123.45".parse()?;
//! let qty = Decimal::new(567, 1); // 56.7
//!
//! let total = &price + &qty;
//! assert_eq!(total.to_string(), "180.15");
//!
//! let third = Decimal::new(1, 0).div(&Decimal::new(3, 0), 2, RoundingMode::HalfEven)?;
//! assert_eq!(third.to_string(), "0.33");
//! # Ok::<(), exactdec::DecimalError>(())
//! ```

mod convert;
mod decimal;
mod errors;
mod format;
mod ops;
mod parse;
mod pow10;
mod rounding;
mod scan;
#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::Decimal;
pub use crate::errors::{DecimalError, DecimalResult};
pub use crate::pow10::Pow10Cache;
pub use crate::rounding::RoundingMode;
pub use crate::scan::ScanValue;

// Re-exports for convenience
pub mod prelude {
    pub use crate::{Decimal, DecimalError, DecimalResult, RoundingMode, ScanValue};
}
