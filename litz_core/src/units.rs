//! # Units and Rounding
//!
//! Conversions and spreadsheet-compatible rounding on [`Decimal`] values.
//!
//! The legacy design sheet rounds exactly once, at the output boundary, and
//! uses `ROUND` / `MROUND` semantics (ties away from zero). Everything in
//! the diameter and wall-thickness paths goes through these helpers so the
//! rounding behavior lives in one place.
//!
//! ## Units
//!
//! - Diameters and wall thicknesses: inches
//! - Conductor area: circular mils (CMA) and mm²
//! - Part numbers quote wall thickness in mils (0.001 in)
//!
//! ## Example
//!
//! ```rust
//! use litz_core::units::{mround, round3};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(round3(dec!(0.0914725)), dec!(0.091));
//! assert_eq!(round3(dec!(0.0005)), dec!(0.001));
//! assert_eq!(mround(dec!(0.00274), dec!(0.0005)), dec!(0.0025));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round to three decimal places (thousandths of an inch), ties away from zero.
pub fn round3(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest multiple of `multiple` (spreadsheet `MROUND`).
///
/// A zero multiple returns zero, matching the sheet.
pub fn mround(value: Decimal, multiple: Decimal) -> Decimal {
    if multiple.is_zero() {
        return Decimal::ZERO;
    }
    (value / multiple).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * multiple
}

/// Inches to millimeters (unrounded).
pub fn inches_to_mm(inches: Decimal) -> Decimal {
    inches * dec!(25.4)
}

/// Inches to mils, rounded to a whole mil.
pub fn inches_to_whole_mils(inches: Decimal) -> Decimal {
    (inches * dec!(1000)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Circular mils to square millimeters.
pub fn cma_to_mm2(cma: Decimal) -> Decimal {
    cma * dec!(0.000506707)
}
