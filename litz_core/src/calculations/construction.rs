//! # Litz Construction
//!
//! Turns a strand count, gauge and construction type into a complete
//! construction record: operation count, packing and take-up factors,
//! copper cross-section and the equivalent solid gauge.
//!
//! ## Example
//!
//! ```rust
//! use litz_core::calculations::construction::calculate_litz_construction;
//! use litz_core::tables::LitzType;
//! use rust_decimal_macros::dec;
//!
//! let c = calculate_litz_construction(200, 36, LitzType::Type1, "MW 79-C").unwrap();
//! assert!(c.is_valid);
//! assert_eq!(c.number_of_operations, 2);
//! assert_eq!(c.total_copper_area_cma, dec!(5000));
//! assert_eq!(c.equivalent_awg, "14 AWG");
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strands::{calculate_operations, validate_strand_count};
use crate::errors::LitzResult;
use crate::tables::{awg_spec, awg_specs, construction_factors, LitzType};
use crate::units::cma_to_mm2;

/// Type 1 rope constructions are only tabulated up to three operations
const TYPE1_MAX_OPERATIONS: u32 = 3;

const TYPE1_OPERATIONS_MESSAGE: &str =
    "CONSULT RUBADUE ENGINEERING FOR TYPE 1 LITZ CONSTRUCTIONS REQUIRING 4+ OPERATIONS.";

/// A resolved litz construction.
///
/// Invalid constructions carry zeroed numerics, an empty equivalent gauge
/// and the reason in `validation_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitzConstruction {
    pub total_strands: u32,
    pub wire_awg: u32,
    pub litz_type: LitzType,
    pub number_of_operations: u32,
    pub packing_factor: Decimal,
    pub take_up_factor: Decimal,
    /// Circular mils, from the nominal strand diameter
    pub total_copper_area_cma: Decimal,
    pub total_copper_area_mm2: Decimal,
    /// e.g. "14 AWG"; empty when coarser than the reference table
    pub equivalent_awg: String,
    pub is_valid: bool,
    pub validation_message: String,
}

impl LitzConstruction {
    fn invalid(total_strands: u32, wire_awg: u32, litz_type: LitzType, message: String) -> Self {
        LitzConstruction {
            total_strands,
            wire_awg,
            litz_type,
            number_of_operations: 0,
            packing_factor: Decimal::ZERO,
            take_up_factor: Decimal::ZERO,
            total_copper_area_cma: Decimal::ZERO,
            total_copper_area_mm2: Decimal::ZERO,
            equivalent_awg: String::new(),
            is_valid: false,
            validation_message: message,
        }
    }
}

/// Validate and resolve a construction.
///
/// An unbuildable strand count, or a Type 1 construction needing four or
/// more operations, is returned as an invalid record. Errors are reserved
/// for gauges missing from the reference tables.
///
/// `_magnet_wire_grade` does not influence the construction; it is taken so
/// callers can pass the same parameter set to every calculator.
pub fn calculate_litz_construction(
    total_strands: u32,
    wire_awg: u32,
    litz_type: LitzType,
    _magnet_wire_grade: &str,
) -> LitzResult<LitzConstruction> {
    let validation = validate_strand_count(total_strands, wire_awg);
    if !validation.is_valid {
        return Ok(LitzConstruction::invalid(
            total_strands,
            wire_awg,
            litz_type,
            validation.message,
        ));
    }

    let operations = calculate_operations(total_strands, wire_awg);
    if litz_type == LitzType::Type1 && operations > TYPE1_MAX_OPERATIONS {
        debug!(total_strands, wire_awg, operations, "Type 1 construction over operation limit");
        return Ok(LitzConstruction::invalid(
            total_strands,
            wire_awg,
            litz_type,
            TYPE1_OPERATIONS_MESSAGE.to_string(),
        ));
    }

    let factors = construction_factors(litz_type, operations, Some(wire_awg))?;
    let cma = calculate_total_copper_area_cma(total_strands, wire_awg)?;

    debug!(
        total_strands,
        wire_awg,
        operations,
        packing_factor = %factors.packing_factor,
        "construction resolved"
    );

    Ok(LitzConstruction {
        total_strands,
        wire_awg,
        litz_type,
        number_of_operations: operations,
        packing_factor: factors.packing_factor,
        take_up_factor: factors.take_up_factor,
        total_copper_area_cma: cma,
        total_copper_area_mm2: calculate_total_copper_area_mm2(cma),
        equivalent_awg: calculate_equivalent_awg(cma),
        is_valid: true,
        validation_message: validation.message,
    })
}

/// Total copper area in circular mils: `strands × (d × 1000)²`.
pub fn calculate_total_copper_area_cma(strand_count: u32, wire_awg: u32) -> LitzResult<Decimal> {
    let mils = awg_spec(wire_awg)?.diameter_in * dec!(1000);
    Ok(Decimal::from(strand_count) * mils * mils)
}

/// Circular mils to mm².
pub fn calculate_total_copper_area_mm2(cma: Decimal) -> Decimal {
    cma_to_mm2(cma)
}

/// Copper area credited to a stranded conductor, used by the wall rules.
pub fn stranded_copper_area(strand_count: u32, wire_awg: u32) -> LitzResult<Decimal> {
    Ok(Decimal::from(strand_count) * awg_spec(wire_awg)?.stranded_cma)
}

/// Solid gauge with the same copper area, rounded toward the smaller wire.
///
/// Returns `""` above the largest tabulated area and `"50 AWG"` below the
/// smallest.
pub fn calculate_equivalent_awg(cma: Decimal) -> String {
    let mut rows: Vec<_> = awg_specs().collect();
    rows.sort_by(|a, b| b.cma.cmp(&a.cma));

    let (Some(largest), Some(smallest)) = (rows.first(), rows.last()) else {
        return String::new();
    };
    if cma > largest.cma {
        return String::new();
    }
    if cma < smallest.cma {
        return format!("{} AWG", smallest.awg);
    }

    rows.iter()
        .find(|row| cma >= row.cma)
        .map(|row| format!("{} AWG", row.awg))
        .unwrap_or_default()
}
