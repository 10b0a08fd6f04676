//! # Litz Calculations
//!
//! Each calculator is a pure function over the reference tables:
//!
//! - [`strands`] - strand-count validation, bundling breakdown, nearby counts
//! - [`construction`] - factors, copper area, equivalent gauge
//! - [`bare`] - bare bundle diameters per film build
//! - [`served`] - nylon-served diameters over a bare bundle
//! - [`insulated`] - extruded-jacket diameters and wall thickness
//! - [`electrical`] - DC resistance, skin depth, N1 max
//!
//! All diameters are inches, rounded to thousandths only on the final value.

pub mod bare;
pub mod construction;
pub mod electrical;
pub mod insulated;
pub mod served;
pub mod strands;

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::errors::{LitzError, LitzResult};

pub use bare::calculate_bare_diameters;
pub use construction::{
    calculate_equivalent_awg, calculate_litz_construction, calculate_total_copper_area_cma,
    calculate_total_copper_area_mm2, stranded_copper_area, LitzConstruction,
};
pub use electrical::{calculate_electrical_properties, ElectricalProperties};
pub use insulated::{calculate_insulated_diameters, calculate_insulated_diameters_with_wall};
pub use served::{calculate_served_diameters, ServeType};
pub use strands::{
    calculate_operations, find_nearby_valid_counts, validate_strand_count, StrandValidationResult,
};

/// Min/nom/max outside diameter of a bundle, with its part number.
///
/// Bare and served bundles have no wall fields; insulated bundles always
/// carry both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterResult {
    pub min: Decimal,
    pub nom: Decimal,
    pub max: Decimal,
    pub part_number: String,
    pub wall_thickness_inches: Option<Decimal>,
    pub wall_thickness_mm: Option<Decimal>,
}

/// √strands, the bundle scaling term.
pub(crate) fn sqrt_strands(strand_count: u32) -> LitzResult<Decimal> {
    Decimal::from(strand_count)
        .sqrt()
        .ok_or_else(|| LitzError::internal(format!("square root of {} strands", strand_count)))
}
