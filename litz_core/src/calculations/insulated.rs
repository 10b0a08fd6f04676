//! # Insulated Litz Diameters
//!
//! Diameters of a bundle jacketed with one, two or three extruded layers.
//!
//! ## Procedure
//!
//! 1. Bare bundle `B = √strands × strand OD × packing factor` from the
//!    single-build strand OD reference, kept unrounded.
//! 2. Candidate wall from 6% of `B.nom`, rounded up to a half thousandth
//!    (double layers use half of it per layer), or the customer's requested
//!    wall when one is given.
//! 3. Minimum-wall rules for the material and stranded copper area raise
//!    the candidate if needed.
//! 4. `OD = B + 2 × layers × wall`, with a tolerance `δ` subtracted from min
//!    and added to max; rounded to thousandths last.
//!
//! `δ` is 0.002 in when the reference bundle is over 0.1 in, else 0.001 in.
//! Triple-layer parts take the reference from the triple-film bare bundle.
//!
//! ## Layer Ordering
//!
//! Nominal diameters satisfy `bare < single <= double < triple`. Single and
//! double often tie, since two half walls can equal one full wall after
//! stepping. The one exception to `single <= double` is FEP with stranded
//! copper in `[12405, 12828)` CMA, where the single-layer minimum wall
//! (0.010 in) is more than twice the double-layer one (0.002 in).
//!
//! ## Example
//!
//! ```rust
//! use litz_core::calculations::calculate_insulated_diameters;
//! use litz_core::tables::{InsulationLayers, InsulationType};
//! use rust_decimal_macros::dec;
//!
//! let single = calculate_insulated_diameters(
//!     36,
//!     InsulationType::Etfe,
//!     InsulationLayers::Single,
//!     "MW 79-C",
//!     200,
//!     dec!(1.155),
//! )
//! .unwrap();
//! assert_eq!(single.nom, dec!(0.102));
//! assert_eq!(single.wall_thickness_inches, Some(dec!(0.0055)));
//! assert_eq!(single.part_number, "SXXL200/36TX-6(MW79)");
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::bare::calculate_bare_diameters;
use super::construction::stranded_copper_area;
use super::{sqrt_strands, DiameterResult};
use crate::errors::{LitzError, LitzResult};
use crate::part_number::insulated_part_number;
use crate::rules::calculate_required_wall_thickness;
use crate::tables::{strand_od_reference, FilmType, InsulationLayers, InsulationType};
use crate::units::{inches_to_mm, mround, round3};

/// Wall as a fraction of the bare bundle diameter
const WALL_FRACTION: Decimal = dec!(0.06);

/// Wall thickness increment
const WALL_STEP: Decimal = dec!(0.0005);

/// Bundles larger than this get the wider tolerance
const TOLERANCE_THRESHOLD: Decimal = dec!(0.1);

const NARROW_TOLERANCE: Decimal = dec!(0.001);
const WIDE_TOLERANCE: Decimal = dec!(0.002);

/// Round a raw wall to a half-thousandth step, never below the raw value
/// when three-place rounding would undershoot.
fn step_wall(raw: Decimal) -> Decimal {
    let r3 = round3(raw);
    if r3 < raw {
        r3 + WALL_STEP
    } else {
        mround(raw, WALL_STEP)
    }
}

/// Per-layer wall of a double jacket, from the full raw wall.
fn double_layer_wall(raw: Decimal) -> Decimal {
    let half = raw / dec!(2);
    let r3 = round3(half);
    if r3 < half {
        return r3 + WALL_STEP;
    }
    let stepped = mround(half, WALL_STEP);
    if stepped < half {
        r3
    } else {
        stepped
    }
}

fn candidate_wall(raw: Decimal, layers: InsulationLayers) -> Decimal {
    match layers {
        InsulationLayers::Single | InsulationLayers::Triple => step_wall(raw),
        InsulationLayers::Double => double_layer_wall(raw),
    }
}

fn tolerance(reference_nom: Decimal) -> Decimal {
    if reference_nom > TOLERANCE_THRESHOLD {
        WIDE_TOLERANCE
    } else {
        NARROW_TOLERANCE
    }
}

/// Diameters, wall thickness and part number of an insulated construction.
pub fn calculate_insulated_diameters(
    wire_awg: u32,
    insulation: InsulationType,
    layers: InsulationLayers,
    magnet_wire_grade: &str,
    strand_count: u32,
    packing_factor: Decimal,
) -> LitzResult<DiameterResult> {
    insulated_diameters(
        wire_awg,
        insulation,
        layers,
        magnet_wire_grade,
        strand_count,
        packing_factor,
        None,
    )
}

/// Like [`calculate_insulated_diameters`], starting from a requested
/// per-layer wall. The minimum-wall rules still raise it.
pub fn calculate_insulated_diameters_with_wall(
    wire_awg: u32,
    insulation: InsulationType,
    layers: InsulationLayers,
    magnet_wire_grade: &str,
    strand_count: u32,
    packing_factor: Decimal,
    requested_wall_in: Decimal,
) -> LitzResult<DiameterResult> {
    insulated_diameters(
        wire_awg,
        insulation,
        layers,
        magnet_wire_grade,
        strand_count,
        packing_factor,
        Some(requested_wall_in),
    )
}

fn insulated_diameters(
    wire_awg: u32,
    insulation: InsulationType,
    layers: InsulationLayers,
    magnet_wire_grade: &str,
    strand_count: u32,
    packing_factor: Decimal,
    requested_wall_in: Option<Decimal>,
) -> LitzResult<DiameterResult> {
    let od = strand_od_reference(wire_awg)?;
    let scale = sqrt_strands(strand_count)? * packing_factor;
    let (bare_min, bare_nom, bare_max) = (scale * od.min, scale * od.nom, scale * od.max);

    let candidate = match requested_wall_in {
        Some(requested) => requested,
        None => candidate_wall(bare_nom * WALL_FRACTION, layers),
    };
    let copper = stranded_copper_area(strand_count, wire_awg)?;
    let wall = calculate_required_wall_thickness(insulation, copper, candidate, layers);

    let reference_nom = match layers {
        InsulationLayers::Triple => {
            match calculate_bare_diameters(
                strand_count,
                wire_awg,
                packing_factor,
                magnet_wire_grade,
                FilmType::Triple,
            ) {
                Ok(triple_film) => triple_film.nom,
                Err(LitzError::FilmUnavailable { .. }) => bare_nom,
                Err(e) => return Err(e),
            }
        }
        _ => bare_nom,
    };
    let delta = tolerance(reference_nom);
    let build = dec!(2) * Decimal::from(layers.count()) * wall;

    debug!(
        strand_count,
        wire_awg,
        layers = layers.count(),
        %insulation,
        %candidate,
        %wall,
        "insulated wall resolved"
    );

    Ok(DiameterResult {
        min: round3(bare_min + build - delta),
        nom: round3(bare_nom + build),
        max: round3(bare_max + build + delta),
        part_number: insulated_part_number(
            layers,
            strand_count,
            wire_awg,
            insulation,
            wall,
            magnet_wire_grade,
        ),
        wall_thickness_inches: Some(wall),
        wall_thickness_mm: Some(round3(inches_to_mm(wall))),
    })
}
