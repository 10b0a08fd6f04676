//! Manufacturing capability warnings and construction advisories.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{calculate_required_wall_thickness, MIN_COPPER_AREA_CMA};
use crate::tables::{InsulationLayers, InsulationType};

pub const CONSULT_SMALL_CONDUCTOR: &str = "CONSULT RUBADUE ENGINEERING TO VERIFY MANUFACTURING CAPABILITY.";

pub const CONSULT_WALL_THICKNESS: &str =
    "CONSULT RUBADUE ENGINEERING TO VERIFY MANUFACTURING CAPABILITY ON THIS WALL THICKNESS.";

pub const CONFIRM_FINE_STRANDS: &str =
    "FOR STRAND SIZES SMALLER THAN 48 AWG, PLEASE CONFIRM FINAL CONSTRUCTION WITH RUBADUE ENGINEERING.";

pub const CONSULT_COARSE_STRANDS: &str = "CONSULT RUBADUE ENGINEERING.";

/// Thinnest single-layer wall the extrusion line runs
const MIN_SINGLE_LAYER_WALL: Decimal = dec!(0.0015);

/// Manufacturing warnings for an insulated construction.
///
/// A requested wall the minimum-wall rules would raise, or a single-layer
/// wall under 0.0015 in, needs engineering review. Both the small-conductor
/// and the wall warnings can appear together.
pub fn check_manufacturing_capability(
    copper_area_cma: Decimal,
    insulation: InsulationType,
    requested_wall_in: Option<Decimal>,
    layers: InsulationLayers,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if copper_area_cma < MIN_COPPER_AREA_CMA {
        warnings.push(CONSULT_SMALL_CONDUCTOR.to_string());
    }

    if let Some(requested) = requested_wall_in {
        let required =
            calculate_required_wall_thickness(insulation, copper_area_cma, requested, layers);
        let raised = required > requested;
        let too_thin = layers == InsulationLayers::Single && required < MIN_SINGLE_LAYER_WALL;
        if raised || too_thin {
            warnings.push(CONSULT_WALL_THICKNESS.to_string());
        }
    }

    warnings
}

/// Advisories that depend only on strand count and gauge.
pub fn check_construction_advisories(strand_count: u32, wire_awg: u32) -> Vec<String> {
    let mut advisories = Vec::new();
    if wire_awg > 49 {
        advisories.push(CONFIRM_FINE_STRANDS.to_string());
    }
    if wire_awg < 23 && strand_count > 8 {
        advisories.push(CONSULT_COARSE_STRANDS.to_string());
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_conductor_keeps_evaluating() {
        let warnings = check_manufacturing_capability(
            dec!(5),
            InsulationType::Fep,
            Some(dec!(0.001)),
            InsulationLayers::Single,
        );
        assert_eq!(warnings, vec![CONSULT_SMALL_CONDUCTOR, CONSULT_WALL_THICKNESS]);
    }

    #[test]
    fn test_wall_raised_by_rules() {
        let warnings = check_manufacturing_capability(
            dec!(4900),
            InsulationType::Fep,
            Some(dec!(0.002)),
            InsulationLayers::Single,
        );
        assert_eq!(warnings, vec![CONSULT_WALL_THICKNESS]);

        let warnings = check_manufacturing_capability(
            dec!(4900),
            InsulationType::Fep,
            Some(dec!(0.003)),
            InsulationLayers::Single,
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_double_layer_thin_wall_is_fine() {
        let warnings = check_manufacturing_capability(
            dec!(4900),
            InsulationType::Etfe,
            Some(dec!(0.001)),
            InsulationLayers::Double,
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_no_wall() {
        let warnings = check_manufacturing_capability(
            dec!(4900),
            InsulationType::Etfe,
            None,
            InsulationLayers::Triple,
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_advisories() {
        assert_eq!(check_construction_advisories(100, 50), vec![CONFIRM_FINE_STRANDS]);
        assert!(check_construction_advisories(100, 49).is_empty());
        assert_eq!(check_construction_advisories(9, 22), vec![CONSULT_COARSE_STRANDS]);
        assert!(check_construction_advisories(8, 22).is_empty());
        assert!(check_construction_advisories(9, 23).is_empty());
    }
}
