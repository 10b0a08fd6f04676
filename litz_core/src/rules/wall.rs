//! Minimum insulation wall thickness.
//!
//! | Layers | ETFE    | PFA     | FEP (by stranded CMA)                                        |
//! |--------|---------|---------|--------------------------------------------------------------|
//! | 1      | ≥0.0015 | ≥0.0015 | <1939: 0.002, <12405: 0.003, <24978: 0.010, else 0.012        |
//! | 2      | ≥0.001  | ≥0.0015 | <12828: 0.002, <24978: 0.005, else 0.006                      |
//! | 3      | ≥0.001  | ≥0.0015 | <12828: 0.002, else 0.004                                     |

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::{
    any_copper, at_least, below, first_firing, from_until, BandRule, CopperBand, ETFE, ETFE_OR_PFA,
    FEP, PFA,
};
use crate::tables::{InsulationLayers, InsulationType};

static WALL_RULES: Lazy<BTreeMap<InsulationLayers, Vec<BandRule<()>>>> = Lazy::new(|| {
    let min = |insulation: &'static [InsulationType], copper: CopperBand, wall: Decimal| {
        BandRule::new(insulation, copper, Some(wall), ())
    };
    BTreeMap::from([
        (
            InsulationLayers::Single,
            vec![
                min(ETFE_OR_PFA, any_copper(), dec!(0.0015)),
                min(FEP, below(dec!(1939)), dec!(0.002)),
                min(FEP, from_until(dec!(1939), dec!(12405)), dec!(0.003)),
                min(FEP, from_until(dec!(12405), dec!(24978)), dec!(0.01)),
                min(FEP, at_least(dec!(24978)), dec!(0.012)),
            ],
        ),
        (
            InsulationLayers::Double,
            vec![
                min(ETFE, any_copper(), dec!(0.001)),
                min(PFA, any_copper(), dec!(0.0015)),
                min(FEP, below(dec!(12828)), dec!(0.002)),
                min(FEP, from_until(dec!(12828), dec!(24978)), dec!(0.005)),
                min(FEP, at_least(dec!(24978)), dec!(0.006)),
            ],
        ),
        (
            InsulationLayers::Triple,
            vec![
                min(ETFE, any_copper(), dec!(0.001)),
                min(PFA, any_copper(), dec!(0.0015)),
                min(FEP, below(dec!(12828)), dec!(0.002)),
                min(FEP, at_least(dec!(12828)), dec!(0.004)),
            ],
        ),
    ])
});

/// Raise `wall` to the minimum the matching rule demands. Never lowers it.
///
/// ```rust
/// use litz_core::rules::calculate_required_wall_thickness;
/// use litz_core::tables::{InsulationLayers, InsulationType};
/// use rust_decimal_macros::dec;
///
/// let wall = calculate_required_wall_thickness(
///     InsulationType::Fep,
///     dec!(4900),
///     dec!(0.0015),
///     InsulationLayers::Single,
/// );
/// assert_eq!(wall, dec!(0.003));
/// ```
pub fn calculate_required_wall_thickness(
    insulation: InsulationType,
    copper_area_cma: Decimal,
    wall: Decimal,
    layers: InsulationLayers,
) -> Decimal {
    let raised = WALL_RULES
        .get(&layers)
        .and_then(|rules| first_firing(rules, insulation, copper_area_cma, wall))
        .and_then(|rule| rule.min_wall);

    match raised {
        Some(minimum) => {
            debug!(
                %insulation,
                %copper_area_cma,
                %wall,
                %minimum,
                layers = layers.count(),
                "wall raised to minimum"
            );
            minimum
        }
        None => wall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(insulation: InsulationType, cma: Decimal, wall: Decimal, layers: u8) -> Decimal {
        let layers = InsulationLayers::try_from(layers).unwrap();
        calculate_required_wall_thickness(insulation, cma, wall, layers)
    }

    #[test]
    fn test_single_layer() {
        assert_eq!(required(InsulationType::Etfe, dec!(100), dec!(0.001), 1), dec!(0.0015));
        assert_eq!(required(InsulationType::Pfa, dec!(100), dec!(0.004), 1), dec!(0.004));
        assert_eq!(required(InsulationType::Fep, dec!(1938), dec!(0.001), 1), dec!(0.002));
        assert_eq!(required(InsulationType::Fep, dec!(1939), dec!(0.001), 1), dec!(0.003));
        assert_eq!(required(InsulationType::Fep, dec!(12405), dec!(0.001), 1), dec!(0.01));
        assert_eq!(required(InsulationType::Fep, dec!(24978), dec!(0.011), 1), dec!(0.012));
        assert_eq!(required(InsulationType::Fep, dec!(24978), dec!(0.02), 1), dec!(0.02));
    }

    #[test]
    fn test_double_layer() {
        assert_eq!(required(InsulationType::Etfe, dec!(5000), dec!(0.0005), 2), dec!(0.001));
        assert_eq!(required(InsulationType::Pfa, dec!(5000), dec!(0.001), 2), dec!(0.0015));
        assert_eq!(required(InsulationType::Fep, dec!(12827), dec!(0.001), 2), dec!(0.002));
        assert_eq!(required(InsulationType::Fep, dec!(12828), dec!(0.001), 2), dec!(0.005));
        assert_eq!(required(InsulationType::Fep, dec!(30000), dec!(0.001), 2), dec!(0.006));
    }

    #[test]
    fn test_triple_layer() {
        assert_eq!(required(InsulationType::Etfe, dec!(5000), dec!(0.003), 3), dec!(0.003));
        assert_eq!(required(InsulationType::Fep, dec!(5000), dec!(0.001), 3), dec!(0.002));
        assert_eq!(required(InsulationType::Fep, dec!(20000), dec!(0.003), 3), dec!(0.004));
    }

    #[test]
    fn test_never_lowers() {
        for insulation in InsulationType::ALL {
            for layers in InsulationLayers::ALL {
                let wall = dec!(0.05);
                assert_eq!(
                    calculate_required_wall_thickness(insulation, dec!(30000), wall, layers),
                    wall
                );
            }
        }
    }
}
