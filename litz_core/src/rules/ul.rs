//! # UL Approval Checks
//!
//! Warnings for insulated constructions that would not carry UL approval.
//! Message texts are the legacy sheet's, character for character, so they
//! match what customers already see on quotes (including the misspelled
//! `MANUFACURING` in the small-conductor message).
//!
//! Only the first firing rule for a layer count is reported. The conductor
//! diameter check is independent and always runs first.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{
    above, any_copper, below, first_firing, strictly_between, BandRule, CopperBand, ETFE,
    ETFE_OR_PFA, FEP, MIN_COPPER_AREA_CMA, PFA,
};
use crate::tables::{InsulationLayers, InsulationType};

/// Largest bare conductor diameter (inches) UL will list
pub const MAX_CONDUCTOR_DIAMETER_IN: Decimal = dec!(0.2);

/// UL warning keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UlMessage {
    ConductorDiameterExceeded,
    ConsultPlantSmallConductor,
    ConsultPlantNoWall,
    IncreaseWallsSingle,
    ConsiderFepOrSupplemental,
    ConsiderFepOrReinforced,
    ConsiderFep,
    IncreaseWallDouble,
    IncreaseWallTo0020,
    IncreaseWallTo0040,
    WallRequired,
}

impl UlMessage {
    pub fn text(&self) -> &'static str {
        match self {
            UlMessage::ConductorDiameterExceeded => "CONDUCTOR DIAMETER EXCEEDS UL MAXIMUM OF 0.200 inches / 5mm",
            UlMessage::ConsultPlantSmallConductor => {
                "CONSULT PLANT TO CONFIRM MANUFACURING CAPABILITY. THIS PART WILL NOT CARRY UL APPROVALS."
            }
            UlMessage::ConsultPlantNoWall => {
                "CONSULT PLANT TO CONFIRM MANUFACTURING CAPABILITY. THIS PART WILL NOT CARRY UL APPROVALS."
            }
            UlMessage::IncreaseWallsSingle => {
                "INCREASE WALL THICKNESSES IF UL APPROVALS ARE REQUIRED. IF UL APPROVALS ARE NOT REQUIRED, CONSULT THE FACTORY TO CONFIRM MANUFACTURABILITY."
            }
            UlMessage::ConsiderFepOrSupplemental => {
                "THIS PART WILL NOT CARRY UL APPROVALS. CONSIDER FEP INSULATION OR SUPPLEMENTAL/REINFORCED INSULATION."
            }
            UlMessage::ConsiderFepOrReinforced => {
                "THIS PART WILL NOT CARRY UL APPROVALS. CONSIDER FEP INSULATION OR REINFORCED INSULATION."
            }
            UlMessage::ConsiderFep => "THIS PART WILL NOT CARRY UL APPROVALS. CONSIDER FEP INSULATION.",
            UlMessage::IncreaseWallDouble => "INCREASE WALL THICKNESS IF UL APPROVAL IS REQUIRED.",
            UlMessage::IncreaseWallTo0020 => {
                "THIS PART WILL NOT CARRY UL APPROVALS. INCREASE INSULATION WALL THICKNESS TO AT LEAST 0.0020 INCHES."
            }
            UlMessage::IncreaseWallTo0040 => {
                "THIS PART WILL NOT CARRY UL APPROVALS. INCREASE INSULATION WALL THICKNESS TO AT LEAST 0.0040 INCHES."
            }
            UlMessage::WallRequired => "Wall thickness required for UL approval validation.",
        }
    }
}

impl std::fmt::Display for UlMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

static UL_RULES: Lazy<BTreeMap<InsulationLayers, Vec<BandRule<UlMessage>>>> = Lazy::new(|| {
    use UlMessage::*;
    let between = strictly_between;
    let min = |insulation: &'static [InsulationType], copper: CopperBand, wall: Decimal, outcome| {
        BandRule::new(insulation, copper, Some(wall), outcome)
    };
    let advise = |insulation: &'static [InsulationType], copper: CopperBand, outcome| {
        BandRule::new(insulation, copper, None, outcome)
    };
    BTreeMap::from([
        (
            InsulationLayers::Single,
            vec![
                min(FEP, below(dec!(1939)), dec!(0.002), IncreaseWallsSingle),
                min(FEP, between(dec!(1938), dec!(12405)), dec!(0.003), IncreaseWallsSingle),
                min(FEP, between(dec!(12404), dec!(24978)), dec!(0.01), IncreaseWallsSingle),
                min(FEP, between(dec!(24977), dec!(40000)), dec!(0.012), IncreaseWallsSingle),
                min(ETFE, any_copper(), dec!(0.0015), IncreaseWallsSingle),
                min(FEP, any_copper(), dec!(0.002), IncreaseWallsSingle),
                min(PFA, below(dec!(187)), dec!(0.0015), IncreaseWallsSingle),
                min(PFA, between(dec!(186), dec!(770)), dec!(0.002), IncreaseWallsSingle),
                advise(ETFE_OR_PFA, above(dec!(769)), ConsiderFepOrSupplemental),
            ],
        ),
        (
            InsulationLayers::Double,
            vec![
                min(ETFE, below(dec!(122)), dec!(0.001), ConsiderFepOrReinforced),
                min(ETFE, between(dec!(121), dec!(2886)), dec!(0.0015), ConsiderFepOrReinforced),
                min(ETFE, between(dec!(2885), dec!(12405)), dec!(0.003), ConsiderFepOrReinforced),
                advise(ETFE, above(dec!(12404)), ConsiderFep),
                advise(PFA, above(dec!(1938)), ConsiderFepOrReinforced),
                min(FEP, below(dec!(12405)), dec!(0.002), IncreaseWallDouble),
                min(FEP, between(dec!(12404), dec!(24978)), dec!(0.005), IncreaseWallDouble),
                min(FEP, between(dec!(24977), dec!(40000)), dec!(0.006), IncreaseWallDouble),
            ],
        ),
        (
            InsulationLayers::Triple,
            vec![
                min(FEP, below(dec!(12405)), dec!(0.002), IncreaseWallTo0020),
                min(FEP, above(dec!(12404)), dec!(0.004), IncreaseWallTo0040),
                min(ETFE, below(dec!(1241)), dec!(0.001), ConsiderFep),
                min(ETFE, between(dec!(1240), dec!(4900)), dec!(0.0015), ConsiderFep),
                min(ETFE, between(dec!(4899), dec!(12405)), dec!(0.002), ConsiderFep),
                advise(ETFE_OR_PFA, above(dec!(12404)), ConsiderFep),
            ],
        ),
    ])
});

/// UL approval warnings for an insulated construction.
///
/// `conductor_diameter_in` is the bare bundle diameter; `copper_area_cma`
/// the total copper area. Without a wall thickness only the diameter and
/// small-conductor checks can run.
pub fn check_ul_approval(
    conductor_diameter_in: Decimal,
    insulation: InsulationType,
    copper_area_cma: Decimal,
    wall_thickness_in: Option<Decimal>,
    layers: InsulationLayers,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if conductor_diameter_in > MAX_CONDUCTOR_DIAMETER_IN {
        warnings.push(UlMessage::ConductorDiameterExceeded.to_string());
    }

    let Some(wall) = wall_thickness_in else {
        let message = if copper_area_cma < MIN_COPPER_AREA_CMA {
            UlMessage::ConsultPlantNoWall
        } else {
            UlMessage::WallRequired
        };
        warnings.push(message.to_string());
        return warnings;
    };

    if copper_area_cma < MIN_COPPER_AREA_CMA {
        warnings.push(UlMessage::ConsultPlantSmallConductor.to_string());
        return warnings;
    }

    if let Some(rule) = UL_RULES
        .get(&layers)
        .and_then(|rules| first_firing(rules, insulation, copper_area_cma, wall))
    {
        warnings.push(rule.outcome.to_string());
    }
    warnings
}
