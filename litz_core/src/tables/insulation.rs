//! Extruded insulation materials and layer counts.

use serde::{Deserialize, Serialize};

use crate::errors::LitzError;

/// Extruded fluoropolymer jacket material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsulationType {
    #[default]
    #[serde(rename = "ETFE")]
    Etfe,
    #[serde(rename = "FEP")]
    Fep,
    #[serde(rename = "PFA")]
    Pfa,
}

impl InsulationType {
    pub const ALL: [InsulationType; 3] =
        [InsulationType::Etfe, InsulationType::Fep, InsulationType::Pfa];

    /// Part-number letter
    pub fn code(&self) -> char {
        match self {
            InsulationType::Etfe => 'T',
            InsulationType::Fep => 'F',
            InsulationType::Pfa => 'P',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationType::Etfe => "ETFE",
            InsulationType::Fep => "FEP",
            InsulationType::Pfa => "PFA",
        }
    }
}

impl std::fmt::Display for InsulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for InsulationType {
    type Err = LitzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ETFE" => Ok(InsulationType::Etfe),
            "FEP" => Ok(InsulationType::Fep),
            "PFA" => Ok(InsulationType::Pfa),
            _ => Err(LitzError::invalid_input("insulation_type", s, "Expected ETFE, FEP or PFA")),
        }
    }
}

/// Number of extruded insulation layers (serialized as 1, 2 or 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum InsulationLayers {
    #[default]
    Single,
    Double,
    Triple,
}

impl InsulationLayers {
    pub const ALL: [InsulationLayers; 3] = [
        InsulationLayers::Single,
        InsulationLayers::Double,
        InsulationLayers::Triple,
    ];

    pub fn count(&self) -> u8 {
        match self {
            InsulationLayers::Single => 1,
            InsulationLayers::Double => 2,
            InsulationLayers::Triple => 3,
        }
    }

    /// Part-number prefix letter
    pub fn prefix(&self) -> char {
        match self {
            InsulationLayers::Single => 'S',
            InsulationLayers::Double => 'D',
            InsulationLayers::Triple => 'T',
        }
    }
}

impl TryFrom<u8> for InsulationLayers {
    type Error = LitzError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InsulationLayers::Single),
            2 => Ok(InsulationLayers::Double),
            3 => Ok(InsulationLayers::Triple),
            _ => Err(LitzError::invalid_input(
                "layers",
                value.to_string(),
                "Layer count must be 1, 2 or 3",
            )),
        }
    }
}

impl From<InsulationLayers> for u8 {
    fn from(layers: InsulationLayers) -> Self {
        layers.count()
    }
}

impl std::fmt::Display for InsulationLayers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
