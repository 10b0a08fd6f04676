//! Nylon-served diameters over a bare bundle.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::DiameterResult;
use crate::errors::LitzError;
use crate::part_number::served_part_number;
use crate::units::round3;

/// Nylon serve wrapped over a bare bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServeType {
    #[serde(rename = "Single Nylon Serve", alias = "Single")]
    Single,
    #[serde(rename = "Double Nylon Serve", alias = "Double")]
    Double,
}

impl ServeType {
    pub const ALL: [ServeType; 2] = [ServeType::Single, ServeType::Double];

    /// Build added to (min, nom, max), inches
    pub fn build(&self) -> (Decimal, Decimal, Decimal) {
        match self {
            ServeType::Single => (dec!(0.002), dec!(0.002), dec!(0.003)),
            ServeType::Double => (dec!(0.004), dec!(0.004), dec!(0.006)),
        }
    }

    pub fn part_number_suffix(&self) -> &'static str {
        match self {
            ServeType::Single => "-SN-XX",
            ServeType::Double => "-DN-XX",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServeType::Single => "Single Nylon Serve",
            ServeType::Double => "Double Nylon Serve",
        }
    }
}

impl std::fmt::Display for ServeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ServeType {
    type Err = LitzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single nylon serve" | "sn" => Ok(ServeType::Single),
            "double" | "double nylon serve" | "dn" => Ok(ServeType::Double),
            _ => Err(LitzError::invalid_input("serve_type", s, "Expected Single or Double")),
        }
    }
}

pub fn calculate_served_diameters(bare: &DiameterResult, serve: ServeType) -> DiameterResult {
    let (min_build, nom_build, max_build) = serve.build();
    DiameterResult {
        min: round3(bare.min + min_build),
        nom: round3(bare.nom + nom_build),
        max: round3(bare.max + max_build),
        part_number: served_part_number(&bare.part_number, serve.part_number_suffix()),
        wall_thickness_inches: None,
        wall_thickness_mm: None,
    }
}
