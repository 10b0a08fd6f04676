//! # Construction Factors
//!
//! Packing and take-up factors by construction type and number of bundling
//! operations.
//!
//! | Ops | Type 1 packing / take-up | Type 2 packing / take-up |
//! |-----|--------------------------|--------------------------|
//! | 1   | 1.155 / 1.01             | 1.155 / 1.01             |
//! | 2   | 1.155 / 1.01             | 1.236 / 1.03             |
//! | 3   | 1.155 / 1.01             | 1.236 / 1.03             |
//! | 4   | -                        | 1.271 / 1.051            |
//! | 5   | -                        | 1.363 / 1.082            |
//!
//! Type 2 with four operations on strands coarser than 44 AWG is packed
//! at 1.363 instead of the tabulated 1.271.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LitzError, LitzResult};

/// Litz construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum LitzType {
    /// Simple bunched construction, at most three operations
    #[default]
    #[serde(rename = "Type 1", alias = "Type1")]
    Type1,
    /// Rope-lay construction, up to five operations
    #[serde(rename = "Type 2", alias = "Type2")]
    Type2,
}

impl LitzType {
    pub const ALL: [LitzType; 2] = [LitzType::Type1, LitzType::Type2];

    pub fn display_name(&self) -> &'static str {
        match self {
            LitzType::Type1 => "Type 1",
            LitzType::Type2 => "Type 2",
        }
    }
}

impl std::fmt::Display for LitzType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for LitzType {
    type Err = LitzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.to_ascii_lowercase().as_str() {
            "type1" | "1" => Ok(LitzType::Type1),
            "type2" | "2" => Ok(LitzType::Type2),
            _ => Err(LitzError::invalid_input("litz_type", s, "Expected Type 1 or Type 2")),
        }
    }
}

/// Packing and take-up factor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionFactors {
    pub packing_factor: Decimal,
    pub take_up_factor: Decimal,
}

/// Operation count above which no construction is tabulated
pub const MAX_OPERATIONS: u32 = 5;

/// Finest gauge (exclusive) the Type 2 four-operation override applies to
const OVERRIDE_AWG_LIMIT: u32 = 44;

static CONSTRUCTION_FACTORS: Lazy<BTreeMap<(LitzType, u32), ConstructionFactors>> = Lazy::new(|| {
    let f = |packing_factor, take_up_factor| ConstructionFactors {
        packing_factor,
        take_up_factor,
    };
    BTreeMap::from([
        ((LitzType::Type1, 1), f(dec!(1.155), dec!(1.01))),
        ((LitzType::Type1, 2), f(dec!(1.155), dec!(1.01))),
        ((LitzType::Type1, 3), f(dec!(1.155), dec!(1.01))),
        ((LitzType::Type2, 1), f(dec!(1.155), dec!(1.01))),
        ((LitzType::Type2, 2), f(dec!(1.236), dec!(1.03))),
        ((LitzType::Type2, 3), f(dec!(1.236), dec!(1.03))),
        ((LitzType::Type2, 4), f(dec!(1.271), dec!(1.051))),
        ((LitzType::Type2, 5), f(dec!(1.363), dec!(1.082))),
    ])
});

/// Resolve both factors for a construction.
///
/// `wire_awg` only matters for the Type 2 four-operation override; pass
/// `None` to read the raw table.
///
/// ```rust
/// use litz_core::tables::{construction_factors, LitzType};
/// use rust_decimal_macros::dec;
///
/// let f = construction_factors(LitzType::Type2, 4, Some(30)).unwrap();
/// assert_eq!(f.packing_factor, dec!(1.363));
/// assert_eq!(f.take_up_factor, dec!(1.051));
/// ```
pub fn construction_factors(
    litz_type: LitzType,
    operations: u32,
    wire_awg: Option<u32>,
) -> LitzResult<ConstructionFactors> {
    let mut factors = CONSTRUCTION_FACTORS
        .get(&(litz_type, operations))
        .copied()
        .ok_or_else(|| LitzError::unsupported_operations(litz_type.display_name(), operations))?;

    if litz_type == LitzType::Type2
        && operations == 4
        && wire_awg.is_some_and(|awg| awg < OVERRIDE_AWG_LIMIT)
    {
        factors.packing_factor = dec!(1.363);
    }
    Ok(factors)
}

/// Packing factor for a construction, including the Type 2 override.
pub fn packing_factor(
    litz_type: LitzType,
    operations: u32,
    wire_awg: Option<u32>,
) -> LitzResult<Decimal> {
    construction_factors(litz_type, operations, wire_awg).map(|f| f.packing_factor)
}

/// Take-up factor for a construction.
pub fn take_up_factor(litz_type: LitzType, operations: u32) -> LitzResult<Decimal> {
    construction_factors(litz_type, operations, None).map(|f| f.take_up_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type1_rows() {
        for ops in 1..=3 {
            assert_eq!(packing_factor(LitzType::Type1, ops, Some(36)).unwrap(), dec!(1.155));
            assert_eq!(take_up_factor(LitzType::Type1, ops).unwrap(), dec!(1.01));
        }
        assert!(matches!(
            packing_factor(LitzType::Type1, 4, Some(36)),
            Err(LitzError::UnsupportedOperations { operations: 4, .. })
        ));
    }

    #[test]
    fn test_type2_override() {
        assert_eq!(packing_factor(LitzType::Type2, 4, Some(30)).unwrap(), dec!(1.363));
        assert_eq!(packing_factor(LitzType::Type2, 4, Some(43)).unwrap(), dec!(1.363));
        assert_eq!(packing_factor(LitzType::Type2, 4, Some(44)).unwrap(), dec!(1.271));
        assert_eq!(packing_factor(LitzType::Type2, 4, Some(45)).unwrap(), dec!(1.271));
        assert_eq!(packing_factor(LitzType::Type2, 4, None).unwrap(), dec!(1.271));
        // Override never touches take-up
        assert_eq!(take_up_factor(LitzType::Type2, 4).unwrap(), dec!(1.051));
    }

    #[test]
    fn test_out_of_table() {
        assert!(packing_factor(LitzType::Type2, 6, None).is_err());
        assert!(packing_factor(LitzType::Type2, 0, None).is_err());
        assert_eq!(take_up_factor(LitzType::Type2, MAX_OPERATIONS).unwrap(), dec!(1.082));
    }

    #[test]
    fn test_litz_type_serde_names() {
        assert_eq!(serde_json::to_string(&LitzType::Type2).unwrap(), "\"Type 2\"");
        let parsed: LitzType = serde_json::from_str("\"Type 1\"").unwrap();
        assert_eq!(parsed, LitzType::Type1);
        assert_eq!("type 2".parse::<LitzType>().unwrap(), LitzType::Type2);
        assert!("Type 3".parse::<LitzType>().is_err());
    }
}
