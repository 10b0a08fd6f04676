//! # Insulation Rules
//!
//! Banded rules keyed by insulation material, copper area and wall
//! thickness. The same matcher drives three concerns:
//!
//! - [`wall`]: minimum wall thickness an insulated construction is raised to
//! - [`ul`]: UL approval warnings
//! - [`manufacturing`]: manufacturing capability warnings and advisories
//!
//! A rule *fires* when the material is one of its materials, the copper
//! area lies in its band, and (if the rule carries a minimum wall) the wall
//! is below that minimum. Rules are evaluated in order; only the first
//! firing rule counts.
//!
//! Copper bands are `(Bound, Bound)` pairs so each rule states exactly the
//! strict or inclusive comparison it was written with.

pub mod manufacturing;
pub mod ul;
pub mod wall;

use std::ops::{Bound, RangeBounds};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::tables::InsulationType;

pub use manufacturing::{check_construction_advisories, check_manufacturing_capability};
pub use ul::{check_ul_approval, UlMessage};
pub use wall::calculate_required_wall_thickness;

/// Below this copper area (CMA) no insulated part can be UL approved
pub const MIN_COPPER_AREA_CMA: Decimal = dec!(9.61);

/// Copper area band in circular mils
pub type CopperBand = (Bound<Decimal>, Bound<Decimal>);

/// One banded rule with an outcome of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandRule<T> {
    pub insulation: &'static [InsulationType],
    pub copper: CopperBand,
    /// Wall below which the rule fires; `None` fires on material and copper alone
    pub min_wall: Option<Decimal>,
    pub outcome: T,
}

impl<T> BandRule<T> {
    pub fn new(
        insulation: &'static [InsulationType],
        copper: CopperBand,
        min_wall: Option<Decimal>,
        outcome: T,
    ) -> Self {
        BandRule {
            insulation,
            copper,
            min_wall,
            outcome,
        }
    }

    pub fn fires(&self, insulation: InsulationType, copper_area: Decimal, wall: Decimal) -> bool {
        self.insulation.contains(&insulation)
            && self.copper.contains(&copper_area)
            && self.min_wall.map_or(true, |min| wall < min)
    }
}

/// First rule in `rules` that fires.
pub fn first_firing<T>(
    rules: &[BandRule<T>],
    insulation: InsulationType,
    copper_area: Decimal,
    wall: Decimal,
) -> Option<&BandRule<T>> {
    rules.iter().find(|rule| rule.fires(insulation, copper_area, wall))
}

// Band helpers. Names follow the comparison they encode.

pub(crate) fn any_copper() -> CopperBand {
    (Bound::Unbounded, Bound::Unbounded)
}

/// copper < hi
pub(crate) fn below(hi: Decimal) -> CopperBand {
    (Bound::Unbounded, Bound::Excluded(hi))
}

/// copper >= lo
pub(crate) fn at_least(lo: Decimal) -> CopperBand {
    (Bound::Included(lo), Bound::Unbounded)
}

/// copper > lo
pub(crate) fn above(lo: Decimal) -> CopperBand {
    (Bound::Excluded(lo), Bound::Unbounded)
}

/// lo <= copper < hi
pub(crate) fn from_until(lo: Decimal, hi: Decimal) -> CopperBand {
    (Bound::Included(lo), Bound::Excluded(hi))
}

/// lo < copper < hi
pub(crate) fn strictly_between(lo: Decimal, hi: Decimal) -> CopperBand {
    (Bound::Excluded(lo), Bound::Excluded(hi))
}

pub(crate) const ETFE: &[InsulationType] = &[InsulationType::Etfe];
pub(crate) const FEP: &[InsulationType] = &[InsulationType::Fep];
pub(crate) const PFA: &[InsulationType] = &[InsulationType::Pfa];
pub(crate) const ETFE_OR_PFA: &[InsulationType] = &[InsulationType::Etfe, InsulationType::Pfa];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        let rule =
            BandRule::new(FEP, strictly_between(dec!(1938), dec!(12405)), Some(dec!(0.003)), ());
        assert!(!rule.fires(InsulationType::Fep, dec!(1938), dec!(0.001)));
        assert!(rule.fires(InsulationType::Fep, dec!(1938.5), dec!(0.001)));
        assert!(rule.fires(InsulationType::Fep, dec!(12404.9), dec!(0.0029)));
        assert!(!rule.fires(InsulationType::Fep, dec!(12405), dec!(0.001)));
        // Wall at the minimum satisfies the rule
        assert!(!rule.fires(InsulationType::Fep, dec!(5000), dec!(0.003)));
        assert!(!rule.fires(InsulationType::Etfe, dec!(5000), dec!(0.001)));
    }

    #[test]
    fn test_rule_without_minimum_always_fires_in_band() {
        let rule = BandRule::new(ETFE_OR_PFA, above(dec!(769)), None, "flag");
        assert!(rule.fires(InsulationType::Pfa, dec!(770), dec!(1)));
        assert!(!rule.fires(InsulationType::Pfa, dec!(769), dec!(1)));
        assert!(!rule.fires(InsulationType::Fep, dec!(5000), dec!(0)));
    }

    #[test]
    fn test_first_firing_keeps_order() {
        let rules = vec![
            BandRule::new(ETFE, any_copper(), Some(dec!(0.0015)), 1),
            BandRule::new(ETFE, below(dec!(100)), None, 2),
            BandRule::new(ETFE, at_least(dec!(100)), None, 3),
            BandRule::new(ETFE, from_until(dec!(0), dec!(1)), None, 4),
        ];
        let hit = first_firing(&rules, InsulationType::Etfe, dec!(50), dec!(0.001));
        assert_eq!(hit.map(|r| r.outcome), Some(1));
        let hit = first_firing(&rules, InsulationType::Etfe, dec!(50), dec!(0.002));
        assert_eq!(hit.map(|r| r.outcome), Some(2));
        let hit = first_firing(&rules, InsulationType::Etfe, dec!(100), dec!(0.002));
        assert_eq!(hit.map(|r| r.outcome), Some(3));
        assert!(first_firing(&rules, InsulationType::Pfa, dec!(100), dec!(0)).is_none());
    }
}
