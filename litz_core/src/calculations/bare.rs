//! Bare litz diameters.
//!
//! `diameter = round3(√strands × strand OD × packing factor)`, evaluated
//! separately for the min, nom and max strand OD of the chosen film build.

use rust_decimal::Decimal;

use super::{sqrt_strands, DiameterResult};
use crate::errors::LitzResult;
use crate::part_number::bare_part_number;
use crate::tables::{film_band, FilmType};
use crate::units::round3;

/// Bare bundle diameters for one film build.
///
/// Fails with `FilmUnavailable` when the build is not made at `wire_awg`.
///
/// ```rust
/// use litz_core::calculations::calculate_bare_diameters;
/// use litz_core::tables::FilmType;
/// use rust_decimal_macros::dec;
///
/// let bare = calculate_bare_diameters(200, 36, dec!(1.155), "MW 79-C", FilmType::Single).unwrap();
/// assert_eq!(bare.nom, dec!(0.091));
/// assert_eq!(bare.part_number, "RL-200-36S79-XX");
/// ```
pub fn calculate_bare_diameters(
    strand_count: u32,
    wire_awg: u32,
    packing_factor: Decimal,
    magnet_wire_grade: &str,
    film: FilmType,
) -> LitzResult<DiameterResult> {
    let band = film_band(wire_awg, film)?;
    let scale = sqrt_strands(strand_count)? * packing_factor;

    Ok(DiameterResult {
        min: round3(scale * band.min),
        nom: round3(scale * band.nom),
        max: round3(scale * band.max),
        part_number: bare_part_number(strand_count, wire_awg, film, magnet_wire_grade),
        wall_thickness_inches: None,
        wall_thickness_mm: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LitzError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_film_200_36() {
        let bare =
            calculate_bare_diameters(200, 36, dec!(1.155), "MW 79-C", FilmType::Single).unwrap();
        assert_eq!(bare.min, dec!(0.087));
        assert_eq!(bare.nom, dec!(0.091));
        assert_eq!(bare.max, dec!(0.095));
        assert_eq!(bare.part_number, "RL-200-36S79-XX");
        assert!(bare.wall_thickness_inches.is_none());
        assert!(bare.wall_thickness_mm.is_none());
    }

    #[test]
    fn test_heavy_film_100_30() {
        let bare =
            calculate_bare_diameters(100, 30, dec!(1.155), "MW 80-C", FilmType::Heavy).unwrap();
        assert_eq!(bare.min, dec!(0.131));
        assert_eq!(bare.nom, dec!(0.134));
        assert_eq!(bare.max, dec!(0.137));
        assert_eq!(bare.part_number, "RL-100-30H80-XX");
    }

    #[test]
    fn test_unavailable_film_is_an_error() {
        let err =
            calculate_bare_diameters(5, 12, dec!(1.155), "MW 79-C", FilmType::Triple).unwrap_err();
        assert_eq!(err, LitzError::film_unavailable("Triple", 12));
        assert_eq!(err.to_string(), "Triple film not available for AWG 12");
    }

    #[test]
    fn test_band_ordering_and_idempotence() {
        for film in FilmType::ALL {
            let first = calculate_bare_diameters(1000, 40, dec!(1.236), "MW 79-C", film).unwrap();
            let second = calculate_bare_diameters(1000, 40, dec!(1.236), "MW 79-C", film).unwrap();
            assert!(first.min <= first.nom && first.nom <= first.max);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
