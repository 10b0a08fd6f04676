//! # Part Numbers
//!
//! Catalog identifiers assembled from a validated construction.
//!
//! | Product   | Grammar                                                     | Example                  |
//! |-----------|-------------------------------------------------------------|--------------------------|
//! | Bare      | `RL-{strands}-{awg}{film}{grade}-XX`                        | `RL-200-36S79-XX`        |
//! | Served    | bare with `-XX` replaced by `-SN-XX` / `-DN-XX`             | `RL-200-36S79-SN-XX`     |
//! | Insulated | `{S\|D\|T}XXL{strands}/{awg}{insulation}{X..X}-{mils}(MW{grade})` | `SXXL200/36TX-6(MW79)` |

use rust_decimal::Decimal;

use crate::tables::{
    bare_grade_code, insulated_grade_code, FilmType, InsulationLayers, InsulationType,
};
use crate::units::inches_to_whole_mils;

/// Trailing segment every bare part number ends with
pub const BARE_SUFFIX: &str = "-XX";

pub fn bare_part_number(
    strand_count: u32,
    wire_awg: u32,
    film: FilmType,
    magnet_wire_grade: &str,
) -> String {
    format!(
        "RL-{}-{}{}{}{}",
        strand_count,
        wire_awg,
        film.code(),
        bare_grade_code(magnet_wire_grade),
        BARE_SUFFIX
    )
}

/// Swap the bare suffix for a serve suffix such as `-SN-XX`.
///
/// Part numbers without the bare suffix get the serve suffix appended.
pub fn served_part_number(bare_part_number: &str, serve_suffix: &str) -> String {
    let stem = bare_part_number.strip_suffix(BARE_SUFFIX).unwrap_or(bare_part_number);
    format!("{}{}", stem, serve_suffix)
}

pub fn insulated_part_number(
    layers: InsulationLayers,
    strand_count: u32,
    wire_awg: u32,
    insulation: InsulationType,
    wall_thickness_in: Decimal,
    magnet_wire_grade: &str,
) -> String {
    let layer_marks = "X".repeat(usize::from(layers.count()));
    format!(
        "{}XXL{}/{}{}{}-{}(MW{})",
        layers.prefix(),
        strand_count,
        wire_awg,
        insulation.code(),
        layer_marks,
        inches_to_whole_mils(wall_thickness_in).normalize(),
        insulated_grade_code(magnet_wire_grade)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bare() {
        assert_eq!(bare_part_number(200, 36, FilmType::Single, "MW 79-C"), "RL-200-36S79-XX");
        assert_eq!(bare_part_number(100, 30, FilmType::Heavy, "MW 80-C"), "RL-100-30H80-XX");
        assert_eq!(bare_part_number(60, 40, FilmType::Quadruple, "special"), "RL-60-40QXX-XX");
    }

    #[test]
    fn test_served() {
        assert_eq!(served_part_number("RL-200-36S79-XX", "-SN-XX"), "RL-200-36S79-SN-XX");
        assert_eq!(served_part_number("RL-200-36S79-XX", "-DN-XX"), "RL-200-36S79-DN-XX");
    }

    #[test]
    fn test_insulated() {
        assert_eq!(
            insulated_part_number(
                InsulationLayers::Single,
                200,
                36,
                InsulationType::Etfe,
                dec!(0.0055),
                "MW 79-C"
            ),
            "SXXL200/36TX-6(MW79)"
        );
        assert_eq!(
            insulated_part_number(
                InsulationLayers::Triple,
                1000,
                40,
                InsulationType::Fep,
                dec!(0.002),
                "MW 73-C"
            ),
            "TXXL1000/40FXXX-2(MWXX)"
        );
        assert_eq!(
            insulated_part_number(
                InsulationLayers::Double,
                100,
                30,
                InsulationType::Pfa,
                dec!(0.012),
                "MW 16-C"
            ),
            "DXXL100/30PXX-12(MW16)"
        );
    }
}
