//! Magnet Wire Film Builds
//!
//! Outside diameter of one film-coated strand, per gauge and per film build
//! (Single, Heavy, Triple, Quadruple), as a min/nom/max band in inches.
//!
//! A build that is not manufactured at a gauge is stored as an all-zero
//! band. [`film_band`] refuses to hand those out so no caller can compute a
//! diameter from a zero strand OD.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LitzError, LitzResult};

/// Magnet wire film build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FilmType {
    #[default]
    Single,
    Heavy,
    Triple,
    Quadruple,
}

impl FilmType {
    /// All film builds, in the order the design sheet lists them
    pub const ALL: [FilmType; 4] = [
        FilmType::Single,
        FilmType::Heavy,
        FilmType::Triple,
        FilmType::Quadruple,
    ];

    /// Single-letter code used in bare litz part numbers
    pub fn code(&self) -> char {
        match self {
            FilmType::Single => 'S',
            FilmType::Heavy => 'H',
            FilmType::Triple => 'T',
            FilmType::Quadruple => 'Q',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilmType::Single => "Single",
            FilmType::Heavy => "Heavy",
            FilmType::Triple => "Triple",
            FilmType::Quadruple => "Quadruple",
        }
    }
}

impl std::fmt::Display for FilmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for FilmType {
    type Err = LitzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "s" => Ok(FilmType::Single),
            "heavy" | "h" => Ok(FilmType::Heavy),
            "triple" | "t" => Ok(FilmType::Triple),
            "quadruple" | "quad" | "q" => Ok(FilmType::Quadruple),
            _ => Err(LitzError::invalid_input(
                "film_type",
                s,
                "Expected Single, Heavy, Triple or Quadruple",
            )),
        }
    }
}

/// Min/nom/max strand outside diameter in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilmBand {
    pub min: Decimal,
    pub nom: Decimal,
    pub max: Decimal,
}

impl FilmBand {
    fn new(min: Decimal, nom: Decimal, max: Decimal) -> Self {
        FilmBand { min, nom, max }
    }

    fn unavailable() -> Self {
        FilmBand::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    /// A zero nominal marks a build that is not offered at the gauge
    pub fn is_available(&self) -> bool {
        !self.nom.is_zero()
    }
}

/// Film bands for one gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilmThicknesses {
    pub single: FilmBand,
    pub heavy: FilmBand,
    pub triple: FilmBand,
    pub quadruple: FilmBand,
}

impl FilmThicknesses {
    pub fn band(&self, film: FilmType) -> FilmBand {
        match film {
            FilmType::Single => self.single,
            FilmType::Heavy => self.heavy,
            FilmType::Triple => self.triple,
            FilmType::Quadruple => self.quadruple,
        }
    }
}

type Band = (Decimal, Decimal, Decimal);

fn four(single: Band, heavy: Band, triple: Band, quadruple: Band) -> FilmThicknesses {
    FilmThicknesses {
        single: FilmBand::new(single.0, single.1, single.2),
        heavy: FilmBand::new(heavy.0, heavy.1, heavy.2),
        triple: FilmBand::new(triple.0, triple.1, triple.2),
        quadruple: FilmBand::new(quadruple.0, quadruple.1, quadruple.2),
    }
}

fn two(single: Band, heavy: Band) -> FilmThicknesses {
    FilmThicknesses {
        single: FilmBand::new(single.0, single.1, single.2),
        heavy: FilmBand::new(heavy.0, heavy.1, heavy.2),
        triple: FilmBand::unavailable(),
        quadruple: FilmBand::unavailable(),
    }
}

static FILM_THICKNESSES: Lazy<BTreeMap<u32, FilmThicknesses>> = Lazy::new(|| {
    BTreeMap::from([
        (
            12,
            two(
                (dec!(0.0814), dec!(0.0827), dec!(0.084)),
                (dec!(0.0829), dec!(0.0837), dec!(0.0847)),
            ),
        ),
        (
            13,
            two(
                (dec!(0.0727), dec!(0.0739), dec!(0.075)),
                (dec!(0.0741), dec!(0.0749), dec!(0.0757)),
            ),
        ),
        (
            14,
            four(
                (dec!(0.0651), dec!(0.0658), dec!(0.0666)),
                (dec!(0.0667), dec!(0.0675), dec!(0.0682)),
                (dec!(0.0683), dec!(0.0692), dec!(0.07)),
                (dec!(0.0684), dec!(0.07), dec!(0.0715)),
            ),
        ),
        (
            15,
            four(
                (dec!(0.058), dec!(0.0587), dec!(0.0594)),
                (dec!(0.0595), dec!(0.0602), dec!(0.0609)),
                (dec!(0.061), dec!(0.0619), dec!(0.0627)),
                (dec!(0.0613), dec!(0.0628), dec!(0.0644)),
            ),
        ),
        (
            16,
            four(
                (dec!(0.0517), dec!(0.0524), dec!(0.0531)),
                (dec!(0.0532), dec!(0.0539), dec!(0.0545)),
                (dec!(0.0546), dec!(0.0554), dec!(0.0562)),
                (dec!(0.0549), dec!(0.0563), dec!(0.0577)),
            ),
        ),
        (
            17,
            four(
                (dec!(0.0462), dec!(0.0468), dec!(0.0475)),
                (dec!(0.0476), dec!(0.0482), dec!(0.0488)),
                (dec!(0.0489), dec!(0.0497), dec!(0.0504)),
                (dec!(0.0493), dec!(0.0506), dec!(0.052)),
            ),
        ),
        (
            18,
            four(
                (dec!(0.0412), dec!(0.0418), dec!(0.0424)),
                (dec!(0.0425), dec!(0.0431), dec!(0.0437)),
                (dec!(0.0438), dec!(0.0445), dec!(0.0452)),
                (dec!(0.0443), dec!(0.0456), dec!(0.0468)),
            ),
        ),
        (
            19,
            four(
                (dec!(0.0367), dec!(0.0373), dec!(0.0379)),
                (dec!(0.038), dec!(0.0386), dec!(0.0391)),
                (dec!(0.0392), dec!(0.0399), dec!(0.0406)),
                (dec!(0.0397), dec!(0.041), dec!(0.0422)),
            ),
        ),
        (
            20,
            four(
                (dec!(0.0329), dec!(0.0334), dec!(0.0339)),
                (dec!(0.034), dec!(0.0346), dec!(0.0351)),
                (dec!(0.0352), dec!(0.0358), dec!(0.0364)),
                (dec!(0.0357), dec!(0.0368), dec!(0.0379)),
            ),
        ),
        (
            21,
            four(
                (dec!(0.0293), dec!(0.0298), dec!(0.0303)),
                (dec!(0.0304), dec!(0.0309), dec!(0.0314)),
                (dec!(0.0315), dec!(0.0321), dec!(0.0326)),
                (dec!(0.0321), dec!(0.0332), dec!(0.0342)),
            ),
        ),
        (
            22,
            four(
                (dec!(0.0261), dec!(0.0266), dec!(0.027)),
                (dec!(0.0271), dec!(0.0276), dec!(0.0281)),
                (dec!(0.0282), dec!(0.0288), dec!(0.0293)),
                (dec!(0.0287), dec!(0.0298), dec!(0.0308)),
            ),
        ),
        (
            23,
            four(
                (dec!(0.0234), dec!(0.0238), dec!(0.0243)),
                (dec!(0.0244), dec!(0.0249), dec!(0.0253)),
                (dec!(0.0254), dec!(0.0259), dec!(0.0264)),
                (dec!(0.026), dec!(0.027), dec!(0.0279)),
            ),
        ),
        (
            24,
            four(
                (dec!(0.0209), dec!(0.0213), dec!(0.0217)),
                (dec!(0.0218), dec!(0.0223), dec!(0.0227)),
                (dec!(0.0228), dec!(0.0233), dec!(0.0238)),
                (dec!(0.0234), dec!(0.0243), dec!(0.0252)),
            ),
        ),
        (
            25,
            four(
                (dec!(0.0186), dec!(0.019), dec!(0.0194)),
                (dec!(0.0195), dec!(0.0199), dec!(0.0203)),
                (dec!(0.0204), dec!(0.0209), dec!(0.0214)),
                (dec!(0.0211), dec!(0.022), dec!(0.0228)),
            ),
        ),
        (
            26,
            four(
                (dec!(0.0166), dec!(0.017), dec!(0.0173)),
                (dec!(0.0174), dec!(0.0178), dec!(0.0182)),
                (dec!(0.0183), dec!(0.0188), dec!(0.0193)),
                (dec!(0.0189), dec!(0.0198), dec!(0.0206)),
            ),
        ),
        (
            27,
            four(
                (dec!(0.0149), dec!(0.0153), dec!(0.0156)),
                (dec!(0.0157), dec!(0.0161), dec!(0.0164)),
                (dec!(0.0165), dec!(0.0169), dec!(0.0173)),
                (dec!(0.0171), dec!(0.0178), dec!(0.0185)),
            ),
        ),
        (
            28,
            four(
                (dec!(0.0133), dec!(0.0137), dec!(0.014)),
                (dec!(0.0141), dec!(0.0144), dec!(0.0147)),
                (dec!(0.0148), dec!(0.0152), dec!(0.0156)),
                (dec!(0.0154), dec!(0.016), dec!(0.0166)),
            ),
        ),
        (
            29,
            four(
                (dec!(0.0119), dec!(0.0123), dec!(0.0126)),
                (dec!(0.0127), dec!(0.013), dec!(0.0133)),
                (dec!(0.0134), dec!(0.0138), dec!(0.0142)),
                (dec!(0.014), dec!(0.0146), dec!(0.0152)),
            ),
        ),
        (
            30,
            four(
                (dec!(0.0106), dec!(0.0109), dec!(0.0112)),
                (dec!(0.0113), dec!(0.0116), dec!(0.0119)),
                (dec!(0.012), dec!(0.0124), dec!(0.0128)),
                (dec!(0.0126), dec!(0.0132), dec!(0.0137)),
            ),
        ),
        (
            31,
            four(
                (dec!(0.0094), dec!(0.0097), dec!(0.01)),
                (dec!(0.0101), dec!(0.0105), dec!(0.0108)),
                (dec!(0.0105), dec!(0.011), dec!(0.0114)),
                (dec!(0.0114), dec!(0.0118), dec!(0.0121)),
            ),
        ),
        (
            32,
            four(
                (dec!(0.0085), dec!(0.0088), dec!(0.0091)),
                (dec!(0.0091), dec!(0.0095), dec!(0.0098)),
                (dec!(0.0095), dec!(0.0099), dec!(0.0103)),
                (dec!(0.0103), dec!(0.0107), dec!(0.011)),
            ),
        ),
        (
            33,
            four(
                (dec!(0.0075), dec!(0.0078), dec!(0.0081)),
                (dec!(0.0081), dec!(0.0085), dec!(0.0088)),
                (dec!(0.0084), dec!(0.0088), dec!(0.0092)),
                (dec!(0.0092), dec!(0.0096), dec!(0.0099)),
            ),
        ),
        (
            34,
            four(
                (dec!(0.0067), dec!(0.007), dec!(0.0072)),
                (dec!(0.0072), dec!(0.0075), dec!(0.0078)),
                (dec!(0.0075), dec!(0.0079), dec!(0.0082)),
                (dec!(0.0082), dec!(0.0085), dec!(0.0088)),
            ),
        ),
        (
            35,
            four(
                (dec!(0.0059), dec!(0.0062), dec!(0.0064)),
                (dec!(0.0064), dec!(0.0067), dec!(0.007)),
                (dec!(0.0067), dec!(0.0071), dec!(0.0074)),
                (dec!(0.0073), dec!(0.0076), dec!(0.0079)),
            ),
        ),
        (
            36,
            four(
                (dec!(0.0053), dec!(0.0056), dec!(0.0058)),
                (dec!(0.0057), dec!(0.006), dec!(0.0063)),
                (dec!(0.006), dec!(0.0064), dec!(0.0067)),
                (dec!(0.0065), dec!(0.0068), dec!(0.0071)),
            ),
        ),
        (
            37,
            four(
                (dec!(0.0047), dec!(0.005), dec!(0.0052)),
                (dec!(0.0052), dec!(0.0055), dec!(0.0057)),
                (dec!(0.0054), dec!(0.0057), dec!(0.006)),
                (dec!(0.006), dec!(0.0063), dec!(0.0065)),
            ),
        ),
        (
            38,
            four(
                (dec!(0.0042), dec!(0.0045), dec!(0.0047)),
                (dec!(0.0046), dec!(0.0049), dec!(0.0051)),
                (dec!(0.0048), dec!(0.0051), dec!(0.0054)),
                (dec!(0.0053), dec!(0.0056), dec!(0.0058)),
            ),
        ),
        (
            39,
            four(
                (dec!(0.0036), dec!(0.0039), dec!(0.0041)),
                (dec!(0.004), dec!(0.0043), dec!(0.0045)),
                (dec!(0.0042), dec!(0.0045), dec!(0.0048)),
                (dec!(0.0046), dec!(0.0049), dec!(0.0051)),
            ),
        ),
        (
            40,
            four(
                (dec!(0.0032), dec!(0.0035), dec!(0.0037)),
                (dec!(0.0036), dec!(0.0038), dec!(0.004)),
                (dec!(0.0038), dec!(0.0041), dec!(0.0043)),
                (dec!(0.0042), dec!(0.0044), dec!(0.0046)),
            ),
        ),
        (
            41,
            four(
                (dec!(0.0029), dec!(0.0031), dec!(0.0033)),
                (dec!(0.0032), dec!(0.0034), dec!(0.0036)),
                (dec!(0.0034), dec!(0.0037), dec!(0.0039)),
                (dec!(0.0037), dec!(0.0039), dec!(0.0041)),
            ),
        ),
        (
            42,
            four(
                (dec!(0.0026), dec!(0.0028), dec!(0.003)),
                (dec!(0.0028), dec!(0.003), dec!(0.0032)),
                (dec!(0.0031), dec!(0.0033), dec!(0.0035)),
                (dec!(0.0032), dec!(0.0034), dec!(0.0036)),
            ),
        ),
        (
            43,
            four(
                (dec!(0.0023), dec!(0.0025), dec!(0.0026)),
                (dec!(0.0025), dec!(0.0027), dec!(0.0029)),
                (dec!(0.0027), dec!(0.003), dec!(0.0032)),
                (dec!(0.0029), dec!(0.0031), dec!(0.0033)),
            ),
        ),
        (
            44,
            four(
                (dec!(0.0021), dec!(0.0023), dec!(0.0024)),
                (dec!(0.0023), dec!(0.0025), dec!(0.0027)),
                (dec!(0.0025), dec!(0.0027), dec!(0.0029)),
                (dec!(0.0027), dec!(0.0029), dec!(0.0031)),
            ),
        ),
        (
            45,
            two(
                (dec!(0.00179), dec!(0.00192), dec!(0.00205)),
                (dec!(0.00199), dec!(0.00215), dec!(0.0023)),
            ),
        ),
        (
            46,
            two(
                (dec!(0.00161), dec!(0.00173), dec!(0.00185)),
                (dec!(0.00181), dec!(0.00196), dec!(0.0021)),
            ),
        ),
        (
            47,
            two(
                (dec!(0.00145), dec!(0.00157), dec!(0.0017)),
                (dec!(0.00165), dec!(0.00178), dec!(0.0019)),
            ),
        ),
        (
            48,
            two(
                (dec!(0.00129), dec!(0.0014), dec!(0.0015)),
                (dec!(0.00139), dec!(0.00155), dec!(0.0017)),
            ),
        ),
        (
            49,
            two(
                (dec!(0.00117), dec!(0.00124), dec!(0.0013)),
                (dec!(0.00127), dec!(0.00139), dec!(0.0015)),
            ),
        ),
        (
            50,
            two(
                (dec!(0.00105), dec!(0.00113), dec!(0.0012)),
                (dec!(0.00115), dec!(0.00128), dec!(0.0014)),
            ),
        ),
    ])
});

/// All film bands for a gauge.
pub fn film_thicknesses(awg: u32) -> LitzResult<&'static FilmThicknesses> {
    FILM_THICKNESSES
        .get(&awg)
        .ok_or_else(|| LitzError::unknown_awg(awg, "magnet wire film thickness"))
}

/// Strand OD band for one film build at one gauge.
///
/// Fails with [`LitzError::FilmUnavailable`] when the build is not offered.
pub fn film_band(awg: u32, film: FilmType) -> LitzResult<FilmBand> {
    let band = film_thicknesses(awg)?.band(film);
    if !band.is_available() {
        return Err(LitzError::film_unavailable(film.display_name(), awg));
    }
    Ok(band)
}

/// Strand OD reference used for insulated constructions.
///
/// Insulated litz is always built from single-build strands, so the
/// reference is the single-build column regardless of the film selected
/// for bare constructions.
pub fn strand_od_reference(awg: u32) -> LitzResult<FilmBand> {
    film_thicknesses(awg)
        .map(|row| row.single)
        .map_err(|_| LitzError::unknown_awg(awg, "strand OD reference"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_band_lookup() {
        let band = film_band(36, FilmType::Single).unwrap();
        assert_eq!(band.nom, dec!(0.0056));
        assert_eq!(band.min, dec!(0.0053));
        assert_eq!(band.max, dec!(0.0058));
    }

    #[test]
    fn test_unavailable_builds() {
        for awg in [12, 13, 45, 46, 47, 48, 49, 50] {
            assert!(matches!(
                film_band(awg, FilmType::Triple),
                Err(LitzError::FilmUnavailable { .. })
            ));
            assert!(film_band(awg, FilmType::Quadruple).is_err());
            assert!(film_band(awg, FilmType::Heavy).is_ok());
        }
    }

    #[test]
    fn test_unknown_gauge() {
        assert!(matches!(
            film_band(11, FilmType::Single),
            Err(LitzError::UnknownAwg { awg: 11, .. })
        ));
        assert!(strand_od_reference(51).is_err());
    }

    #[test]
    fn test_strand_od_reference_is_single_column() {
        for awg in 12..=50 {
            assert_eq!(
                strand_od_reference(awg).unwrap(),
                film_band(awg, FilmType::Single).unwrap()
            );
        }
    }

    #[test]
    fn test_film_codes_and_parse() {
        let codes: String = FilmType::ALL.iter().map(|f| f.code()).collect();
        assert_eq!(codes, "SHTQ");
        assert_eq!("heavy".parse::<FilmType>().unwrap(), FilmType::Heavy);
        assert_eq!("Q".parse::<FilmType>().unwrap(), FilmType::Quadruple);
        assert!("double".parse::<FilmType>().is_err());
    }
}
