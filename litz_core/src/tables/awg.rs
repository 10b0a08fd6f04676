//! AWG Reference Data
//!
//! Per-gauge bare diameter, solid circular-mil area and stranded CMA, the
//! maximum strand count a single bundling operation can take, and the
//! per-gauge maximum DC resistance.
//!
//! ## Which CMA?
//!
//! - `diameter_in` drives the displayed copper area: `(d × 1000)²` per strand.
//! - `cma` is the tabulated solid value; it is what the equivalent-gauge
//!   search compares against.
//! - `stranded_cma` accounts for the voids between strands and feeds the
//!   minimum insulation wall rules.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LitzError, LitzResult};

/// One row of the AWG reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwgSpec {
    /// American Wire Gauge number
    pub awg: u32,
    /// Nominal bare copper diameter (inches)
    pub diameter_in: Decimal,
    /// Solid conductor circular-mil area
    pub cma: Decimal,
    /// Circular-mil area credited to a stranded conductor of this gauge
    pub stranded_cma: Decimal,
}

/// Smallest gauge (largest wire) a litz construction can be requested in
pub const MIN_CONSTRUCTION_AWG: u32 = 10;

/// Largest gauge (finest wire) a litz construction can be requested in
pub const MAX_CONSTRUCTION_AWG: u32 = 50;

fn row(awg: u32, diameter_in: Decimal, cma: Decimal, stranded_cma: Decimal) -> (u32, AwgSpec) {
    (
        awg,
        AwgSpec {
            awg,
            diameter_in,
            cma,
            stranded_cma,
        },
    )
}

static AWG_REFERENCE: Lazy<BTreeMap<u32, AwgSpec>> = Lazy::new(|| {
    BTreeMap::from([
        row(1, dec!(0.2893), dec!(83690), dec!(82016)),
        row(2, dec!(0.2576), dec!(66390), dec!(65033)),
        row(3, dec!(0.2294), dec!(52620), dec!(51568)),
        row(4, dec!(0.2043), dec!(41740), dec!(40905)),
        row(5, dec!(0.1819), dec!(33090), dec!(32428)),
        row(6, dec!(0.162), dec!(26240), dec!(25715)),
        row(7, dec!(0.1443), dec!(20820), dec!(20404)),
        row(8, dec!(0.1285), dec!(16510), dec!(16180)),
        row(9, dec!(0.1144), dec!(13090), dec!(12828)),
        row(10, dec!(0.1019), dec!(10380), dec!(10172)),
        row(11, dec!(0.0907), dec!(8230), dec!(8065)),
        row(12, dec!(0.0808), dec!(6530), dec!(6399)),
        row(13, dec!(0.072), dec!(5184), dec!(5076)),
        row(14, dec!(0.0641), dec!(4110), dec!(4028)),
        row(15, dec!(0.0571), dec!(3260), dec!(3195)),
        row(16, dec!(0.0508), dec!(2580), dec!(2528)),
        row(17, dec!(0.0453), dec!(2050), dec!(2009)),
        row(18, dec!(0.0403), dec!(1620), dec!(1588)),
        row(19, dec!(0.0359), dec!(1290), dec!(1264)),
        row(20, dec!(0.032), dec!(1024), dec!(1000)),
        row(21, dec!(0.0285), dec!(812), dec!(796)),
        row(22, dec!(0.0253), dec!(640), dec!(627)),
        row(23, dec!(0.0226), dec!(511), dec!(501)),
        row(24, dec!(0.0201), dec!(404), dec!(396)),
        row(25, dec!(0.0179), dec!(320), dec!(314)),
        row(26, dec!(0.0159), dec!(253), dec!(248)),
        row(27, dec!(0.0142), dec!(202), dec!(198)),
        row(28, dec!(0.0126), dec!(159), dec!(156)),
        row(29, dec!(0.0113), dec!(128), dec!(125)),
        row(30, dec!(0.01), dec!(100), dec!(98)),
        row(31, dec!(0.0089), dec!(79.2), dec!(77.6)),
        row(32, dec!(0.008), dec!(64), dec!(62.7)),
        row(33, dec!(0.0071), dec!(50.4), dec!(49.4)),
        row(34, dec!(0.0063), dec!(39.7), dec!(38.9)),
        row(35, dec!(0.0056), dec!(31.4), dec!(30.8)),
        row(36, dec!(0.005), dec!(25), dec!(24.5)),
        row(37, dec!(0.0045), dec!(20.2), dec!(19.8)),
        row(38, dec!(0.004), dec!(16), dec!(15.7)),
        row(39, dec!(0.0035), dec!(12.2), dec!(11.9)),
        row(40, dec!(0.0031), dec!(9.61), dec!(9.42)),
        row(41, dec!(0.0028), dec!(7.84), dec!(7.68)),
        row(42, dec!(0.0025), dec!(6.25), dec!(6.13)),
        row(43, dec!(0.0022), dec!(4.84), dec!(4.74)),
        row(44, dec!(0.002), dec!(4), dec!(3.92)),
        row(45, dec!(0.00176), dec!(3.1), dec!(3.04)),
        row(46, dec!(0.00157), dec!(2.46), dec!(2.41)),
        row(47, dec!(0.0014), dec!(1.96), dec!(1.92)),
        row(48, dec!(0.00124), dec!(1.54), dec!(1.51)),
        row(49, dec!(0.00111), dec!(1.23), dec!(1.21)),
        row(50, dec!(0.00099), dec!(0.98), dec!(0.96)),
    ])
});

/// Maximum strands usable in one bundling operation, by gauge.
static MAX_STRANDS_SINGLE_OP: Lazy<BTreeMap<u32, u32>> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    for awg in 10..=13 {
        table.insert(awg, 0);
    }
    for awg in 14..=16 {
        table.insert(awg, 1);
    }
    table.insert(17, 2);
    table.insert(18, 2);
    table.insert(19, 3);
    table.insert(20, 4);
    table.insert(21, 5);
    table.insert(22, 7);
    table.insert(23, 9);
    table.insert(24, 11);
    table.insert(25, 15);
    table.insert(26, 19);
    table.insert(27, 23);
    table.insert(28, 29);
    table.insert(29, 37);
    table.insert(30, 47);
    table.insert(31, 60);
    for awg in 32..=46 {
        table.insert(awg, 66);
    }
    for awg in 47..=50 {
        table.insert(awg, 21);
    }
    table
});

/// Maximum DC resistance of a single strand, Ω per 1000 ft at 20 °C.
static MAX_DCR_OHM_PER_KFT: Lazy<BTreeMap<u32, f64>> = Lazy::new(|| {
    BTreeMap::from([
        (12, 1.62),
        (13, 2.04),
        (14, 2.57),
        (15, 3.25),
        (16, 4.10),
        (17, 5.17),
        (18, 6.51),
        (19, 8.23),
        (20, 10.32),
        (21, 13.04),
        (22, 16.59),
        (23, 20.67),
        (24, 26.19),
        (25, 33.10),
        (26, 42.07),
        (27, 52.17),
        (28, 66.37),
        (29, 82.68),
        (30, 105.82),
        (31, 133.92),
        (32, 166.18),
        (33, 211.65),
        (34, 269.80),
        (35, 342.84),
        (36, 431.95),
        (37, 535.69),
        (38, 681.85),
        (39, 897.15),
        (40, 1152.33),
        (41, 1422.63),
        (42, 1800.52),
        (43, 2351.70),
        (44, 2872.85),
        (45, 3616.00),
        (46, 4544.00),
        (47, 5714.00),
        (48, 7285.00),
        (49, 9090.00),
        (50, 11430.00),
    ])
});

/// Look up the reference row for a gauge.
pub fn awg_spec(awg: u32) -> LitzResult<&'static AwgSpec> {
    AWG_REFERENCE
        .get(&awg)
        .ok_or_else(|| LitzError::unknown_awg(awg, "AWG reference"))
}

/// All reference rows, ordered by gauge.
pub fn awg_specs() -> impl Iterator<Item = &'static AwgSpec> {
    AWG_REFERENCE.values()
}

/// Maximum strands for one bundling operation; gauges missing from the table get 0.
pub fn max_strands_single_op(awg: u32) -> u32 {
    MAX_STRANDS_SINGLE_OP.get(&awg).copied().unwrap_or(0)
}

/// Maximum single-strand DC resistance (Ω/1000 ft at 20 °C).
pub fn max_dcr_ohm_per_kft(awg: u32) -> LitzResult<f64> {
    MAX_DCR_OHM_PER_KFT
        .get(&awg)
        .copied()
        .ok_or_else(|| LitzError::missing_reference("max DCR", format!("AWG {}", awg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_covers_1_to_50() {
        assert_eq!(awg_specs().count(), 50);
        assert_eq!(awg_spec(36).unwrap().diameter_in, dec!(0.005));
        assert!(awg_spec(51).is_err());
        assert!(awg_spec(0).is_err());
    }

    #[test]
    fn test_max_strands_bands() {
        assert_eq!(max_strands_single_op(10), 0);
        assert_eq!(max_strands_single_op(13), 0);
        assert_eq!(max_strands_single_op(22), 7);
        assert_eq!(max_strands_single_op(36), 66);
        assert_eq!(max_strands_single_op(46), 66);
        assert_eq!(max_strands_single_op(47), 21);
        assert_eq!(max_strands_single_op(50), 21);
        // Outside the table
        assert_eq!(max_strands_single_op(8), 0);
        assert_eq!(max_strands_single_op(60), 0);
    }

    #[test]
    fn test_max_dcr() {
        assert_eq!(max_dcr_ohm_per_kft(36).unwrap(), 431.95);
        assert_eq!(max_dcr_ohm_per_kft(10).unwrap_err().error_code(), "MISSING_REFERENCE");
    }
}
