//! # Electrical Properties
//!
//! DC resistance of a litz construction and the skin-effect figures used to
//! pick a strand gauge for a frequency.
//!
//! ```text
//! R_dc (Ω/1000 ft) = R_strand × (1 + α(T − 20)) / strands × take-up
//! ρ(T)             = 1.72e-8 × (1 + α(T − 20))          Ω·m
//! δ                = √(ρ / (π μ₀ f))                    m
//! N1 max           = ⌊4 δ² / d²⌋                        d = strand diameter, m
//! ```
//!
//! Copper constants are fixed; α = 0.00393 /°C.

use std::f64::consts::PI;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::construction::LitzConstruction;
use crate::errors::{LitzError, LitzResult};
use crate::tables::{awg_spec, max_dcr_ohm_per_kft};

/// Temperature coefficient of resistance for copper, per °C
pub const COPPER_TEMP_COEFF: f64 = 0.00393;

/// Copper resistivity at the reference temperature, Ω·m
pub const COPPER_RESISTIVITY_20C: f64 = 1.72e-8;

pub const REFERENCE_TEMP_C: f64 = 20.0;

/// Permeability of free space, H/m
pub const MU_0: f64 = 4.0e-7 * PI;

const METERS_PER_INCH: f64 = 0.0254;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricalProperties {
    pub temperature_c: f64,
    pub frequency_hz: f64,
    /// Ω per 1000 ft of finished litz
    pub dc_resistance_ohm_per_kft: f64,
    pub resistivity_ohm_m: f64,
    pub skin_depth_mm: f64,
    /// Largest strand count per bundle before proximity losses dominate
    pub n1_max: u64,
}

fn temperature_factor(temperature_c: f64) -> f64 {
    1.0 + COPPER_TEMP_COEFF * (temperature_c - REFERENCE_TEMP_C)
}

fn to_f64(value: Decimal, what: &str) -> LitzResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| LitzError::internal(format!("{} {} does not fit in f64", what, value)))
}

/// Electrical figures for a valid construction.
pub fn calculate_electrical_properties(
    construction: &LitzConstruction,
    temperature_c: f64,
    frequency_hz: f64,
) -> LitzResult<ElectricalProperties> {
    if !construction.is_valid {
        return Err(LitzError::invalid_input(
            "construction",
            construction.validation_message.clone(),
            "Electrical properties need a valid construction",
        ));
    }
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(LitzError::invalid_input(
            "frequency_hz",
            frequency_hz.to_string(),
            "Frequency must be positive",
        ));
    }
    if !temperature_c.is_finite() {
        return Err(LitzError::invalid_input(
            "temperature_c",
            temperature_c.to_string(),
            "Temperature must be a finite number",
        ));
    }

    let awg = construction.wire_awg;
    let take_up = to_f64(construction.take_up_factor, "take-up factor")?;
    let strand_dcr = max_dcr_ohm_per_kft(awg)? * temperature_factor(temperature_c);
    let dc_resistance = strand_dcr / f64::from(construction.total_strands) * take_up;

    let resistivity = COPPER_RESISTIVITY_20C * temperature_factor(temperature_c);
    let skin_depth_m = (resistivity / (PI * MU_0 * frequency_hz)).sqrt();

    let strand_diameter_m =
        to_f64(awg_spec(awg)?.diameter_in, "strand diameter")? * METERS_PER_INCH;
    let n1_max = (4.0 * skin_depth_m * skin_depth_m / (strand_diameter_m * strand_diameter_m))
        .floor() as u64;

    Ok(ElectricalProperties {
        temperature_c,
        frequency_hz,
        dc_resistance_ohm_per_kft: dc_resistance,
        resistivity_ohm_m: resistivity,
        skin_depth_mm: skin_depth_m * 1000.0,
        n1_max,
    })
}
