//! # Reference Data Tables
//!
//! Static lookup data transcribed from the legacy design sheet. Every table
//! is built once on first access and is read-only afterwards.
//!
//! - [`awg`]: per-gauge diameter, CMA, stranded CMA, single-operation
//!   strand limits and maximum DC resistance
//! - [`film`]: magnet wire film builds and strand OD bands
//! - [`construction`]: packing and take-up factors
//! - [`insulation`]: extruded jacket materials and layer counts
//! - [`grades`]: magnet wire grade codes for part numbers

pub mod awg;
pub mod construction;
pub mod film;
pub mod grades;
pub mod insulation;

pub use awg::{
    awg_spec, awg_specs, max_dcr_ohm_per_kft, max_strands_single_op, AwgSpec, MAX_CONSTRUCTION_AWG,
    MIN_CONSTRUCTION_AWG,
};
pub use construction::{
    construction_factors, packing_factor, take_up_factor, ConstructionFactors, LitzType,
    MAX_OPERATIONS,
};
pub use film::{
    film_band, film_thicknesses, strand_od_reference, FilmBand, FilmThicknesses, FilmType,
};
pub use grades::{
    bare_grade_code, insulated_grade_code, DEFAULT_MAGNET_WIRE_GRADE, UNKNOWN_GRADE_CODE,
};
pub use insulation::{InsulationLayers, InsulationType};
