//! # litz_core - Litz Wire Calculation Engine
//!
//! `litz_core` validates litz wire constructions and computes their finished
//! diameters, part numbers and approval warnings. Inputs and outputs are
//! JSON-serializable so quoting tools and scripts can drive it directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over static reference tables
//! - **Exact**: Dimensions are decimals, rounded half away from zero only at the end
//! - **JSON-First**: All request and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use litz_core::calculations::{calculate_bare_diameters, calculate_litz_construction};
//! use litz_core::tables::{FilmType, LitzType};
//! use rust_decimal_macros::dec;
//!
//! let construction = calculate_litz_construction(200, 36, LitzType::Type1, "MW 79-C").unwrap();
//! assert!(construction.is_valid);
//! assert_eq!(construction.packing_factor, dec!(1.155));
//!
//! let bare = calculate_bare_diameters(200, 36, construction.packing_factor, "MW 79-C", FilmType::Single).unwrap();
//! assert_eq!(bare.part_number, "RL-200-36S79-XX");
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - AWG, film, construction factor and grade reference data
//! - [`calculations`] - Strand validation, construction, diameters, electrical
//! - [`rules`] - Minimum wall, UL approval and manufacturing rules
//! - [`part_number`] - Part number formatting
//! - [`design`] - Whole-design requests and reports
//! - [`units`] - Rounding and unit conversions
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod design;
pub mod errors;
pub mod part_number;
pub mod rules;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::{evaluate_design, DesignReport, DesignRequest, WireType};
pub use errors::{LitzError, LitzResult};
