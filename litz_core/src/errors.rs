//! # Error Types
//!
//! Structured error types for litz_core.
//!
//! The engine separates two channels:
//!
//! - **Expected invalid input** (a strand count that cannot be bundled at a
//!   gauge) is never an error. It comes back as a record with
//!   `is_valid = false` and a message the caller can show.
//! - **Contract violations** (a gauge with no reference row, a film build
//!   that is not offered at a gauge, an operation count outside the
//!   construction table) are returned as [`LitzError`].
//!
//! ## Example
//!
//! ```rust
//! use litz_core::errors::{LitzError, LitzResult};
//!
//! fn check_layers(layers: u8) -> LitzResult<()> {
//!     if !(1..=3).contains(&layers) {
//!         return Err(LitzError::invalid_input(
//!             "layers",
//!             layers.to_string(),
//!             "Layer count must be 1, 2 or 3",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_layers(4).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for litz_core operations
pub type LitzResult<T> = Result<T, LitzError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LitzError {
    /// No reference row exists for the requested gauge
    #[error("No reference data for AWG {awg} in {table}")]
    UnknownAwg { awg: u32, table: String },

    /// The film build is not manufactured at this gauge
    #[error("{film} film not available for AWG {awg}")]
    FilmUnavailable { film: String, awg: u32 },

    /// Operation count has no row in the construction factor table
    #[error("{litz_type} constructions do not support {operations} operations")]
    UnsupportedOperations { litz_type: String, operations: u32 },

    /// An input value is outside its domain (layer count, serve type, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A lookup table is missing a row it is expected to carry
    #[error("Missing reference row '{key}' in {table}")]
    MissingReference { table: String, key: String },

    /// JSON (de)serialization of a request or report failed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LitzError {
    /// Create an UnknownAwg error
    pub fn unknown_awg(awg: u32, table: impl Into<String>) -> Self {
        LitzError::UnknownAwg {
            awg,
            table: table.into(),
        }
    }

    /// Create a FilmUnavailable error
    pub fn film_unavailable(film: impl Into<String>, awg: u32) -> Self {
        LitzError::FilmUnavailable {
            film: film.into(),
            awg,
        }
    }

    /// Create an UnsupportedOperations error
    pub fn unsupported_operations(litz_type: impl Into<String>, operations: u32) -> Self {
        LitzError::UnsupportedOperations {
            litz_type: litz_type.into(),
            operations,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LitzError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingReference error
    pub fn missing_reference(table: impl Into<String>, key: impl Into<String>) -> Self {
        LitzError::MissingReference {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        LitzError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LitzError::UnknownAwg { .. } => "UNKNOWN_AWG",
            LitzError::FilmUnavailable { .. } => "FILM_UNAVAILABLE",
            LitzError::UnsupportedOperations { .. } => "UNSUPPORTED_OPERATIONS",
            LitzError::InvalidInput { .. } => "INVALID_INPUT",
            LitzError::MissingReference { .. } => "MISSING_REFERENCE",
            LitzError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LitzError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for LitzError {
    fn from(err: serde_json::Error) -> Self {
        LitzError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = LitzError::film_unavailable("Triple", 12);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"FilmUnavailable\""));
        let roundtrip: LitzError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_film_unavailable_message() {
        let error = LitzError::film_unavailable("Triple", 12);
        assert_eq!(error.to_string(), "Triple film not available for AWG 12");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LitzError::unknown_awg(7, "AWG reference").error_code(), "UNKNOWN_AWG");
        assert_eq!(
            LitzError::unsupported_operations("Type 1", 4).error_code(),
            "UNSUPPORTED_OPERATIONS"
        );
        assert_eq!(LitzError::internal("boom").error_code(), "INTERNAL_ERROR");
    }
}
