//! # Error Types
//!
//! Structured error types for bridge_core. Errors carry enough context
//! to be handled programmatically by CLI, web, or report layers without
//! string matching.
//!
//! Note that a structurally *inadequate* design is NOT an error at this
//! level: capacity exceedances are recorded in the design report's
//! `errors` list so a single run can surface every failing check at once.
//! `CalcError` is reserved for inputs the engine cannot work with.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_mm: f64) -> CalcResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "effective_span",
//!             span_mm.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design-engine operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by downstream consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Requested vehicle class not found in the catalog
    #[error("Unknown vehicle designation: {name}")]
    VehicleNotFound { name: String },

    /// Calculation failed (degenerate geometry, unstable iteration, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a VehicleNotFound error
    pub fn vehicle_not_found(name: impl Into<String>) -> Self {
        CalcError::VehicleNotFound { name: name.into() }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::VehicleNotFound { .. } => "VEHICLE_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("effective_span", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_field("girder_spacing").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CalcError::vehicle_not_found("CLASS_Z").error_code(),
            "VEHICLE_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::vehicle_not_found("CLASS_Z");
        assert!(error.to_string().contains("CLASS_Z"));
    }
}
