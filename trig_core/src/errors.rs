//! # Error Types
//!
//! Structured error types for trig_core. Domain edges (tangent singularities,
//! out-of-range inverse inputs) are never errors: they surface as "undefined"
//! display values or plotting gaps. Errors only come from input validation at
//! the shell boundary and from settings file I/O.
//!
//! ## Example
//!
//! ```rust
//! use trig_core::errors::{TrigError, TrigResult};
//!
//! fn validate_amplitude(amplitude: f64) -> TrigResult<()> {
//!     if amplitude <= 0.0 {
//!         return Err(TrigError::InvalidInput {
//!             field: "amplitude".to_string(),
//!             value: amplitude.to_string(),
//!             reason: "Amplitude must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trig_core operations
pub type TrigResult<T> = Result<T, TrigError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TrigError {
    /// An input value is outside the range the section accepts
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TrigError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        TrigError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        TrigError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TrigError::InvalidInput { .. } => "INVALID_INPUT",
            TrigError::MissingField { .. } => "MISSING_FIELD",
            TrigError::FileError { .. } => "FILE_ERROR",
            TrigError::SerializationError { .. } => "SERIALIZATION_ERROR",
            TrigError::VersionMismatch { .. } => "VERSION_MISMATCH",
            TrigError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Check that `value` lies in `[min, max]`, reporting `field` on failure.
pub(crate) fn check_range(field: &str, value: f64, min: f64, max: f64) -> TrigResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(TrigError::invalid_input(
            field,
            value.to_string(),
            format!("Must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TrigError::invalid_input("amplitude", "-1", "Amplitude must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: TrigError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TrigError::missing_field("angle").error_code(), "MISSING_FIELD");
        assert_eq!(TrigError::file_error("read", "x.json", "gone").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("angle", 45.0, 0.0, 360.0).is_ok());
        assert!(check_range("angle", 0.0, 0.0, 360.0).is_ok());
        assert!(check_range("angle", 360.5, 0.0, 360.0).is_err());
        assert!(check_range("angle", f64::NAN, 0.0, 360.0).is_err());
    }
}
