//! Error taxonomy for quantity construction, conversion and parsing
//!
//! Every failure is deterministic for a given input and registry state,
//! so nothing here is retryable. Each variant carries a machine-readable
//! code (see [`codes`]) and an optional suggestion for the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const NON_FINITE_VALUE: &str = "NON_FINITE_VALUE";
    pub const UNSUPPORTED_UNIT: &str = "UNSUPPORTED_UNIT";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const UNRECOGNIZED_UNIT: &str = "UNRECOGNIZED_UNIT";
    pub const AMBIGUOUS_UNIT: &str = "AMBIGUOUS_UNIT";
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const ARGUMENT_NULL: &str = "ARGUMENT_NULL";
}

/// Errors raised by the throwing APIs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitsError {
    #[error("{quantity} can not be created with an undefined unit")]
    InvalidUnit { quantity: String },

    #[error("Value must be a finite number, got {value}")]
    NonFiniteValue { value: f64 },

    #[error("{quantity} has no conversion for unit {unit}")]
    UnsupportedUnit { quantity: String, unit: String },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Unit abbreviation '{abbreviation}' is not a recognized {quantity} unit for culture {culture}")]
    UnrecognizedUnit {
        quantity: String,
        abbreviation: String,
        culture: String,
    },

    #[error("Unit abbreviation '{abbreviation}' is ambiguous for {quantity}: it matches {}", .candidates.join(", "))]
    AmbiguousUnit {
        quantity: String,
        abbreviation: String,
        /// Names of every matching unit, in registration order
        candidates: Vec<String>,
        /// Numeric values of every matching unit, parallel to `candidates`
        values: Vec<i32>,
    },

    #[error("Unable to parse '{input}': {reason}")]
    FormatError { input: String, reason: String },

    #[error("Argument '{0}' must not be empty")]
    ArgumentNull(String),
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, UnitsError>;

impl UnitsError {
    pub fn invalid_unit(quantity: impl Into<String>) -> Self {
        Self::InvalidUnit { quantity: quantity.into() }
    }

    pub fn non_finite(value: f64) -> Self {
        Self::NonFiniteValue { value }
    }

    pub fn unsupported_unit(quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn unrecognized_unit(
        quantity: impl Into<String>,
        abbreviation: impl Into<String>,
        culture: impl Into<String>,
    ) -> Self {
        Self::UnrecognizedUnit {
            quantity: quantity.into(),
            abbreviation: abbreviation.into(),
            culture: culture.into(),
        }
    }

    pub fn format_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FormatError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn argument_null(name: impl Into<String>) -> Self {
        Self::ArgumentNull(name.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => codes::INVALID_UNIT,
            Self::NonFiniteValue { .. } => codes::NON_FINITE_VALUE,
            Self::UnsupportedUnit { .. } => codes::UNSUPPORTED_UNIT,
            Self::InvalidArgument { .. } => codes::INVALID_ARGUMENT,
            Self::UnrecognizedUnit { .. } => codes::UNRECOGNIZED_UNIT,
            Self::AmbiguousUnit { .. } => codes::AMBIGUOUS_UNIT,
            Self::FormatError { .. } => codes::FORMAT_ERROR,
            Self::ArgumentNull(_) => codes::ARGUMENT_NULL,
        }
    }

    /// Suggestion for fixing the error, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidUnit { .. } => Some("Pick one of the quantity's listed units".to_string()),
            Self::NonFiniteValue { .. } => Some("Use a value that is neither NaN nor infinite".to_string()),
            Self::UnrecognizedUnit { abbreviation, .. } => Some(format!(
                "Register '{}' for the intended unit or check spelling",
                abbreviation
            )),
            Self::AmbiguousUnit { candidates, .. } => Some(format!(
                "Use an abbreviation that names exactly one of: {}",
                candidates.join(", ")
            )),
            Self::FormatError { .. } => Some("Expected \"<number> <unit>\", e.g. \"5.5 m\"".to_string()),
            _ => None,
        }
    }

    /// Flatten into a serializable report
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Serializable snapshot of a [`UnitsError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
