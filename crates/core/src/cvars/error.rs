//! Error types for name-based CVar access

use super::flags::CVarType;

/// Error type for name-based CVar operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CVarError {
    /// No CVar is registered under the name
    #[error("CVar not found: {0}")]
    NotFound(String),

    /// The CVar holds a different scalar kind than requested
    #[error("CVar {name} holds {actual} values, not {requested}")]
    TypeMismatch {
        name: String,
        actual: CVarType,
        requested: CVarType,
    },

    /// Text could not be parsed as the CVar's kind
    #[error("Invalid value '{value}' for {name} (expected type: {expected})")]
    InvalidValue {
        name: String,
        value: String,
        expected: CVarType,
    },
}

/// Result type for name-based CVar operations
pub type CVarResult<T> = Result<T, CVarError>;
