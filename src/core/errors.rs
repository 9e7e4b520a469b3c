//! Error types for the movewarn library.
//!
//! The error surface is deliberately small: wrappers never translate errors
//! from the targets they forward to, so the only failures movewarn itself can
//! report are configuration mistakes made at wrapper-construction time.

use thiserror::Error;

/// Main result type for movewarn operations.
pub type Result<T> = std::result::Result<T, MovewarnError>;

/// Error type for all movewarn operations.
#[derive(Error, Debug)]
pub enum MovewarnError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// A moved-type wrapper was asked to stand in for something that is not a
    /// nominal type (a closure, function pointer, reference, tuple, slice, or
    /// trait object).
    #[error("Unexpected class type '{type_name}' (expected class type only)")]
    UnexpectedClassType {
        /// Resolved name of the offending type
        type_name: String,
    },
}

impl MovewarnError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new unexpected-class-type error
    pub fn unexpected_class_type(type_name: impl Into<String>) -> Self {
        Self::UnexpectedClassType {
            type_name: type_name.into(),
        }
    }
}
