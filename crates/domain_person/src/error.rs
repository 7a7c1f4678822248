//! Person domain errors

use core_kernel::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur while constructing a person
#[derive(Debug, Error)]
pub enum PersonError {
    /// A field failed a format or range rule
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The aggregate's variant does not match its declared type
    #[error("Person type {declared} does not match {actual} identity")]
    TypeMismatch {
        declared: String,
        actual: String,
    },

    /// No factory is registered for the requested person type
    #[error("Unsupported person type: {0}")]
    UnsupportedPersonType(String),

    /// A factory was registered under a type it cannot build
    #[error("Factory cannot build persons of type {0}")]
    FactoryMismatch(String),
}

impl PersonError {
    /// Creates a Validation error for a named field
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        PersonError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a Validation error for a missing required field
    pub fn required(field: &'static str) -> Self {
        PersonError::invalid(field, "is required")
    }

    /// Name of the offending field, when the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PersonError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl Classify for PersonError {
    fn kind(&self) -> ErrorKind {
        match self {
            PersonError::Validation { .. } => ErrorKind::Validation,
            PersonError::TypeMismatch { .. }
            | PersonError::UnsupportedPersonType(_)
            | PersonError::FactoryMismatch(_) => ErrorKind::Configuration,
        }
    }
}
