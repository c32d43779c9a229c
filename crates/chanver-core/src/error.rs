//! Error types for chanver.

use thiserror::Error;

/// Result type alias using chanver's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for conversion operations.
///
/// Conversion is a pure in-memory transformation, so the only way it can
/// fail is being handed an object it does not know how to convert. Missing
/// optional fields are valid absent states, never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The conversion argument is not a member of the supported version pair.
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// What the converting type accepts.
        expected: &'static str,
        /// Concrete type of the rejected argument.
        got: &'static str,
    },
}

impl Error {
    /// Build a [`Error::TypeMismatch`] for a rejected argument type.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Type name carried by a mismatch, for caller diagnostics.
    pub fn rejected_type(&self) -> &'static str {
        match self {
            Error::TypeMismatch { got, .. } => got,
        }
    }
}
