//! Domain validation errors.

use thiserror::Error;

/// Message for a rejected postal code.
pub const POSTAL_CODE_INVALID: &str = "Enter a postal code in the format XXXXXXXXXX.";

/// Message for a rejected national code.
pub const NATIONAL_CODE_INVALID: &str =
    "Enter a valid IR. National Code in XXX-XXXXXX-X format.";

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input does not match the required format.
    #[error("{0}")]
    InvalidFormat(&'static str),
}

impl ValidationError {
    /// Machine-readable error code, stable across message changes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "invalid",
        }
    }

    /// Human-readable message describing the expected format.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat(message) => message,
        }
    }
}
