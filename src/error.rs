//! Error types for ir-localflavor.
//!
//! Validation errors live next to the value objects in
//! [`crate::domain::errors`]; this module holds the crate-level errors.

use thiserror::Error;

pub use crate::domain::ValidationError;
pub use crate::fields::FieldError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "IR_NATIONAL_CODE_REJECT_ZERO_GROUPS".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert!(err.to_string().contains("IR_NATIONAL_CODE_REJECT_ZERO_GROUPS"));
        assert!(err.to_string().contains("Must be true or false"));
    }
}
