//! Validator trait and the two code validators.
//!
//! A validator only decides whether a non-empty value is well formed.
//! Whether a blank value is acceptable is left to the caller (see
//! [`crate::fields::Field`]).

use crate::domain::{NationalCode, PostalCode, ValidationError, NATIONAL_CODE_INVALID};

/// A stateless check that turns raw text into a typed value.
pub trait Validator {
    /// The validated value type.
    type Output;

    /// Validate a non-empty raw value.
    fn validate(&self, raw: &str) -> Result<Self::Output, ValidationError>;

    /// Whether `raw` counts as "no input".
    fn is_empty_value(&self, raw: &str) -> bool {
        raw.is_empty()
    }

    /// Validate optional input, passing empty values through as `None`.
    fn clean(&self, raw: Option<&str>) -> Result<Option<Self::Output>, ValidationError> {
        match raw {
            Some(value) if !self.is_empty_value(value) => self.validate(value).map(Some),
            _ => Ok(None),
        }
    }
}

/// Validates and trims ten-digit postal codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostalCodeValidator;

impl Validator for PostalCodeValidator {
    type Output = PostalCode;

    fn validate(&self, raw: &str) -> Result<PostalCode, ValidationError> {
        PostalCode::new(raw)
    }

    fn is_empty_value(&self, raw: &str) -> bool {
        raw.trim().is_empty()
    }
}

/// Validates national codes in `XXX-XXXXXX-X` format.
///
/// By default codes with all-zero groups are accepted. Enable the zero
/// group check to reject them as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalCodeValidator {
    reject_zero_groups: bool,
}

impl NationalCodeValidator {
    /// Create a validator that accepts any code matching the pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle rejection of codes where a group is all zeroes.
    pub fn with_zero_group_check(mut self, enabled: bool) -> Self {
        self.reject_zero_groups = enabled;
        self
    }

    /// Whether codes with an all-zero group are rejected.
    pub fn rejects_zero_groups(&self) -> bool {
        self.reject_zero_groups
    }
}

impl Validator for NationalCodeValidator {
    type Output = NationalCode;

    fn validate(&self, raw: &str) -> Result<NationalCode, ValidationError> {
        let code = NationalCode::new(raw)?;

        if self.reject_zero_groups && code.has_zero_group() {
            tracing::debug!(len = raw.len(), "rejected national code with all-zero group");
            return Err(ValidationError::InvalidFormat(NATIONAL_CODE_INVALID));
        }

        Ok(code)
    }
}
