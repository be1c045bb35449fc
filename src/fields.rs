//! Field options layered over a validator.
//!
//! A [`Field`] adds the caller-side policy a validator deliberately leaves
//! out: whether a blank value is allowed and how long the stored value may
//! be.

use crate::domain::{NationalCode, PostalCode, ValidationError, NATIONAL_CODE_MAX_LENGTH};
use crate::validator::{NationalCodeValidator, PostalCodeValidator, Validator};
use thiserror::Error;

/// Errors returned by [`Field::clean`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field received no input.
    #[error("This field is required.")]
    Required,

    /// The input is longer than the field allows.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },

    /// The validator rejected the input.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl FieldError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLong { .. } => "max_length",
            Self::Invalid(err) => err.code(),
        }
    }
}

/// A validator plus the options of the field it backs.
#[derive(Debug, Clone)]
pub struct Field<V> {
    validator: V,
    description: &'static str,
    required: bool,
    max_length: Option<usize>,
}

impl<V: Validator> Field<V> {
    /// Create an optional field with no length limit.
    pub fn new(validator: V, description: &'static str) -> Self {
        Self {
            validator,
            description,
            required: false,
            max_length: None,
        }
    }

    /// Set whether blank input is rejected.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the maximum length in characters.
    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_length
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Clean raw input according to the field options.
    ///
    /// The required and length checks see the trimmed input; the validator
    /// always sees the raw input.
    ///
    /// # Errors
    ///
    /// - `FieldError::Required` for blank input on a required field
    /// - `FieldError::TooLong` when the trimmed input exceeds `max_length`
    /// - `FieldError::Invalid` when the validator rejects the input
    pub fn clean(&self, raw: Option<&str>) -> Result<Option<V::Output>, FieldError> {
        let trimmed = raw.map_or("", str::trim);

        if self.required && trimmed.is_empty() {
            return Err(FieldError::Required);
        }

        if let Some(max) = self.max_length {
            let actual = trimmed.chars().count();
            if actual > max {
                return Err(FieldError::TooLong { max, actual });
            }
        }

        match raw {
            Some(value) if !self.validator.is_empty_value(value) => {
                Ok(Some(self.validator.validate(value)?))
            }
            _ => Ok(None),
        }
    }
}

impl Field<PostalCodeValidator> {
    /// An optional postal code field.
    pub fn postal_code() -> Self {
        Field::new(PostalCodeValidator, "IR. postal code")
    }
}

impl Field<NationalCodeValidator> {
    /// An optional national code field limited to twelve characters.
    pub fn national_code() -> Self {
        Self::national_code_with(NationalCodeValidator::new())
    }

    /// A national code field backed by a configured validator.
    pub fn national_code_with(validator: NationalCodeValidator) -> Self {
        Field::new(validator, "National code").max_length(Some(NATIONAL_CODE_MAX_LENGTH))
    }
}

/// Shorthand for a postal code field.
pub type PostalCodeField = Field<PostalCodeValidator>;

/// Shorthand for a national code field.
pub type NationalCodeField = Field<NationalCodeValidator>;

/// Clean with the stock postal code field.
pub fn clean_postal_code(raw: Option<&str>) -> Result<Option<PostalCode>, FieldError> {
    PostalCodeField::postal_code().clean(raw)
}

/// Clean with the stock national code field.
pub fn clean_national_code(raw: Option<&str>) -> Result<Option<NationalCode>, FieldError> {
    NationalCodeField::national_code().clean(raw)
}
