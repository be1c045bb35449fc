//! PostalCode value object.

use super::errors::{ValidationError, POSTAL_CODE_INVALID};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pattern a trimmed postal code must match.
pub const POSTAL_CODE_PATTERN: &str = r"^\d{10}$";

// ASCII mode keeps `\d` to 0-9.
static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(POSTAL_CODE_PATTERN)
        .unicode(false)
        .build()
        .expect("Failed to compile postal code regex")
});

/// A validated Iranian postal code: exactly ten ASCII digits.
///
/// Surrounding whitespace is trimmed at construction time; whitespace
/// inside the code is rejected.
///
/// # Example
///
/// ```
/// use ir_localflavor::domain::PostalCode;
///
/// let code = PostalCode::new("  1234567890 ").unwrap();
/// assert_eq!(code.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Create a new PostalCode from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` unless the trimmed input is
    /// exactly ten digits.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();

        if !Self::is_valid(trimmed) {
            tracing::debug!(len = trimmed.len(), "rejected postal code");
            return Err(ValidationError::InvalidFormat(POSTAL_CODE_INVALID));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Check an already-trimmed value against the postal code pattern.
    pub fn is_valid(value: &str) -> bool {
        POSTAL_CODE_REGEX.is_match(value)
    }

    /// Get the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Normalize and validate an optional postal code.
///
/// `None`, the empty string and whitespace-only input all yield `Ok(None)`;
/// the caller decides whether a blank value is acceptable. Anything else is
/// trimmed and must be exactly ten digits.
pub fn normalize_and_validate(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => {
            tracing::trace!("empty postal code passed through");
            Ok(None)
        }
        Some(value) => PostalCode::new(value).map(|code| Some(code.into_inner())),
    }
}

// Serde support - serialize as string
impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PostalCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
