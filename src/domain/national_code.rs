//! NationalCode value object.

use super::errors::{ValidationError, NATIONAL_CODE_INVALID};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pattern a national code must match, untrimmed.
pub const NATIONAL_CODE_PATTERN: &str = r"^(\d{3})[-\ ]?(\d{6})[-\ ]?(\d{1})$";

/// Longest string the national code pattern accepts (`XXX-XXXXXX-X`).
pub const NATIONAL_CODE_MAX_LENGTH: usize = 12;

static NATIONAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(NATIONAL_CODE_PATTERN)
        .unicode(false)
        .build()
        .expect("Failed to compile national code regex")
});

/// A validated Iranian national code in `XXX-XXXXXX-X` form.
///
/// Each separator may be a hyphen, a space, or absent, independently of
/// the other. The input is kept exactly as given: it is neither trimmed
/// nor regrouped.
///
/// All-zero groups such as `000-000000-0` are accepted here. Use
/// [`NationalCode::has_zero_group`] to reject them.
///
/// # Example
///
/// ```
/// use ir_localflavor::domain::NationalCode;
///
/// let code = NationalCode::new("123-456789 0").unwrap();
/// assert_eq!(code.as_str(), "123-456789 0");
/// assert_eq!(code.digits(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalCode(String);

impl NationalCode {
    /// Create a new NationalCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the input does not match
    /// `XXX-XXXXXX-X`, including when it carries surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !Self::is_valid(&raw) {
            tracing::debug!(len = raw.len(), "rejected national code");
            return Err(ValidationError::InvalidFormat(NATIONAL_CODE_INVALID));
        }

        Ok(Self(raw))
    }

    /// Check a value against the national code pattern.
    pub fn is_valid(value: &str) -> bool {
        NATIONAL_CODE_REGEX.is_match(value)
    }

    /// Get the national code as a string slice, separators included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The three digit groups (3, 6 and 1 digits).
    pub fn groups(&self) -> (&str, &str, &str) {
        // SAFETY: Constructor validates the pattern, so all groups are present
        let caps = NATIONAL_CODE_REGEX
            .captures(&self.0)
            .expect("national code validated against pattern");
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        (group(1), group(2), group(3))
    }

    /// The ten digits with separators removed.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether any group consists entirely of zeroes.
    pub fn has_zero_group(&self) -> bool {
        let (first, second, third) = self.groups();
        [first, second, third]
            .iter()
            .any(|group| group.bytes().all(|b| b == b'0'))
    }
}

/// Validate an optional national code.
///
/// `None` and the empty string yield `Ok(None)`. Any other input is matched
/// as-is and returned unchanged on success.
pub fn validate(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw {
        None | Some("") => {
            tracing::trace!("empty national code passed through");
            Ok(None)
        }
        Some(value) => NationalCode::new(value).map(|code| Some(code.into_inner())),
    }
}

// Serde support - serialize as string
impl Serialize for NationalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for NationalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NationalCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for NationalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NationalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
