//! Serializable validation outcomes.
//!
//! The CLI prints one [`ValidationReport`] per checked value as a JSON line.

use crate::fields::{FieldError, NationalCodeField, PostalCodeField};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// The kind of code being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    PostalCode,
    NationalCode,
}

impl FromStr for CodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postal-code" | "postal" => Ok(Self::PostalCode),
            "national-code" | "national" => Ok(Self::NationalCode),
            other => Err(format!(
                "unknown code kind '{}', expected postal-code or national-code",
                other
            )),
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostalCode => write!(f, "postal-code"),
            Self::NationalCode => write!(f, "national-code"),
        }
    }
}

/// Details of a rejected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportError {
    pub code: &'static str,
    pub message: String,
}

impl From<&FieldError> for ReportError {
    fn from(err: &FieldError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// The outcome of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub kind: CodeKind,
    pub input: String,
    pub valid: bool,
    /// Cleaned value; `None` for empty input or on failure.
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

impl ValidationReport {
    fn from_result(
        kind: CodeKind,
        input: &str,
        result: Result<Option<String>, FieldError>,
    ) -> Self {
        match result {
            Ok(value) => Self {
                kind,
                input: input.to_string(),
                valid: true,
                value,
                error: None,
            },
            Err(err) => Self {
                kind,
                input: input.to_string(),
                valid: false,
                value: None,
                error: Some(ReportError::from(&err)),
            },
        }
    }
}

/// Validates values of either kind with a fixed pair of fields.
#[derive(Debug, Clone)]
pub struct Checker {
    postal_code: PostalCodeField,
    national_code: NationalCodeField,
}

impl Checker {
    pub fn new(postal_code: PostalCodeField, national_code: NationalCodeField) -> Self {
        Self {
            postal_code,
            national_code,
        }
    }

    /// Validate `input` as the given kind.
    pub fn check(&self, kind: CodeKind, input: &str) -> ValidationReport {
        let result = match kind {
            CodeKind::PostalCode => self
                .postal_code
                .clean(Some(input))
                .map(|code| code.map(|c| c.into_inner())),
            CodeKind::NationalCode => self
                .national_code
                .clean(Some(input))
                .map(|code| code.map(|c| c.into_inner())),
        };
        ValidationReport::from_result(kind, input, result)
    }

    /// Validate every value and write one JSON report per line to `out`.
    ///
    /// Returns `true` when all values were valid.
    pub fn run<I, W>(&self, kind: CodeKind, values: I, mut out: W) -> io::Result<bool>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
    {
        let mut all_valid = true;

        for value in values {
            let report = self.check(kind, &value?);
            all_valid &= report.valid;
            serde_json::to_writer(&mut out, &report)?;
            out.write_all(b"\n")?;
        }

        out.flush()?;
        Ok(all_valid)
    }

    /// Validate each line of `input`, with line endings stripped.
    pub fn run_lines<R, W>(&self, kind: CodeKind, input: R, out: W) -> io::Result<bool>
    where
        R: BufRead,
        W: Write,
    {
        self.run(kind, input.lines(), out)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(
            PostalCodeField::postal_code(),
            NationalCodeField::national_code(),
        )
    }
}
