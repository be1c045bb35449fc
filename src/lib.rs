//! ir-localflavor - validators for Iranian postal codes and national codes.
//!
//! Both validators are pure functions of their input. Empty input is never
//! an error at this layer; callers that need a value use [`fields::Field`]
//! with `required(true)`.
//!
//! # Architecture
//!
//! - **domain**: `PostalCode` and `NationalCode` value objects, plus the
//!   `normalize_and_validate` / `validate` entry points
//! - **validator**: the `Validator` trait and its two implementations
//! - **fields**: required / max-length options layered over a validator
//! - **report**: serializable validation outcomes for the CLI
//! - **config**: configuration from environment variables
//! - **error**: crate-level error types
//!
//! # Example
//!
//! ```
//! use ir_localflavor::{national_code, postal_code};
//!
//! assert_eq!(
//!     postal_code::normalize_and_validate(Some(" 1234567890 ")),
//!     Ok(Some("1234567890".to_string()))
//! );
//! assert_eq!(national_code::validate(Some("")), Ok(None));
//! assert!(national_code::validate(Some(" 123-456789-0")).is_err());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod report;
pub mod validator;

pub use config::Config;
pub use domain::{national_code, postal_code, NationalCode, PostalCode, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use fields::{Field, FieldError, NationalCodeField, PostalCodeField};
pub use report::{Checker, CodeKind, ValidationReport};
pub use validator::{NationalCodeValidator, PostalCodeValidator, Validator};
