//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for Iranian postal codes and
//! national codes. These value objects validate at construction time so an
//! invalid code can never be represented in the system.

pub mod errors;
pub mod national_code;
pub mod postal_code;

pub use errors::{ValidationError, NATIONAL_CODE_INVALID, POSTAL_CODE_INVALID};
pub use national_code::{NationalCode, NATIONAL_CODE_MAX_LENGTH, NATIONAL_CODE_PATTERN};
pub use postal_code::{PostalCode, POSTAL_CODE_PATTERN};
