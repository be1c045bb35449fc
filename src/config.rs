//! Configuration management for ir-localflavor.
//!
//! Configuration is read from environment variables, optionally seeded from
//! a `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::validator::NationalCodeValidator;
use std::env;

/// Environment variable toggling the all-zero group check.
pub const REJECT_ZERO_GROUPS_VAR: &str = "IR_NATIONAL_CODE_REJECT_ZERO_GROUPS";

/// Configuration for the validators and the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reject national codes with an all-zero group (default: false)
    pub reject_zero_groups: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `IR_NATIONAL_CODE_REJECT_ZERO_GROUPS`: `true`/`false`/`1`/`0` (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let reject_zero_groups = Self::parse_env_bool(REJECT_ZERO_GROUPS_VAR, false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            reject_zero_groups,
            log_level,
        })
    }

    /// Build the national code validator this configuration describes.
    pub fn national_code_validator(&self) -> NationalCodeValidator {
        NationalCodeValidator::new().with_zero_group_check(self.reject_zero_groups)
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reject_zero_groups: false,
            log_level: "error".to_string(),
        }
    }
}
