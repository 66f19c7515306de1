//! Error types for SDK configuration.
//!
//! This module contains the error type returned by configuration constructors.
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation.
//!
//! # Example
//!
//! ```rust
//! use one_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing SDK configuration.
///
/// Each variant carries a clear, actionable message so callers can report
/// misconfiguration without digging through source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Sign up at https://the-one-api.dev to obtain one.")]
    EmptyApiToken,

    /// The environment variable holding the token is missing or unreadable.
    #[error("Environment variable '{var}' is not set. Export it or pass the token explicitly.")]
    MissingTokenVar {
        /// The name of the environment variable that was consulted.
        var: &'static str,
    },

    /// A required field is missing from the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
