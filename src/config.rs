//! Configuration types for the SDK.
//!
//! The main types in this module are:
//!
//! - [`OneApiConfig`]: the configuration struct holding all SDK settings
//! - [`OneApiConfigBuilder`]: a builder for constructing [`OneApiConfig`] instances
//! - [`ApiToken`]: a validated bearer token newtype with masked debug output
//!
//! Configuration is instance-based and passed explicitly. The only place the
//! process environment is consulted is [`OneApiConfig::from_env`], an opt-in
//! convenience; nothing in the SDK reads ambient global state on its own.
//!
//! # Example
//!
//! ```rust
//! use one_api::{ApiToken, OneApiConfig};
//!
//! let config = OneApiConfig::builder()
//!     .token(ApiToken::new("my-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://the-one-api.dev/v2");
//! ```

use std::fmt;

use crate::error::ConfigError;

/// Default base URL for the-one-api.dev v2 endpoints.
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2";

/// Environment variable consulted by [`OneApiConfig::from_env`].
pub const TOKEN_ENV_VAR: &str = "ONE_API_TOKEN";

/// A validated bearer token for the-one-api.dev.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use one_api::ApiToken;
///
/// let token = ApiToken::new("my-access-token").unwrap();
/// assert_eq!(token.as_ref(), "my-access-token");
/// assert_eq!(format!("{token:?}"), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// Configuration for the SDK.
///
/// Holds the bearer token, the API base URL, and an optional User-Agent
/// prefix. The base URL is overridable so tests can point the client at a
/// local mock server.
///
/// # Thread Safety
///
/// `OneApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct OneApiConfig {
    token: ApiToken,
    base_url: String,
    user_agent_prefix: Option<String>,
}

impl OneApiConfig {
    /// Creates a new builder for constructing a `OneApiConfig`.
    #[must_use]
    pub fn builder() -> OneApiConfigBuilder {
        OneApiConfigBuilder::new()
    }

    /// Creates a configuration with the token read from the `ONE_API_TOKEN`
    /// environment variable and all other settings at their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTokenVar`] if the variable is unset or
    /// not valid Unicode, or [`ConfigError::EmptyApiToken`] if it is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| ConfigError::MissingTokenVar { var: TOKEN_ENV_VAR })?;
        Self::builder().token(ApiToken::new(raw)?).build()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`OneApiConfig`].
///
/// # Example
///
/// ```rust
/// use one_api::{ApiToken, OneApiConfig};
///
/// let config = OneApiConfig::builder()
///     .token(ApiToken::new("my-access-token").unwrap())
///     .base_url("http://localhost:8080/v2")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct OneApiConfigBuilder {
    token: Option<ApiToken>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl OneApiConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Overrides the API base URL. A trailing slash is stripped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no token was set.
    pub fn build(self) -> Result<OneApiConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let base_url = self
            .base_url
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |url| {
                url.trim_end_matches('/').to_string()
            });

        Ok(OneApiConfig {
            token,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiToken>();
    assert_send_sync::<OneApiConfig>();
};
