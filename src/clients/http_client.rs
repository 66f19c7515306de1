//! HTTP client for the-one-api.dev communication.
//!
//! This module provides the [`HttpClient`] type for making bearer-authenticated
//! GET requests against the API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::OneApiConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the-one-api.dev.
///
/// The client handles:
/// - Base URL resolution from configuration
/// - Default headers including User-Agent and the bearer token
/// - Response parsing for successful requests
///
/// One fetch issues exactly one request: there is no retry, caching, or
/// pagination auto-advance at this layer.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use one_api::{ApiToken, HttpClient, OneApiConfig};
///
/// let config = OneApiConfig::builder()
///     .token(ApiToken::new("my-access-token")?)
///     .build()?;
/// let client = HttpClient::new(&config);
///
/// let response = client.get("https://the-one-api.dev/v2/movie").await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g. `https://the-one-api.dev/v2`), without a trailing slash.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The bearer token is read from the configuration once, here; requests
    /// never consult ambient process state.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS initialization
    /// failure).
    #[must_use]
    pub fn new(config: &OneApiConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}One API Rust Library v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a single GET request to the given URL.
    ///
    /// The URL is expected to be fully composed, query string included; this
    /// method adds only the default headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent,
    /// [`HttpError::Response`] for non-2xx responses, and [`HttpError::Decode`]
    /// when a successful response carries a body that is not valid JSON. On a
    /// non-2xx response the body is carried as raw text, not parsed as JSON.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!("GET {url}");

        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();

        if !(200..300).contains(&code) {
            tracing::warn!("Request to {url} failed with status {code}");
            let body_text = res.text().await.unwrap_or_default();
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
            }));
        }

        let body_text = res.text().await?;
        let body = serde_json::from_str(&body_text)?;

        Ok(HttpResponse::new(code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn create_test_config() -> OneApiConfig {
        OneApiConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_config_base_url() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.base_url(), "https://the-one-api.dev/v2");
    }

    #[test]
    fn test_authorization_header_uses_bearer_scheme() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("One API Rust Library v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = OneApiConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
