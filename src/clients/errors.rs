//! HTTP-specific error types.
//!
//! The SDK uses specific error types for the failure scenarios the transport
//! can hit:
//!
//! - [`HttpResponseError`]: a non-2xx HTTP response from the API
//! - [`HttpError`]: unified error type covering response, decode, and network
//!   failures
//!
//! There is no retry machinery; a failed request surfaces immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::HttpError;
//!
//! match client.get(&url).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Undecodable body: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-2xx response.
///
/// The message holds the raw response body text. The body is deliberately not
/// parsed on failure; the upstream API's error reporting is forwarded as-is.
///
/// # Example
///
/// ```rust
/// use one_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: "Unauthorized.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unauthorized.");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body text.
    pub message: String,
}

/// Unified error type for all HTTP-related failures.
///
/// Provides a single error type for transport operations so callers can
/// pattern-match at API boundaries.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
