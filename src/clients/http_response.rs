//! HTTP response representation.

/// A parsed HTTP response from the API.
///
/// Only successful responses are represented this way; non-2xx responses are
/// surfaced as [`HttpResponseError`](crate::HttpResponseError) with the raw
/// body text, before any JSON parsing takes place.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }
}
