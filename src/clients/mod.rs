//! HTTP transport layer.
//!
//! This module wraps `reqwest` behind a small bearer-authenticated client:
//!
//! - [`HttpClient`]: issues single GET requests with default headers
//! - [`HttpResponse`]: a parsed 2xx response (status code + JSON body)
//! - [`HttpError`] / [`HttpResponseError`]: transport-level failures
//!
//! The query layer in [`crate::query`] composes URLs and parameters; this
//! layer only sends them and reports the outcome.

mod errors;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::HttpClient;
pub use http_response::HttpResponse;
