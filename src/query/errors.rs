//! Query-level error types.
//!
//! All validation errors are raised synchronously, before any network call is
//! made, with zero side effects on the query. Once a request has been sent,
//! transport failures pass through as [`HttpError`] without retry or recovery.
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::QueryError;
//!
//! match query.fetch(&client, &["name=Gandalf"]).await {
//!     Ok(()) => println!("{} docs", query.results.len()),
//!     Err(QueryError::InvalidFilter { filter }) => println!("bad filter: {filter}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for query construction and execution.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An unknown sub-resource was requested.
    ///
    /// The message echoes the exact URL that would have been requested, to
    /// aid debugging against the live API's own error reporting.
    #[error("Invalid URL used: {url}")]
    InvalidResource {
        /// The fully composed URL that was rejected.
        url: String,
    },

    /// Disallowed pagination key(s) were present.
    ///
    /// Only the offending keys are listed, in their original insertion order.
    #[error("Invalid pagination keys used: {keys:?}")]
    InvalidPagination {
        /// The pagination keys outside the allowed set.
        keys: Vec<String>,
    },

    /// A filter expression was malformed.
    #[error("Malformed filter parameter '{filter}' found.")]
    InvalidFilter {
        /// The offending raw filter string.
        filter: String,
    },

    /// A transport-level failure (non-2xx response or network error).
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify QueryError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_resource_message_contains_full_url() {
        let error = QueryError::InvalidResource {
            url: "https://the-one-api.dev/v2/test/sample/error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid URL used: https://the-one-api.dev/v2/test/sample/error"
        );
    }

    #[test]
    fn test_invalid_pagination_message_lists_offending_keys() {
        let error = QueryError::InvalidPagination {
            keys: vec!["pointer".to_string()],
        };
        assert_eq!(
            error.to_string(),
            r#"Invalid pagination keys used: ["pointer"]"#
        );
    }

    #[test]
    fn test_invalid_filter_message_names_raw_string() {
        let error = QueryError::InvalidFilter {
            filter: "name=Frodo=Gandalf".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed filter parameter 'name=Frodo=Gandalf' found."
        );
    }

    #[test]
    fn test_http_error_passes_through_transparently() {
        let error: QueryError = HttpError::Response(HttpResponseError {
            code: 429,
            message: "Too many requests.".to_string(),
        })
        .into();

        assert!(matches!(error, QueryError::Http(_)));
        assert_eq!(error.to_string(), "Too many requests.");
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let error: &dyn std::error::Error = &QueryError::InvalidFilter {
            filter: "=".to_string(),
        };
        let _ = error;
    }
}
