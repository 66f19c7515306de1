//! Response envelope handling.
//!
//! Every list endpoint of the-one-api.dev wraps its payload in the same JSON
//! envelope:
//!
//! ```json
//! { "docs": [...], "total": 8, "limit": 1000, "offset": 0, "page": 1, "pages": 1 }
//! ```
//!
//! [`Envelope::from_body`] splits that body into the `docs` array and a map of
//! every other field, which the query builder stores as `results` and `meta`.

use serde_json::{Map, Value};

/// A response body split into results and pagination metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    /// The `docs` array. Empty if the body carried no `docs` field.
    pub docs: Vec<Value>,
    /// Every envelope field except `docs` (`total`, `limit`, `offset`,
    /// `page`, `pages`, and whatever else the API chooses to send).
    pub meta: Map<String, Value>,
}

impl Envelope {
    /// Splits a response body into `docs` and metadata.
    ///
    /// A missing or non-array `docs` field yields an empty result list; a
    /// non-object body yields an empty envelope. The upstream API is the
    /// source of truth for which metadata fields exist.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        let Value::Object(mut map) = body else {
            return Self::default();
        };

        let docs = match map.remove("docs") {
            Some(Value::Array(docs)) => docs,
            _ => Vec::new(),
        };

        Self { docs, meta: map }
    }
}
