//! Quote resource constructors.
//!
//! Movie quotes, each linked to its movie and character. Quotes have no
//! sub-resources of their own.

use crate::query::{ResourceQuery, ResourceSpec};

/// Configuration for the `quote` resource.
pub const QUOTE: ResourceSpec = ResourceSpec::new("quote", &[]);

/// Queries the whole quote collection.
#[must_use]
pub fn quotes() -> ResourceQuery {
    ResourceQuery::new(QUOTE)
}

/// Queries a single quote by id.
#[must_use]
pub fn quote(id: impl Into<String>) -> ResourceQuery {
    ResourceQuery::with_id(QUOTE, id)
}
