//! Character resource constructors.
//!
//! Characters of Middle-earth, with metadata like race, gender, and realm.
//! Characters expose one sub-resource: the quotes they speak.

use crate::query::{ResourceQuery, ResourceSpec};

/// Configuration for the `character` resource.
pub const CHARACTER: ResourceSpec = ResourceSpec::new("character", &["quote"]);

/// Queries the whole character collection.
#[must_use]
pub fn characters() -> ResourceQuery {
    ResourceQuery::new(CHARACTER)
}

/// Queries a single character by id.
#[must_use]
pub fn character(id: impl Into<String>) -> ResourceQuery {
    ResourceQuery::with_id(CHARACTER, id)
}

/// Queries the quotes of a single character.
#[must_use]
pub fn character_quotes(id: impl Into<String>) -> ResourceQuery {
    let mut query = ResourceQuery::with_id(CHARACTER, id);
    query.set_sub_resource("quote");
    query
}
