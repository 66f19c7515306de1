//! Chapter resource constructors.
//!
//! Book chapters, each linked to its volume. Chapters have no sub-resources
//! of their own.

use crate::query::{ResourceQuery, ResourceSpec};

/// Configuration for the `chapter` resource.
pub const CHAPTER: ResourceSpec = ResourceSpec::new("chapter", &[]);

/// Queries the whole chapter collection.
#[must_use]
pub fn chapters() -> ResourceQuery {
    ResourceQuery::new(CHAPTER)
}

/// Queries a single chapter by id.
#[must_use]
pub fn chapter(id: impl Into<String>) -> ResourceQuery {
    ResourceQuery::with_id(CHAPTER, id)
}
