//! Book resource constructors.
//!
//! The three volumes of The Lord of the Rings. Books expose one sub-resource:
//! their chapters. Book endpoints are the only ones the upstream API serves
//! without authentication, but the client sends the bearer header regardless.

use crate::query::{ResourceQuery, ResourceSpec};

/// Configuration for the `book` resource.
pub const BOOK: ResourceSpec = ResourceSpec::new("book", &["chapter"]);

/// Queries the whole book collection.
#[must_use]
pub fn books() -> ResourceQuery {
    ResourceQuery::new(BOOK)
}

/// Queries a single book by id.
#[must_use]
pub fn book(id: impl Into<String>) -> ResourceQuery {
    ResourceQuery::with_id(BOOK, id)
}

/// Queries the chapters of a single book.
#[must_use]
pub fn book_chapters(id: impl Into<String>) -> ResourceQuery {
    let mut query = ResourceQuery::with_id(BOOK, id);
    query.set_sub_resource("chapter");
    query
}
