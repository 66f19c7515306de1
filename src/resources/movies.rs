//! Movie resource constructors.
//!
//! Covers the Lord of the Rings and Hobbit trilogies plus their series
//! entries. Movies expose one sub-resource: the quotes spoken in a film.
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::resources;
//!
//! // All movies, sorted by name
//! let mut query = resources::movies();
//! query.sort_by("name:asc");
//! query.fetch(&client, &[] as &[&str]).await?;
//!
//! // Quotes from one film
//! let mut quotes = resources::movie_quotes("5cd95395de30eff6ebccde5b");
//! quotes.paginate("limit", 20);
//! quotes.fetch(&client, &[] as &[&str]).await?;
//! ```

use crate::query::{ResourceQuery, ResourceSpec};

/// Configuration for the `movie` resource.
pub const MOVIE: ResourceSpec = ResourceSpec::new("movie", &["quote"]);

/// Queries the whole movie collection.
#[must_use]
pub fn movies() -> ResourceQuery {
    ResourceQuery::new(MOVIE)
}

/// Queries a single movie by id.
#[must_use]
pub fn movie(id: impl Into<String>) -> ResourceQuery {
    ResourceQuery::with_id(MOVIE, id)
}

/// Queries the quotes of a single movie.
#[must_use]
pub fn movie_quotes(id: impl Into<String>) -> ResourceQuery {
    let mut query = ResourceQuery::with_id(MOVIE, id);
    query.set_sub_resource("quote");
    query
}
