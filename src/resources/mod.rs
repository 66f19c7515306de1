//! Resource specializations.
//!
//! One small module per upstream resource, each holding a
//! [`ResourceSpec`](crate::ResourceSpec) constant and convenience constructors
//! that hand it to the generic [`ResourceQuery`](crate::ResourceQuery). The
//! resource and sub-resource names form a closed set matching the upstream
//! API:
//!
//! | Resource    | Sub-resources |
//! |-------------|---------------|
//! | `book`      | `chapter`     |
//! | `movie`     | `quote`       |
//! | `character` | `quote`       |
//! | `quote`     | none          |
//! | `chapter`   | none          |

mod books;
mod chapters;
mod characters;
mod movies;
mod quotes;

pub use books::{book, book_chapters, books, BOOK};
pub use chapters::{chapter, chapters, CHAPTER};
pub use characters::{character, character_quotes, characters, CHARACTER};
pub use movies::{movie, movie_quotes, movies, MOVIE};
pub use quotes::{quote, quotes, QUOTE};
