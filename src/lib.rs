//! # One API Rust SDK
//!
//! A Rust SDK for [the-one-api.dev](https://the-one-api.dev), the Lord of the
//! Rings API. The crate builds endpoint URLs, validates pagination, converts
//! filter expressions into query parameters, and parses the JSON response
//! envelope into results and metadata.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A generic [`ResourceQuery`] builder shared by every resource
//! - Thin resource specializations via [`resources`] (books, movies,
//!   characters, quotes, chapters)
//! - Type-safe configuration via [`OneApiConfig`] and [`ApiToken`]
//! - A bearer-authenticated HTTP client over reqwest via [`HttpClient`]
//! - Fail-fast validation: every query error is raised before a request is sent
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use one_api::{resources, ApiToken, HttpClient, OneApiConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Configure with an explicit token (or OneApiConfig::from_env())
//! let config = OneApiConfig::builder()
//!     .token(ApiToken::new("your-access-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! // Build and run a query
//! let mut query = resources::movies();
//! query.paginate("limit", 10);
//! query.sort_by("name:asc");
//! query.fetch(&client, &["budgetInMillions<100"]).await?;
//!
//! for movie in &query.results {
//!     println!("{}", movie["name"]);
//! }
//! println!("{} movies total", query.meta["total"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Filters
//!
//! Filter expressions are passed to [`ResourceQuery::fetch`] as raw strings in
//! the upstream API's own grammar:
//!
//! - `name=Gandalf`: an equality filter, sent as `name=Gandalf`
//! - `budgetInMillions<100`: an operator filter carrying its own comparison,
//!   sent as a bare key with no value
//! - `name`: a bare existence check
//!
//! Malformed expressions (an empty string, or more than one `=`) fail with
//! [`QueryError::InvalidFilter`] before anything is sent.
//!
//! ## Pagination
//!
//! One fetch returns one page. Advancing is the caller's responsibility:
//!
//! ```rust,no_run
//! # use one_api::resources;
//! let mut query = resources::characters();
//! query.paginate("limit", 50);
//! query.paginate("page", 2);
//! ```
//!
//! Keys outside `{limit, page, offset}` fail with
//! [`QueryError::InvalidPagination`]; values are left to the API to judge.
//!
//! ## Design Principles
//!
//! - **No global state**: the token is threaded in explicitly via
//!   [`OneApiConfig`]; [`OneApiConfig::from_env`] is an opt-in convenience
//! - **Composition over hierarchy**: resources are [`ResourceSpec`] values
//!   handed to one builder type, not a trait tree
//! - **Fail-fast validation**: invalid input never reaches the network
//! - **One request per fetch**: no retry, caching, or page auto-advance

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError};
pub use config::{ApiToken, OneApiConfig, OneApiConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use query::{Envelope, QueryError, ResourceQuery, ResourceSpec};
