//! Query construction and execution.
//!
//! This module is the core of the SDK:
//!
//! - [`ResourceQuery`]: the generic builder shared by every resource, covering
//!   URL composition, pagination validation, filter conversion, parameter
//!   collection, and fetch
//! - [`ResourceSpec`]: the per-resource configuration value object
//! - [`Envelope`]: splits a response body into `docs` and metadata
//! - [`QueryError`]: the caller-facing error taxonomy
//!
//! Resource specializations live in [`crate::resources`]; they are thin
//! constructors handing `ResourceSpec` constants to `ResourceQuery`.

mod builder;
mod envelope;
mod errors;
mod spec;

pub use builder::ResourceQuery;
pub use envelope::Envelope;
pub use errors::QueryError;
pub use spec::ResourceSpec;
