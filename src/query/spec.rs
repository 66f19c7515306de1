//! Resource configuration value objects.
//!
//! Each API resource is described by a [`ResourceSpec`]: its collection name
//! and the sub-resources that may nest under one of its entities. The specs
//! are plain data handed to the generic [`ResourceQuery`](crate::ResourceQuery)
//! builder; there is no per-resource type hierarchy.

/// Configuration for one top-level API resource.
///
/// # Example
///
/// ```rust
/// use one_api::ResourceSpec;
///
/// const MOVIE: ResourceSpec = ResourceSpec::new("movie", &["quote"]);
///
/// assert_eq!(MOVIE.name, "movie");
/// assert!(MOVIE.allows_sub_resource("quote"));
/// assert!(!MOVIE.allows_sub_resource("chapter"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// The collection name as it appears in the URL path (e.g. `"movie"`).
    pub name: &'static str,
    /// Sub-resource names that may nest under an entity of this resource.
    pub sub_resources: &'static [&'static str],
}

impl ResourceSpec {
    /// Creates a new `ResourceSpec`.
    ///
    /// This is a `const fn` to allow specs to be defined as constants.
    #[must_use]
    pub const fn new(name: &'static str, sub_resources: &'static [&'static str]) -> Self {
        Self {
            name,
            sub_resources,
        }
    }

    /// Checks whether `name` is an allowed sub-resource of this resource.
    #[must_use]
    pub fn allows_sub_resource(&self, name: &str) -> bool {
        self.sub_resources.contains(&name)
    }
}

// Verify ResourceSpec is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceSpec>();
};
