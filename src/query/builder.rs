//! The generic resource query builder.
//!
//! [`ResourceQuery`] is the single builder type shared by every resource. A
//! caller constructs one (usually through the convenience constructors in
//! [`crate::resources`]), sets pagination, sort, and filter options, and then
//! calls [`ResourceQuery::fetch`] to issue exactly one GET request. On success
//! the response envelope is split onto the query: the `docs` array lands in
//! [`results`](ResourceQuery::results) and every other envelope field in
//! [`meta`](ResourceQuery::meta).
//!
//! All validation happens synchronously before the request is dispatched. On
//! any failure `results` and `meta` are left untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use one_api::{resources, HttpClient, OneApiConfig};
//!
//! let config = OneApiConfig::from_env()?;
//! let client = HttpClient::new(&config);
//!
//! let mut query = resources::movies();
//! query.paginate("limit", 10);
//! query.sort_by("name:asc");
//! query.fetch(&client, &["runtimeInMinutes<200"]).await?;
//!
//! for movie in &query.results {
//!     println!("{}", movie["name"]);
//! }
//! println!("total: {}", query.meta["total"]);
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::query::envelope::Envelope;
use crate::query::errors::QueryError;
use crate::query::spec::ResourceSpec;

/// Pagination keys accepted by the upstream API.
const PAGINATION_KEYS: &[&str] = &["limit", "page", "offset"];

/// A configurable query against one API resource.
///
/// Holds the resource configuration, an optional entity id, an optional
/// sub-resource, pagination pairs, and a sort option. Filters are passed to
/// [`fetch`](Self::fetch) directly since they apply to a single request.
///
/// # Invariants
///
/// - A sub-resource only makes sense nested under an entity, so setting one
///   requires an id; the convenience constructors in [`crate::resources`]
///   enforce this shape.
/// - Pagination keys must be within `{limit, page, offset}`; violations are
///   reported before any network call.
/// - `sortby` is forwarded verbatim under the `sortby` query key.
#[derive(Debug, Clone)]
pub struct ResourceQuery {
    spec: ResourceSpec,
    id: Option<String>,
    sub_resource: Option<String>,
    /// Pagination pairs in insertion order. Keys are validated against
    /// `{limit, page, offset}` at fetch time; values are never bounds-checked
    /// (the upstream API is the source of truth for numeric ranges).
    pub pagination: Vec<(String, String)>,
    /// Sort option in `"<field>:<asc|desc>"` form, forwarded verbatim.
    pub sortby: Option<String>,
    /// The `docs` array of the last successful fetch.
    pub results: Vec<Value>,
    /// Every envelope field except `docs` from the last successful fetch.
    pub meta: Map<String, Value>,
}

impl ResourceQuery {
    /// Creates a query over a whole resource collection.
    #[must_use]
    pub fn new(spec: ResourceSpec) -> Self {
        Self {
            spec,
            id: None,
            sub_resource: None,
            pagination: Vec::new(),
            sortby: None,
            results: Vec::new(),
            meta: Map::new(),
        }
    }

    /// Creates a query selecting a single entity by id.
    #[must_use]
    pub fn with_id(spec: ResourceSpec, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new(spec)
        }
    }

    /// Returns the resource configuration.
    #[must_use]
    pub const fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Returns the entity id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the sub-resource, if set.
    #[must_use]
    pub fn sub_resource(&self) -> Option<&str> {
        self.sub_resource.as_deref()
    }

    /// Selects a sub-resource nested under the entity.
    ///
    /// Membership in the allowed set is checked when the URL is built, so the
    /// error can echo the full URL that would have been requested.
    pub fn set_sub_resource(&mut self, name: impl Into<String>) {
        self.sub_resource = Some(name.into());
    }

    /// Appends a pagination pair.
    ///
    /// The value is stringified as-is; validation of the key happens at fetch
    /// time (or explicitly via [`validate_pagination`](Self::validate_pagination)).
    pub fn paginate(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pagination.push((key.into(), value.to_string()));
    }

    /// Sets the sort option, e.g. `"name:asc"`.
    pub fn sort_by(&mut self, sortby: impl Into<String>) {
        self.sortby = Some(sortby.into());
    }

    /// Composes the endpoint URL: `{base}/{resource}[/{id}][/{sub_resource}]`.
    ///
    /// Path segments are caller-controlled and assumed URL-safe; no escaping
    /// is performed.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidResource`] if the sub-resource is not in
    /// the allowed set for this resource. The error carries the exact URL
    /// that would have been requested.
    pub fn build_url(&self, base: &str) -> Result<String, QueryError> {
        let mut url = format!("{base}/{}", self.spec.name);
        if let Some(id) = &self.id {
            url.push('/');
            url.push_str(id);
        }
        if let Some(sub) = &self.sub_resource {
            url.push('/');
            url.push_str(sub);
            if !self.spec.allows_sub_resource(sub) {
                return Err(QueryError::InvalidResource { url });
            }
        }
        Ok(url)
    }

    /// Verifies all pagination keys are within `{limit, page, offset}`.
    ///
    /// Empty pagination is always valid. Values are not bounds-checked.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPagination`] listing only the offending
    /// keys, in their original insertion order.
    pub fn validate_pagination(&self) -> Result<(), QueryError> {
        let offending: Vec<String> = self
            .pagination
            .iter()
            .filter(|(key, _)| !PAGINATION_KEYS.contains(&key.as_str()))
            .map(|(key, _)| key.clone())
            .collect();

        if offending.is_empty() {
            Ok(())
        } else {
            Err(QueryError::InvalidPagination { keys: offending })
        }
    }

    /// Converts raw filter expressions into a query-parameter mapping.
    ///
    /// Each expression is split on `=` and classified by part count:
    ///
    /// - no `=` (e.g. `budgetInMillions<100`, or a bare existence check):
    ///   an *isolated* filter, mapped to an empty value so the serializer
    ///   emits the key alone, without `=`;
    /// - exactly one `=` with text on both sides (`name=Gandalf`): a *valued*
    ///   filter, mapped to `{field: value}`;
    /// - anything else (empty string, `=`, a dangling side, two or more `=`):
    ///   malformed.
    ///
    /// Conversion is atomic: the first malformed entry fails the whole call
    /// and nothing partial is returned. An empty input yields an empty map.
    ///
    /// Note the split-on-`=` rule means filter field and value text must not
    /// themselves contain `=`; this mirrors the upstream API's query grammar.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidFilter`] naming the offending raw string.
    pub fn convert_filters<S: AsRef<str>>(
        filters: &[S],
    ) -> Result<HashMap<String, String>, QueryError> {
        let mut converted = HashMap::new();

        for raw in filters {
            let raw = raw.as_ref();
            let parts: Vec<&str> = raw.split('=').collect();
            match parts.as_slice() {
                [isolated] if !isolated.is_empty() => {
                    converted.insert((*isolated).to_string(), String::new());
                }
                [field, value] if !field.is_empty() && !value.is_empty() => {
                    converted.insert((*field).to_string(), (*value).to_string());
                }
                _ => {
                    return Err(QueryError::InvalidFilter {
                        filter: raw.to_string(),
                    });
                }
            }
        }

        Ok(converted)
    }

    /// Merges filters, pagination, and sort into one flat parameter mapping.
    ///
    /// Precedence on key collision, lowest to highest: filters, pagination,
    /// `sortby`. The reserved keys (`limit`, `page`, `offset`, `sortby`) are
    /// disjoint from sensible filter field names, so collisions are not
    /// expected in practice; the overlay order is the tie-break if one occurs.
    #[must_use]
    pub fn collect_params(&self, filters: HashMap<String, String>) -> HashMap<String, String> {
        let mut params = filters;
        for (key, value) in &self.pagination {
            params.insert(key.clone(), value.clone());
        }
        if let Some(sortby) = &self.sortby {
            params.insert("sortby".to_string(), sortby.clone());
        }
        params
    }

    /// Executes the query: one GET request, one page of results.
    ///
    /// Orchestrates validation, URL composition, parameter collection, and
    /// the request itself. On success, overwrites [`results`](Self::results)
    /// and [`meta`](Self::meta) wholesale; advancing pages is the caller's
    /// responsibility via [`paginate`](Self::paginate) and a re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPagination`], [`QueryError::InvalidFilter`],
    /// or [`QueryError::InvalidResource`] before any network traffic, and
    /// [`QueryError::Http`] for non-2xx responses (raw body, unparsed) or
    /// network failures. On any error the query state is untouched.
    pub async fn fetch<S: AsRef<str>>(
        &mut self,
        client: &HttpClient,
        filters: &[S],
    ) -> Result<(), QueryError> {
        self.validate_pagination()?;
        let filters = Self::convert_filters(filters)?;
        let url = self.build_url(client.base_url())?;
        let params = self.collect_params(filters);

        let full_url = if params.is_empty() {
            url
        } else {
            format!("{url}?{}", encode_query(&params))
        };

        let response = client.get(&full_url).await?;
        let envelope = Envelope::from_body(response.body);
        self.results = envelope.docs;
        self.meta = envelope.meta;
        Ok(())
    }
}

/// Serializes a parameter mapping into a query string.
///
/// Keys and values are percent-encoded. Entries with an empty value (isolated
/// filters) serialize as the bare key, without `=`; the upstream API treats
/// a bare key as "parameter present, no value".
fn encode_query(params: &HashMap<String, String>) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                urlencoding::encode(key).into_owned()
            } else {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            }
        })
        .collect();
    // Stable output keeps request logs and tests deterministic.
    pairs.sort();
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BASE: &str = "https://the-one-api.dev/v2";
    const TEST_SPEC: ResourceSpec = ResourceSpec::new("test", &["testing"]);

    fn root_query() -> ResourceQuery {
        ResourceQuery::new(TEST_SPEC)
    }

    fn id_query() -> ResourceQuery {
        ResourceQuery::with_id(TEST_SPEC, "sample")
    }

    fn sub_query() -> ResourceQuery {
        let mut query = id_query();
        query.set_sub_resource("testing");
        query
    }

    // === URL building ===

    #[test]
    fn test_collection_url() {
        let url = root_query().build_url(TEST_BASE).unwrap();
        assert_eq!(url, "https://the-one-api.dev/v2/test");
    }

    #[test]
    fn test_entity_url() {
        let url = id_query().build_url(TEST_BASE).unwrap();
        assert_eq!(url, "https://the-one-api.dev/v2/test/sample");
    }

    #[test]
    fn test_sub_resource_url() {
        let url = sub_query().build_url(TEST_BASE).unwrap();
        assert_eq!(url, "https://the-one-api.dev/v2/test/sample/testing");
    }

    #[test]
    fn test_unknown_sub_resource_fails_with_full_url() {
        let mut query = id_query();
        query.set_sub_resource("error");

        let error = query.build_url(TEST_BASE).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid URL used: https://the-one-api.dev/v2/test/sample/error"
        );
        assert!(matches!(error, QueryError::InvalidResource { .. }));
    }

    // === Pagination validation ===

    #[test]
    fn test_empty_pagination_is_valid() {
        assert!(root_query().validate_pagination().is_ok());
    }

    #[test]
    fn test_allowed_pagination_keys_are_valid() {
        let mut query = root_query();
        query.paginate("limit", 10);
        query.paginate("page", 2);
        query.paginate("offset", 5);
        assert!(query.validate_pagination().is_ok());
    }

    #[test]
    fn test_unknown_pagination_key_fails() {
        let mut query = root_query();
        query.paginate("pointer", "ad3edef");

        let error = query.validate_pagination().unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"Invalid pagination keys used: ["pointer"]"#
        );
    }

    #[test]
    fn test_only_offending_keys_are_listed_in_original_order() {
        let mut query = root_query();
        query.paginate("cursor", "abc");
        query.paginate("limit", 10);
        query.paginate("pointer", "def");

        let error = query.validate_pagination().unwrap_err();
        match error {
            QueryError::InvalidPagination { keys } => {
                assert_eq!(keys, vec!["cursor".to_string(), "pointer".to_string()]);
            }
            other => panic!("expected InvalidPagination, got {other:?}"),
        }
    }

    // === Filter conversion ===

    #[test]
    fn test_empty_filters_yield_empty_map() {
        let converted = ResourceQuery::convert_filters::<&str>(&[]).unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn test_isolated_filter_maps_to_empty_value() {
        let converted = ResourceQuery::convert_filters(&["budgetInMillions<100"]).unwrap();
        assert_eq!(
            converted,
            HashMap::from([("budgetInMillions<100".to_string(), String::new())])
        );
    }

    #[test]
    fn test_valued_filter_maps_to_pair() {
        let converted = ResourceQuery::convert_filters(&["name=Gandalf"]).unwrap();
        assert_eq!(
            converted,
            HashMap::from([("name".to_string(), "Gandalf".to_string())])
        );
    }

    #[test]
    fn test_bare_equals_is_malformed() {
        let error = ResourceQuery::convert_filters(&["="]).unwrap_err();
        assert_eq!(error.to_string(), "Malformed filter parameter '=' found.");
    }

    #[test]
    fn test_double_equals_is_malformed() {
        let error = ResourceQuery::convert_filters(&["name=Frodo=Gandalf"]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed filter parameter 'name=Frodo=Gandalf' found."
        );
    }

    #[test]
    fn test_empty_filter_string_is_malformed() {
        let error = ResourceQuery::convert_filters(&[""]).unwrap_err();
        assert!(matches!(error, QueryError::InvalidFilter { filter } if filter.is_empty()));
    }

    #[test]
    fn test_first_malformed_entry_fails_atomically() {
        let result = ResourceQuery::convert_filters(&["name=Gandalf", "=", "race=Maia"]);
        assert!(matches!(
            result,
            Err(QueryError::InvalidFilter { filter }) if filter == "="
        ));
    }

    // === Parameter collection ===

    #[test]
    fn test_collect_params_empty() {
        assert_eq!(root_query().collect_params(HashMap::new()), HashMap::new());
    }

    #[test]
    fn test_collect_params_with_pagination() {
        let mut query = root_query();
        query.paginate("limit", 10);

        assert_eq!(
            query.collect_params(HashMap::new()),
            HashMap::from([("limit".to_string(), "10".to_string())])
        );
    }

    #[test]
    fn test_collect_params_with_filters() {
        let filters = HashMap::from([
            ("budgetInMillions<100".to_string(), String::new()),
            ("name".to_string(), "Gandalf".to_string()),
        ]);

        assert_eq!(root_query().collect_params(filters.clone()), filters);
    }

    #[test]
    fn test_collect_params_with_sortby() {
        let mut query = root_query();
        query.sort_by("character:asc");

        assert_eq!(
            query.collect_params(HashMap::new()),
            HashMap::from([("sortby".to_string(), "character:asc".to_string())])
        );
    }

    #[test]
    fn test_collect_params_full_combination() {
        let mut query = root_query();
        query.paginate("page", 4);
        query.sort_by("character:asc");
        let filters = HashMap::from([
            ("budgetInMillions<100".to_string(), String::new()),
            ("name".to_string(), "Gandalf".to_string()),
        ]);

        assert_eq!(
            query.collect_params(filters),
            HashMap::from([
                ("page".to_string(), "4".to_string()),
                ("budgetInMillions<100".to_string(), String::new()),
                ("name".to_string(), "Gandalf".to_string()),
                ("sortby".to_string(), "character:asc".to_string()),
            ])
        );
    }

    #[test]
    fn test_pagination_overlays_filters_on_collision() {
        let mut query = root_query();
        query.paginate("limit", 10);
        let filters = HashMap::from([("limit".to_string(), "999".to_string())]);

        let params = query.collect_params(filters);
        assert_eq!(params.get("limit"), Some(&"10".to_string()));
    }

    // === Query-string encoding ===

    #[test]
    fn test_encode_query_emits_bare_key_for_empty_value() {
        let params = HashMap::from([("budgetInMillions<100".to_string(), String::new())]);
        assert_eq!(encode_query(&params), "budgetInMillions%3C100");
    }

    #[test]
    fn test_encode_query_joins_pairs() {
        let params = HashMap::from([
            ("limit".to_string(), "10".to_string()),
            ("name".to_string(), "Gandalf".to_string()),
        ]);
        assert_eq!(encode_query(&params), "limit=10&name=Gandalf");
    }

    #[test]
    fn test_encode_query_percent_encodes_values() {
        let params = HashMap::from([("name".to_string(), "The Two Towers".to_string())]);
        assert_eq!(encode_query(&params), "name=The%20Two%20Towers");
    }
}
