//! Bidirectional mapping between filter sets and URL query records.
//!
//! Multi-select categories serialize as comma-joined lists, search as its raw
//! term, and empty categories are omitted:
//! `affiliation=Govt-backed,Private&tags=Equity&search=fintech`.
//!
//! Values are not escaped, so a value containing `,` splits into two values on
//! the way back. Everything else round-trips.

use fundcat_model::{CategoryKind, CategorySchema, FilterSet, QueryRecord};
use tracing::warn;

const SEPARATOR: &str = ",";

/// Serialize the non-empty categories of `filters`, in schema order.
pub fn encode(filters: &FilterSet) -> QueryRecord {
    filters
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(category, values)| (category, values.join(SEPARATOR)))
        .collect()
}

/// Build a filter set from a query record.
///
/// Decoding is permissive and never fails: unknown keys are ignored, empty
/// list segments are dropped, repeated values keep their first occurrence and
/// an empty `search` value means no search.
pub fn decode(query: &QueryRecord, schema: &CategorySchema) -> FilterSet {
    let mut filters = FilterSet::empty(schema);
    for category in schema.iter() {
        let Some(raw) = query.get(&category.name) else {
            continue;
        };
        let decoded = match category.kind {
            CategoryKind::Search => filters.set_search(Some(raw.to_string())),
            CategoryKind::MultiSelect => raw
                .split(SEPARATOR)
                .filter(|v| !v.is_empty())
                .try_for_each(|value| filters.insert(&category.name, value).map(drop)),
        };
        if let Err(error) = decoded {
            warn!(category = %category.name, %error, "query value skipped");
        }
    }
    filters
}

/// Decode straight from a query string such as `?tags=Equity`.
pub fn decode_str(query: &str, schema: &CategorySchema) -> FilterSet {
    decode(&QueryRecord::parse(query), schema)
}
