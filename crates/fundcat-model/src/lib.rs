//! Data model for the funding catalog: category schemas, filter sets, URL
//! query records, page responses and the catalog domain presets.

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod filter_set;
pub mod funding;
pub mod page;
pub mod query;
pub mod schema;

pub use catalog::{CatalogDomain, CatalogKind};
pub use error::{ModelError, Result};
pub use filter_set::{FilterChange, FilterSet};
pub use funding::FundingSource;
pub use page::PageResponse;
pub use query::QueryRecord;
pub use schema::{Category, CategoryKind, CategorySchema, SEARCH_CATEGORY};
