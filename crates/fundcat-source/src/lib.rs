//! Page sources for the funding catalog.
//!
//! - [`HttpSource`] talks to the catalog API.
//! - [`StaticSource`] filters and pages the dataset bundled with the binary.
//! - [`placeholder`] returns the fallback records for a first-page failure.

#![deny(unsafe_code)]

pub mod bundled;
pub mod error;
pub mod http;
pub mod source;

pub use bundled::{StaticSource, placeholder};
pub use error::{Result, SourceError};
pub use http::HttpSource;
pub use source::PageSource;
