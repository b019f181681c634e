//! Faceted filter engine for funding-source catalogs.
//!
//! The pieces, bottom-up:
//!
//! - [`query`] maps a [`FilterSet`](fundcat_model::FilterSet) to and from a URL query record.
//! - [`FilterStateStore`] keeps the staged and applied snapshots and the search buffer.
//! - [`chips`] projects the applied snapshot into removable chips.
//! - [`PaginatedResultCache`] accumulates result pages and discards stale responses.
//! - [`DropdownCoordinator`] keeps at most one facet dropdown open.
//! - [`CatalogSession`] wires them to a [`Location`] for one mounted view.
//!
//! Nothing here performs I/O. Page fetches are handed out as [`PageRequest`]s
//! and their outcomes fed back with the request's [`RequestToken`].

#![deny(unsafe_code)]

pub mod chips;
pub mod dropdown;
pub mod location;
pub mod pagination;
pub mod query;
pub mod session;
pub mod store;

pub use chips::{Chip, LabelFormatter, PrefixLabels};
pub use dropdown::{DropdownCoordinator, DropdownState};
pub use location::{Location, MemoryLocation};
pub use pagination::{
    FetchFailure, PageRequest, PageState, PaginatedResultCache, RequestToken, Resolution,
};
pub use session::CatalogSession;
pub use store::{AppliedChange, FilterStateStore};
