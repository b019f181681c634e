//! One mounted catalog view: filters, URL, results and dropdowns together.
//!
//! The session is where an applied change fans out. Each operation that
//! replaces the applied snapshot also replaces the URL and resets the result
//! cache before returning, and hands the caller the single [`PageRequest`] to
//! execute. Nothing observable sits between those three steps.

use fundcat_model::{CatalogDomain, FilterChange, FilterSet, QueryRecord, Result};
use tracing::info;

use crate::chips::{self, Chip, LabelFormatter, PrefixLabels};
use crate::dropdown::DropdownCoordinator;
use crate::location::Location;
use crate::pagination::{
    FetchFailure, PageRequest, PaginatedResultCache, RequestToken, Resolution,
};
use crate::store::{AppliedChange, FilterStateStore};

pub struct CatalogSession<T, L> {
    domain: CatalogDomain,
    store: FilterStateStore,
    results: PaginatedResultCache<T>,
    dropdowns: DropdownCoordinator,
    location: L,
    labels: Box<dyn LabelFormatter>,
}

impl<T: Clone, L: Location> CatalogSession<T, L> {
    pub fn new(domain: CatalogDomain, location: L, page_size: u32) -> Self {
        Self {
            store: FilterStateStore::new(domain.schema.clone()),
            domain,
            results: PaginatedResultCache::new(page_size),
            dropdowns: DropdownCoordinator::new(),
            location,
            labels: Box::new(PrefixLabels),
        }
    }

    /// Items shown when the first page of a snapshot cannot be fetched.
    #[must_use]
    pub fn with_placeholder(mut self, items: Vec<T>) -> Self {
        self.results = self.results.with_placeholder(items);
        self
    }

    /// Replace the default `"<label>: <value>"` chip labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl LabelFormatter + 'static) -> Self {
        self.labels = Box::new(labels);
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Hydrate from the current URL and request the first page.
    pub fn mount(&mut self) -> PageRequest {
        let query = self.location.current().clone();
        let change = self.store.hydrate(&query);
        info!(
            domain = %self.domain.kind,
            applied = %change.filters,
            "catalog view mounted"
        );
        self.results.reset(&change.filters)
    }

    /// Re-hydrate after the URL changed outside the view (back/forward).
    ///
    /// Unapplied staged edits are discarded.
    pub fn location_changed(&mut self) -> PageRequest {
        self.dropdowns.close();
        self.mount()
    }

    // =========================================================================
    // Staging (no URL change, no fetch)
    // =========================================================================

    /// Flip an option in the staged snapshot.
    pub fn toggle_option(&mut self, category: &str, value: &str) -> Result<bool> {
        self.store.toggle_option(category, value)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.store.set_search_text(text);
    }

    /// Revert staged edits to the applied snapshot.
    pub fn discard_staged(&mut self) {
        self.store.discard_staged();
    }

    // =========================================================================
    // Commits
    // =========================================================================

    pub fn apply_staged(&mut self) -> Option<PageRequest> {
        let change = self.store.apply_staged();
        self.dropdowns.close();
        self.publish(change)
    }

    pub fn commit_search(&mut self) -> Result<Option<PageRequest>> {
        let change = self.store.commit_search()?;
        Ok(self.publish(change))
    }

    /// Remove one chip's value.
    pub fn remove_value(&mut self, category: &str, value: &str) -> Result<Option<PageRequest>> {
        let change = self.store.remove_value(category, value)?;
        Ok(self.publish(change))
    }

    pub fn clear_filters(&mut self) -> Option<PageRequest> {
        let change = self.store.clear_filters();
        self.publish(change)
    }

    pub fn clear_search(&mut self) -> Option<PageRequest> {
        let change = self.store.clear_search();
        self.publish(change)
    }

    pub fn reset_all(&mut self) -> Option<PageRequest> {
        let change = self.store.reset_all();
        self.publish(change)
    }

    fn publish(&mut self, change: Option<AppliedChange>) -> Option<PageRequest> {
        let AppliedChange { filters, query } = change?;
        info!(
            domain = %self.domain.kind,
            url = %query.to_url(&self.domain.path),
            "applied filters changed"
        );
        self.location.replace(query);
        Some(self.results.reset(&filters))
    }

    // =========================================================================
    // Results
    // =========================================================================

    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.results.load_more()
    }

    /// Feed back the outcome of a request issued by this session.
    pub fn resolve<E: std::fmt::Display>(
        &mut self,
        token: RequestToken,
        result: std::result::Result<fundcat_model::PageResponse<T>, E>,
    ) -> Resolution {
        self.results.resolve(token, result)
    }

    pub fn results(&self) -> &PaginatedResultCache<T> {
        &self.results
    }

    pub fn items(&self) -> &[T] {
        self.results.items()
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.results.error()
    }

    // =========================================================================
    // Derived view state
    // =========================================================================

    pub fn chips(&self) -> Vec<Chip> {
        chips::project(self.store.applied(), &self.domain.schema, self.labels.as_ref())
    }

    pub fn has_active_filters(&self) -> bool {
        chips::has_active_filters(self.store.applied())
    }

    pub fn has_active_search(&self) -> bool {
        chips::has_active_search(self.store.applied())
    }

    /// Whether an "Apply" affordance should be shown.
    pub fn has_pending_changes(&self) -> bool {
        self.store.has_pending_changes()
    }

    pub fn pending_changes(&self) -> Vec<FilterChange> {
        self.store.pending_changes()
    }

    /// Whether `value` is checked in the `category` dropdown.
    pub fn is_staged(&self, category: &str, value: &str) -> bool {
        self.store.staged().contains(category, value)
    }

    pub fn applied(&self) -> &FilterSet {
        self.store.applied()
    }

    pub fn staged(&self) -> &FilterSet {
        self.store.staged()
    }

    pub fn search_text(&self) -> &str {
        self.store.search_text()
    }

    pub fn domain(&self) -> &CatalogDomain {
        &self.domain
    }

    /// Current URL of the view.
    pub fn url(&self) -> String {
        self.location.current().to_url(&self.domain.path)
    }

    pub fn query(&self) -> &QueryRecord {
        self.location.current()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn dropdowns(&self) -> &DropdownCoordinator {
        &self.dropdowns
    }

    pub fn dropdowns_mut(&mut self) -> &mut DropdownCoordinator {
        &mut self.dropdowns
    }
}
