//! Staged and applied filter snapshots for one catalog view.
//!
//! `staged` is what the dropdowns show while the user edits; `applied` drives
//! the URL and the active fetch. Multi-select categories move from staged to
//! applied only through [`FilterStateStore::apply_staged`]; search has its own
//! lane through a text buffer and [`FilterStateStore::commit_search`].
//!
//! Every operation that replaces `applied` returns an [`AppliedChange`]
//! carrying the new snapshot and its query record. Operations that would
//! leave `applied` unchanged return `None`, so callers never refetch for a
//! no-op.

use fundcat_model::{
    CategorySchema, FilterChange, FilterSet, QueryRecord, Result, SEARCH_CATEGORY,
};
use tracing::debug;

use crate::query;

/// A newly applied filter snapshot and its URL form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub filters: FilterSet,
    pub query: QueryRecord,
}

#[derive(Debug, Clone)]
pub struct FilterStateStore {
    schema: CategorySchema,
    staged: FilterSet,
    applied: FilterSet,
    search_text: String,
}

impl FilterStateStore {
    /// An empty store for `schema`.
    pub fn new(schema: CategorySchema) -> Self {
        let empty = FilterSet::empty(&schema);
        Self {
            schema,
            staged: empty.clone(),
            applied: empty,
            search_text: String::new(),
        }
    }

    pub fn schema(&self) -> &CategorySchema {
        &self.schema
    }

    pub fn staged(&self) -> &FilterSet {
        &self.staged
    }

    pub fn applied(&self) -> &FilterSet {
        &self.applied
    }

    /// The uncommitted contents of the search box.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Load both snapshots from a URL query, discarding unapplied edits.
    ///
    /// Always returns the hydrated snapshot: a freshly mounted view has
    /// nothing loaded yet, and an out-of-band navigation must refetch.
    pub fn hydrate(&mut self, query: &QueryRecord) -> AppliedChange {
        let filters = query::decode(query, &self.schema);
        self.search_text = filters.search_term().unwrap_or_default().to_string();
        self.staged = filters.clone();
        self.applied = filters;
        debug!(applied = %self.applied, "hydrated filters");
        AppliedChange {
            filters: self.applied.clone(),
            query: query::encode(&self.applied),
        }
    }

    /// Flip an option in the staged snapshot. Does not touch `applied`.
    ///
    /// Returns `true` when the option is selected afterwards.
    pub fn toggle_option(&mut self, category: &str, value: &str) -> Result<bool> {
        let selected = self.staged.toggle(category, value)?;
        debug!(category, value, selected, "staged option toggled");
        Ok(selected)
    }

    /// Update the search box buffer. Nothing is committed.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Commit staged multi-select categories. Applied search is untouched.
    pub fn apply_staged(&mut self) -> Option<AppliedChange> {
        let next = self.applied.with_multi_select_from(&self.staged);
        self.commit(next, "apply staged")
    }

    /// Commit the trimmed search buffer; an empty buffer clears search.
    ///
    /// The committed term is mirrored into the staged snapshot.
    pub fn commit_search(&mut self) -> Result<Option<AppliedChange>> {
        let trimmed = self.search_text.trim();
        let term = (!trimmed.is_empty()).then(|| trimmed.to_string());
        let mut next = self.applied.clone();
        next.set_search(term.clone())?;
        self.staged.set_search(term)?;
        Ok(self.commit(next, "commit search"))
    }

    /// Remove one applied value, mirroring the removal into `staged`.
    ///
    /// Removing from the search category clears search and the text buffer
    /// whatever `value` is.
    pub fn remove_value(&mut self, category: &str, value: &str) -> Result<Option<AppliedChange>> {
        let is_search = self.schema.require(category)?.is_search();
        let mut next = self.applied.clone();
        if is_search {
            next.set_search(None)?;
            self.staged.set_search(None)?;
            self.search_text.clear();
        } else {
            next.remove(category, value)?;
            self.staged.remove(category, value)?;
        }
        Ok(self.commit(next, "remove value"))
    }

    /// Empty every multi-select category in both snapshots, keeping search.
    pub fn clear_filters(&mut self) -> Option<AppliedChange> {
        self.staged.clear_multi_select();
        let mut next = self.applied.clone();
        next.clear_multi_select();
        self.commit(next, "clear filters")
    }

    /// Empty search in both snapshots and the text buffer.
    pub fn clear_search(&mut self) -> Option<AppliedChange> {
        self.search_text.clear();
        self.staged.clear_search();
        let mut next = self.applied.clone();
        next.clear_search();
        self.commit(next, "clear search")
    }

    /// Empty every category in both snapshots and the text buffer.
    pub fn reset_all(&mut self) -> Option<AppliedChange> {
        self.search_text.clear();
        self.staged.clear_all();
        let mut next = self.applied.clone();
        next.clear_all();
        self.commit(next, "reset all")
    }

    /// Roll staged multi-select categories back to the applied ones.
    pub fn discard_staged(&mut self) {
        self.staged = self.staged.with_multi_select_from(&self.applied);
        debug!("staged edits discarded");
    }

    /// Whether `apply_staged` would change the applied snapshot.
    pub fn has_pending_changes(&self) -> bool {
        !self.staged.multi_select_eq(&self.applied)
    }

    /// Staged edits not yet applied, excluding search.
    pub fn pending_changes(&self) -> Vec<FilterChange> {
        self.applied
            .diff(&self.staged)
            .into_iter()
            .filter(|change| change.category() != SEARCH_CATEGORY)
            .collect()
    }

    fn commit(&mut self, next: FilterSet, operation: &'static str) -> Option<AppliedChange> {
        if next == self.applied {
            debug!(operation, "applied filters unchanged");
            return None;
        }
        self.applied = next;
        debug!(operation, applied = %self.applied, "applied filters changed");
        Some(AppliedChange {
            filters: self.applied.clone(),
            query: query::encode(&self.applied),
        })
    }
}
