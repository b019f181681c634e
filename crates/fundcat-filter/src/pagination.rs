//! Incrementally loaded result pages for the applied filter set.
//!
//! The cache performs no I/O. [`PaginatedResultCache::reset`] and
//! [`PaginatedResultCache::load_more`] hand out [`PageRequest`]s; whoever
//! executes them reports back through [`PaginatedResultCache::resolve`] with
//! the request's token. Each reset bumps the token, so a response that arrives
//! after a newer reset carries an old token and is dropped.

use std::fmt;

use fundcat_model::{FilterSet, PageResponse};
use tracing::{debug, info, warn};

/// Generation counter identifying the applied snapshot a request belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A page fetch to execute against the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub token: RequestToken,
    pub filters: FilterSet,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

/// Accumulated results for one applied snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState<T> {
    /// Last page successfully loaded (1 before anything arrives).
    pub page: u32,
    pub items: Vec<T>,
    pub total_count: u64,
    pub has_more: bool,
    pub request_token: RequestToken,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            page: 1,
            items: Vec::new(),
            total_count: 0,
            has_more: false,
            request_token: RequestToken::default(),
        }
    }
}

/// A failed fetch, kept for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub page: u32,
    pub message: String,
    /// Whether the placeholder dataset is being shown instead.
    pub placeholder: bool,
}

/// What a call to `resolve` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Items were appended.
    Appended { count: usize },
    /// The first page failed and the placeholder dataset is shown.
    Placeholder,
    /// A later page failed; accumulated items are untouched.
    Failed,
    /// The response belonged to a superseded request and was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PaginatedResultCache<T> {
    page_size: u32,
    state: PageState<T>,
    filters: Option<FilterSet>,
    /// Page number of the outstanding request for the current token.
    in_flight: Option<u32>,
    error: Option<FetchFailure>,
    placeholder: Vec<T>,
}

impl<T: Clone> PaginatedResultCache<T> {
    /// A cache requesting `page_size` items per page (at least 1).
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            state: PageState::default(),
            filters: None,
            in_flight: None,
            error: None,
            placeholder: Vec::new(),
        }
    }

    /// Items shown when the first page cannot be fetched.
    #[must_use]
    pub fn with_placeholder(mut self, items: Vec<T>) -> Self {
        self.placeholder = items;
        self
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.state.items
    }

    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.state.total_count
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more
    }

    pub fn current_token(&self) -> RequestToken {
        self.state.request_token
    }

    /// Filters of the latest reset.
    pub fn filters(&self) -> Option<&FilterSet> {
        self.filters.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a "load more" control should be enabled.
    pub fn can_load_more(&self) -> bool {
        self.state.has_more && !self.is_loading()
    }

    /// Last failure for the current snapshot, cleared by the next success.
    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    /// Start over for a new applied snapshot and request its first page.
    pub fn reset(&mut self, filters: &FilterSet) -> PageRequest {
        let token = self.state.request_token.next();
        self.state = PageState {
            request_token: token,
            ..PageState::default()
        };
        self.filters = Some(filters.clone());
        self.in_flight = Some(1);
        self.error = None;
        debug!(%token, filters = %filters, "results reset");
        self.request(filters.clone(), 1)
    }

    /// Request the next page, unless there is none or one is in flight.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.state.has_more {
            debug!("load more ignored: no further pages");
            return None;
        }
        if let Some(page) = self.in_flight {
            debug!(page, "load more ignored: request in flight");
            return None;
        }
        let filters = self.filters.clone()?;
        let next = self.state.page + 1;
        self.in_flight = Some(next);
        debug!(token = %self.state.request_token, page = next, "loading more");
        Some(self.request(filters, next))
    }

    /// Apply the outcome of a request issued with `token`.
    pub fn resolve<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<PageResponse<T>, E>,
    ) -> Resolution {
        if token != self.state.request_token {
            warn!(%token, current = %self.state.request_token, "discarding stale response");
            return Resolution::Stale;
        }
        let Some(page) = self.in_flight.take() else {
            warn!(%token, "discarding response with no request in flight");
            return Resolution::Stale;
        };
        match result {
            Ok(response) => {
                let count = response.items.len();
                self.state.has_more = response.has_more();
                self.state.total_count = response.total_count;
                self.state.items.extend(response.items);
                self.state.page = page;
                self.error = None;
                info!(
                    %token,
                    page,
                    count,
                    total = self.state.total_count,
                    has_more = self.state.has_more,
                    "page loaded"
                );
                Resolution::Appended { count }
            }
            Err(error) if page == 1 => {
                warn!(%token, %error, "first page failed, showing placeholder");
                self.state.items = self.placeholder.clone();
                self.state.total_count = self.placeholder.len() as u64;
                self.state.has_more = false;
                self.error = Some(FetchFailure {
                    page,
                    message: error.to_string(),
                    placeholder: true,
                });
                Resolution::Placeholder
            }
            Err(error) => {
                warn!(%token, page, %error, "page failed, keeping loaded results");
                self.error = Some(FetchFailure {
                    page,
                    message: error.to_string(),
                    placeholder: false,
                });
                Resolution::Failed
            }
        }
    }

    fn request(&self, filters: FilterSet, page: u32) -> PageRequest {
        PageRequest {
            token: self.state.request_token,
            filters,
            page,
            page_size: self.page_size,
        }
    }
}
