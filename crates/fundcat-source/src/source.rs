//! The data-access seam between a catalog view and wherever results live.

use fundcat_filter::PageRequest;
use fundcat_model::PageResponse;

use crate::error::Result;

/// Fetches one page of results for an applied filter set.
///
/// Implementations must answer identically for identical
/// `(filters, page, page_size)`; the token on the request is only carried
/// for logging.
pub trait PageSource<T> {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<T>>;
}

impl<T, S: PageSource<T> + ?Sized> PageSource<T> for Box<S> {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<T>> {
        (**self).fetch_page(request)
    }
}
