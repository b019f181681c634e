use serde::{Deserialize, Serialize};

/// One page of results as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    /// 1-based page number this response holds.
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Whether the server has pages after this one.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Number of pages needed for `total` items at `page_size` per page.
    pub fn page_count(total: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = total.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
