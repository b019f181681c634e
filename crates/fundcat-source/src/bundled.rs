//! Records shipped inside the binary.
//!
//! The full dataset backs offline browsing; the placeholder set is what a
//! view shows when its first page cannot be fetched.

use std::collections::HashMap;

use fundcat_filter::PageRequest;
use fundcat_model::{CatalogKind, FilterSet, FundingSource, PageResponse, SEARCH_CATEGORY};

use crate::error::{Result, SourceError};
use crate::source::PageSource;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const PLACEHOLDER_JSON: &str = include_str!("../data/placeholder.json");

fn load(json: &str, kind: CatalogKind) -> Result<Vec<FundingSource>> {
    let mut datasets: HashMap<String, Vec<FundingSource>> = serde_json::from_str(json)?;
    datasets
        .remove(kind.slug())
        .ok_or_else(|| SourceError::MissingDataset(kind.slug().to_string()))
}

/// Placeholder records for a catalog, shown unfiltered.
pub fn placeholder(kind: CatalogKind) -> Result<Vec<FundingSource>> {
    load(PLACEHOLDER_JSON, kind)
}

/// In-memory page source.
///
/// Within a category a record matches if it carries any selected value;
/// across categories every non-empty category must match. The search term is
/// a case-insensitive substring test.
#[derive(Debug, Clone)]
pub struct StaticSource {
    records: Vec<FundingSource>,
}

impl StaticSource {
    pub fn new(records: Vec<FundingSource>) -> Self {
        Self { records }
    }

    /// The dataset bundled for `kind`.
    pub fn bundled(kind: CatalogKind) -> Result<Self> {
        Ok(Self::new(load(CATALOG_JSON, kind)?))
    }

    pub fn records(&self) -> &[FundingSource] {
        &self.records
    }

    /// Every record matching `filters`, in dataset order.
    pub fn matching<'a>(
        &'a self,
        filters: &'a FilterSet,
    ) -> impl Iterator<Item = &'a FundingSource> {
        self.records
            .iter()
            .filter(move |record| matches(record, filters))
    }
}

fn matches(record: &FundingSource, filters: &FilterSet) -> bool {
    filters.iter().all(|(category, values)| {
        if category == SEARCH_CATEGORY {
            return values.iter().all(|term| record.matches_text(term));
        }
        if values.is_empty() {
            return true;
        }
        let carried = record.facet_values(category);
        values.iter().any(|value| carried.contains(&value.as_str()))
    })
}

impl PageSource<FundingSource> for StaticSource {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<FundingSource>> {
        let matched: Vec<&FundingSource> = self.matching(&request.filters).collect();
        let total_count = matched.len() as u64;
        let page_size = request.page_size.max(1);
        let skip = request.page.saturating_sub(1) as usize * page_size as usize;

        let items = matched
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();

        tracing::debug!(
            token = %request.token,
            page = request.page,
            total = total_count,
            "served page from bundled data"
        );
        Ok(PageResponse {
            items,
            total_count,
            current_page: request.page,
            total_pages: PageResponse::<FundingSource>::page_count(total_count, page_size),
        })
    }
}
