//! Catalog API client.
//!
//! `GET {base}/{api_path}?{filters}&page={n}&pageSize={m}` answering with a
//! camelCase [`PageResponse`] body.

use std::marker::PhantomData;
use std::time::Duration;

use fundcat_filter::{PageRequest, query};
use fundcat_model::{CatalogDomain, PageResponse};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, SourceError};
use crate::source::PageSource;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("fundcat/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP page source for one catalog domain.
#[derive(Debug, Clone)]
pub struct HttpSource<T> {
    client: reqwest::blocking::Client,
    endpoint: Url,
    item: PhantomData<fn() -> T>,
}

impl<T> HttpSource<T> {
    /// Creates a client for `domain` under `base_url`.
    pub fn new(base_url: &str, domain: &CatalogDomain, timeout: Duration) -> Result<Self> {
        let invalid = |reason: String| SourceError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(&domain.api_path)
            .map_err(|e| invalid(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            item: PhantomData,
        })
    }

    /// Catalog endpoint without a query.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full URL for a page request.
    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query::encode(&request.filters).iter() {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("page", &request.page.to_string());
            pairs.append_pair("pageSize", &request.page_size.to_string());
        }
        url
    }
}

impl<T: DeserializeOwned> PageSource<T> for HttpSource<T> {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<T>> {
        let url = self.page_url(request);
        tracing::debug!(token = %request.token, %url, "fetching page");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        let page: PageResponse<T> = serde_json::from_str(&body)?;
        tracing::debug!(
            token = %request.token,
            items = page.items.len(),
            total = page.total_count,
            "page received"
        );
        Ok(page)
    }
}
