//! HTTP client for the site's `/api/search/{query}` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use super::search_pipeline::SearchBackend;
use crate::types::errors::SearchError;
use crate::types::search::{SearchHit, SearchResponse};
use crate::types::settings::SearchSettings;

pub struct HttpSearchClient {
    http: Client,
    base_url: Url,
}

impl HttpSearchClient {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// `{base}/api/search/{query}` with `query` encoded as one path segment.
    pub fn endpoint(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SearchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "search", query]);
        Ok(url)
    }
}

impl SearchBackend for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.endpoint(query)?;
        debug!(%url, "search request");

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(SearchError::Status(resp.status().as_u16()));
        }
        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;
        Ok(body.into_hits())
    }
}
