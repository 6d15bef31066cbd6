use reqwest::Client;
use serde::Deserialize;

use crate::error::SearchError;

/// Wire shape of the upstream search API (Google Custom Search v1). Only the
/// fields we consume are declared; everything else is ignored by serde.
///
/// `items`, `error` and `queries` are all optional at the top level, but each
/// item that *is* present must carry title, snippet and link. A claimed
/// successful item missing one of them fails deserialization and becomes a
/// format error rather than a silently dropped result.
#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub items: Option<Vec<SearchItem>>,
    pub error: Option<UpstreamError>,
    pub queries: Option<UpstreamQueries>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamError {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamQueries {
    #[serde(rename = "nextPage")]
    pub next_page: Option<Vec<PageInfo>>,
}

#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "startIndex")]
    pub start_index: Option<u32>,
}

pub struct SearchClient {
    http: Client,
    base_url: String,
    api_key: String,
    cse_id: String,
}

impl SearchClient {
    pub fn new(http: Client, base_url: String, api_key: String, cse_id: String) -> SearchClient {
        SearchClient {
            http,
            base_url,
            api_key,
            cse_id,
        }
    }

    /// One synchronous round trip per call: no retries, no timeout beyond the
    /// client defaults. `start` is the 1-based offset of the first result.
    pub async fn search(&self, query: &str, start: u32) -> Result<SearchPayload, SearchError> {
        let start = start.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("key", &self.api_key),
                ("cx", &self.cse_id),
                ("start", &start),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let payload = serde_json::from_str(&body).map_err(SearchError::Format)?;
        Ok(payload)
    }
}
