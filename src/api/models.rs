use serde::Deserialize;

use crate::upstream::SearchItem;

/// Query-string parameters of the search page. `start` arrives as a raw
/// string so an unparsable value can fall back to page one instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub start: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl From<SearchItem> for SearchResult {
    fn from(item: SearchItem) -> SearchResult {
        SearchResult {
            title: item.title,
            snippet: item.snippet,
            url: item.link,
        }
    }
}

/// Everything the rendered page needs. At most one of `api_error` and
/// `user_message` is set for a given request.
#[derive(Debug)]
pub struct SearchPage {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub start: u32,
    pub prev_start: Option<u32>,
    pub next_start: Option<u32>,
    pub api_error: Option<String>,
    pub user_message: Option<String>,
}
