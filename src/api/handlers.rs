use axum::Form;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use std::sync::Arc;

use crate::error::SearchError;
use crate::pagination;
use crate::render;

use super::AppState;
use super::models::{SearchForm, SearchPage, SearchParams, SearchResult, SuggestParams};

/// GET / — pagination links and bookmarked searches carry the query in the
/// query string.
pub async fn search_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.query.clone().unwrap_or_default();
    run_search(state, query, &params).await
}

/// POST / — a submitted form. The form value wins over any query-string
/// value; the query string still supplies `start`.
pub async fn search_post(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let query = if form.query.is_empty() {
        params.query.clone().unwrap_or_default()
    } else {
        form.query
    };
    run_search(state, query, &params).await
}

async fn run_search(state: Arc<AppState>, query: String, params: &SearchParams) -> Html<String> {
    let start = pagination::parse_start(params.start.as_deref());

    let mut results: Vec<SearchResult> = Vec::new();
    let mut api_error = None;
    let mut user_message = None;
    let mut next_start = None;

    if !query.is_empty() {
        match state.client.search(&query, start).await {
            Ok(payload) => {
                next_start = pagination::next_start(&payload);
                if let Some(items) = payload.items {
                    results = items.into_iter().map(SearchResult::from).collect();
                } else if let Some(error) = payload.error {
                    let error = SearchError::Api(
                        error
                            .message
                            .unwrap_or_else(|| "An unknown API error occurred.".to_string()),
                    );
                    tracing::warn!(%query, "upstream reported an error: {error}");
                    api_error = Some(error.to_string());
                } else {
                    tracing::info!(%query, "no search results found");
                    user_message =
                        Some("No search results found. Please try a different query.".to_string());
                }
            }
            Err(error) => {
                tracing::error!(%query, "search request failed: {error:#}");
                api_error = Some(error.to_string());
            }
        }
    }

    let page = SearchPage {
        prev_start: pagination::previous_start(start),
        query,
        results,
        start,
        next_start,
        api_error,
        user_message,
    };
    Html(render::render_page(&page))
}

pub async fn suggest_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<String>> {
    Json(state.catalog.matching(&params.q))
}
