use thiserror::Error;

/// Failure modes of a single upstream search call. Each one is scoped to the
/// request that triggered it and surfaced on the rendered page; none is fatal
/// to the process.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to connect to the search service. Please check your internet connection. ({0})")]
    Connect(#[from] reqwest::Error),

    #[error("Received an invalid response from the search service.")]
    Format(#[source] serde_json::Error),

    #[error("{0}")]
    Api(String),
}
