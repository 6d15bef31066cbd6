use std::sync::Arc;

use lens::api::{AppState, create_router};
use lens::config::Config;
use lens::suggest::SuggestionCatalog;
use lens::upstream::SearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let client = SearchClient::new(
        reqwest::Client::new(),
        config.upstream_base_url.clone(),
        config.api_key.clone(),
        config.cse_id.clone(),
    );
    let state = Arc::new(AppState {
        client,
        catalog: SuggestionCatalog::with_defaults(),
    });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
