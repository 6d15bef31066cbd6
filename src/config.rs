use anyhow::Context;
use dotenvy::dotenv;
use std::env;

/// Page size of the upstream API, used only to compute the previous-page
/// offset. The number of items actually rendered is whatever the API returns.
pub const RESULTS_PER_PAGE: u32 = 10;

pub const DEFAULT_UPSTREAM_URL: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub api_key: String,
    pub cse_id: String,
    pub upstream_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv().ok(); // Load .env file if present
        Ok(Config {
            listen_addr: get_env_or_default("LENS_LISTEN_ADDR", "0.0.0.0:3000"),
            api_key: get_env("SEARCH_API_KEY")?,
            cse_id: get_env("SEARCH_CSE_ID")?,
            upstream_base_url: get_env_or_default("SEARCH_API_URL", DEFAULT_UPSTREAM_URL),
        })
    }
}

fn get_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
