pub const MAX_SUGGESTIONS: usize = 5;

/// Fixed, ordered list of candidate phrases. Built once at startup and shared
/// read-only across requests, so it needs no synchronization. Swapping in a
/// real suggestion index later only means constructing this from elsewhere.
pub struct SuggestionCatalog {
    phrases: Vec<String>,
}

impl SuggestionCatalog {
    pub fn new(phrases: Vec<String>) -> SuggestionCatalog {
        SuggestionCatalog { phrases }
    }

    pub fn with_defaults() -> SuggestionCatalog {
        SuggestionCatalog::new(
            [
                "what is chatgpt",
                "chatgpt login",
                "chatgpt plus",
                "ai tools",
                "india news",
                "indian economy",
                "latest technology in india",
                "bharat history",
                "indian culture",
                "cricket live score",
                "new delhi weather",
                "mumbai stock market",
                "bangalore startups",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        )
    }

    /// Case-insensitive substring match, catalog order preserved, capped at
    /// [`MAX_SUGGESTIONS`]. The empty query matches every phrase.
    pub fn matching(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.phrases
            .iter()
            .filter(|phrase| phrase.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

#[test]
fn test_matching_substring_case_insensitive() {
    let catalog = SuggestionCatalog::with_defaults();

    let matches = catalog.matching("chatgpt");
    assert_eq!(matches, vec!["what is chatgpt", "chatgpt login", "chatgpt plus"]);

    // same result regardless of case
    assert_eq!(catalog.matching("ChatGPT"), matches);
}

#[test]
fn test_matching_empty_query_returns_head_of_catalog() {
    let catalog = SuggestionCatalog::with_defaults();
    assert_eq!(
        catalog.matching(""),
        vec![
            "what is chatgpt",
            "chatgpt login",
            "chatgpt plus",
            "ai tools",
            "india news"
        ]
    );
}

#[test]
fn test_matching_no_match() {
    let catalog = SuggestionCatalog::with_defaults();
    assert!(catalog.matching("zzz-no-match").is_empty());
}

#[test]
fn test_matching_cap() {
    let catalog = SuggestionCatalog::new(
        (0..20).map(|i| format!("phrase {i}")).collect(),
    );
    assert_eq!(catalog.matching("phrase").len(), MAX_SUGGESTIONS);
}
