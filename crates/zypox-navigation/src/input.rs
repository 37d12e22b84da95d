//! Input resolution for address bar

use url::Url;

use crate::error::NavigationError;
use crate::search::SearchEngine;
use crate::Result;

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search (holds the results URL)
    Search(String),
}

impl InputResolution {
    /// Address the engine view should load
    pub fn target(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputResolver {
    search: SearchEngine,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_engine(search: SearchEngine) -> Self {
        Self { search }
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    /// Resolve user input into an action. Blank input resolves to nothing.
    pub fn resolve(&self, input: &str) -> Option<InputResolution> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Some(InputResolution::Navigate(input.to_string()));
        }

        if Self::looks_like_domain(input) {
            return Some(InputResolution::Navigate(format!("https://{}", input)));
        }

        Some(InputResolution::Search(self.search.query_url(input)))
    }

    /// A dot and no whitespace. Domain syntax is not validated any further.
    fn looks_like_domain(input: &str) -> bool {
        input.contains('.') && !input.chars().any(char::is_whitespace)
    }
}

/// True for addresses served over HTTP(S)
pub fn is_web_address(address: &str) -> bool {
    address.starts_with("http://") || address.starts_with("https://")
}

/// Parse an address for handing to the engine view
pub fn parse_address(address: &str) -> Result<Url> {
    Url::parse(address).map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", address, e)))
}
