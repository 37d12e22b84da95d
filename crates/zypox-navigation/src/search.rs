//! Web search URL construction

use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// Search provider reached through a GET query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Endpoint the query is appended to
    endpoint: String,
}

impl SearchEngine {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the results URL for a raw query.
    ///
    /// Spaces become `+`. Nothing else is escaped, so reserved characters
    /// such as `&` or `#` reach the provider as typed.
    pub fn query_url(&self, query: &str) -> String {
        format!("{}{}", self.endpoint, query.replace(' ', "+"))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_ENDPOINT)
    }
}
