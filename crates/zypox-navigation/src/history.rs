//! History management
//!
//! Visited addresses in visit order. Append-only, duplicates kept, lives
//! for the whole process. Clones share the same list.

use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct History {
    entries: Arc<RwLock<Vec<String>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed visit
    pub fn record_visit(&self, url: &str) {
        let mut entries = self.entries.write();
        entries.push(url.to_string());
        tracing::debug!(url = %url, total = entries.len(), "Recorded visit");
    }

    /// Snapshot of every entry, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Clone for History {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_order_and_duplicates() {
        let history = History::new();
        history.record_visit("https://example.com");
        history.record_visit("https://rust-lang.org");
        history.record_visit("https://example.com");

        assert_eq!(
            history.entries(),
            vec![
                "https://example.com".to_string(),
                "https://rust-lang.org".to_string(),
                "https://example.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_clones_share_entries() {
        let history = History::new();
        let shared = history.clone();
        assert!(shared.is_empty());

        history.record_visit("https://example.com");
        assert_eq!(shared.len(), 1);

        shared.record_visit("https://example.org");
        assert_eq!(history.len(), 2);
    }
}
