//! Informational notices and the history dialog
//!
//! Plain data handed to the UI layer, which renders them as modals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        Self::new(
            "Help - Zypox",
            "Zypox Browser\n\n\
             • New Tab - Opens a new tab\n\
             • New Incognito Tab - Opens a private tab\n\
             • Zoom + / - to enlarge or shrink the page\n\
             • History - See visited pages\n\
             • Quick search from the homepage",
        )
    }

    pub fn history_unavailable() -> Self {
        Self::new("History", "No history is available in incognito mode.")
    }
}

/// Read-only list of visited addresses with a single close action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDialog {
    pub title: String,
    pub heading: String,
    pub entries: Vec<String>,
}

impl HistoryDialog {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            title: "Browsing History".to_string(),
            heading: "History:".to_string(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuOutcome;

    #[test]
    fn test_history_dialog_keeps_order_and_duplicates() {
        let entries = vec![
            "https://a.example/".to_string(),
            "https://b.example/".to_string(),
            "https://a.example/".to_string(),
        ];
        let dialog = HistoryDialog::new(entries.clone());

        assert_eq!(dialog.title, "Browsing History");
        assert_eq!(dialog.heading, "History:");
        assert_eq!(dialog.entries, entries);
    }

    #[test]
    fn test_outcome_wire_shape() {
        let outcome = MenuOutcome::Notice(Notice::history_unavailable());
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["type"], "notice");
        assert_eq!(json["value"]["title"], "History");
        assert!(json["value"]["message"]
            .as_str()
            .unwrap()
            .contains("incognito"));
    }
}
