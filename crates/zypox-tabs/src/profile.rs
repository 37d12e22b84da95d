//! Browsing profiles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Persistent engine storage, visits recorded in history
    Normal,
    /// In-memory engine storage only, no history
    Incognito,
}

impl Profile {
    pub fn from_incognito(incognito: bool) -> Self {
        if incognito {
            Profile::Incognito
        } else {
            Profile::Normal
        }
    }

    pub fn is_incognito(&self) -> bool {
        matches!(self, Profile::Incognito)
    }

    /// Fixed tab label. Page titles are not tracked.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Profile::Normal => "New Tab",
            Profile::Incognito => "Incognito",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Normal => "normal",
            Profile::Incognito => "incognito",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_distinguish_profiles() {
        assert_ne!(Profile::Normal.tab_label(), Profile::Incognito.tab_label());
        assert_eq!(Profile::from_incognito(true), Profile::Incognito);
        assert_eq!(Profile::from_incognito(false), Profile::Normal);
        assert!(!Profile::Normal.is_incognito());
    }
}
