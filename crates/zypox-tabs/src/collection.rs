//! Tab collection
//!
//! Ordered tabs of one window plus the active index. Once the first tab is
//! in, the collection never drops below one: closing the last tab is refused.

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Default)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab and make it active. Returns its index.
    pub fn push(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Remove the tab at `index`.
    ///
    /// Returns `None` without touching anything when `index` is out of range
    /// or names the only remaining tab.
    pub fn remove(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return None;
        }

        let tab = self.tabs.remove(index);

        // The neighbour on the right takes over a closed active tab
        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = index.min(self.tabs.len() - 1);
        }

        Some(tab)
    }

    pub fn activate(&mut self, index: usize) -> Result<&Tab> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange(index));
        }
        self.active = index;
        Ok(&self.tabs[index])
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == tab_id)
    }

    pub fn get_by_id(&self, tab_id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id() == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn get_mut_by_id(&mut self, tab_id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id() == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// Homepage document served at `location`, whichever tab owns it
    pub fn homepage_document(&self, location: &str) -> Option<&str> {
        self.tabs
            .iter()
            .find_map(|t| t.homepage_document(location))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::tab::TabSettings;
    use crate::testing::RecordingEngine;
    use zypox_navigation::History;

    fn tab(id: &str, history: &History) -> Tab {
        Tab::open(
            id.to_string(),
            Profile::Normal,
            history,
            Box::new(RecordingEngine::new()),
            TabSettings::default(),
        )
    }

    fn ids(tabs: &TabCollection) -> Vec<String> {
        tabs.iter().map(|t| t.id().to_string()).collect()
    }

    #[test]
    fn test_push_activates() {
        let history = History::new();
        let mut tabs = TabCollection::new();
        assert!(tabs.active().is_none());

        assert_eq!(tabs.push(tab("a", &history)), 0);
        assert_eq!(tabs.push(tab("b", &history)), 1);
        assert_eq!(tabs.active().unwrap().id(), "b");
    }

    #[test]
    fn test_last_tab_cannot_be_removed() {
        let history = History::new();
        let mut tabs = TabCollection::new();
        tabs.push(tab("a", &history));

        assert!(tabs.remove(0).is_none());
        assert_eq!(tabs.len(), 1);

        tabs.push(tab("b", &history));
        assert!(tabs.remove(0).is_some());
        assert!(tabs.remove(0).is_none());
        assert_eq!(ids(&tabs), vec!["b".to_string()]);
    }

    #[test]
    fn test_out_of_range_remove_ignored() {
        let history = History::new();
        let mut tabs = TabCollection::new();
        tabs.push(tab("a", &history));
        tabs.push(tab("b", &history));

        assert!(tabs.remove(7).is_none());
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn test_active_index_follows_removal() {
        let history = History::new();
        let mut tabs = TabCollection::new();
        for id in ["a", "b", "c", "d"] {
            tabs.push(tab(id, &history));
        }

        // Removing before the active tab shifts the index
        tabs.activate(2).unwrap();
        tabs.remove(0);
        assert_eq!(tabs.active().unwrap().id(), "c");

        // Removing the active tab hands over to the right neighbour
        tabs.remove(tabs.active_index());
        assert_eq!(tabs.active().unwrap().id(), "d");

        // Or to the new last tab
        tabs.remove(tabs.active_index());
        assert_eq!(tabs.active().unwrap().id(), "b");
    }

    #[test]
    fn test_lookup() {
        let history = History::new();
        let mut tabs = TabCollection::new();
        tabs.push(tab("a", &history));
        tabs.push(tab("b", &history));

        assert_eq!(tabs.position("b"), Some(1));
        assert!(tabs.get_by_id("a").is_ok());
        assert!(matches!(
            tabs.get_mut_by_id("zzz"),
            Err(TabError::NotFound(_))
        ));
        assert!(matches!(
            tabs.activate(5),
            Err(TabError::IndexOutOfRange(5))
        ));

        let location = tabs.get(0).unwrap().homepage().unwrap().location().to_string();
        assert!(tabs.homepage_document(&location).is_some());
        assert!(tabs.homepage_document("zypox://localhost/home/none-1.html").is_none());
    }
}
