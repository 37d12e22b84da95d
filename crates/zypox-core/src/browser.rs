//! Main browser state container
//!
//! One window: its tabs and the history they share. Engine views are built
//! by the caller and handed in, and the engine commands a tab queues are run
//! after the lock is released, so no UI work happens under the lock.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use zypox_navigation::History;
use zypox_tabs::{
    BridgeCall, EngineView, MenuAction, MenuOutcome, Profile, Tab, TabCollection, TabRequest,
};

use crate::config::Config;
use crate::Result;

/// What the chrome needs to draw one tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSummary {
    pub id: String,
    pub index: usize,
    pub label: String,
    pub incognito: bool,
    pub address: String,
    pub zoom: f64,
    pub active: bool,
}

impl TabSummary {
    fn new(tab: &Tab, index: usize, active: bool) -> Self {
        Self {
            id: tab.id().to_string(),
            index,
            label: tab.label().to_string(),
            incognito: tab.is_incognito(),
            address: tab.address_bar().to_string(),
            zoom: tab.zoom(),
            active,
        }
    }
}

pub struct Browser {
    /// Configuration
    config: Config,
    /// Visits from every normal tab in this window
    history: History,
    tabs: Arc<RwLock<TabCollection>>,
}

impl Browser {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            history: History::new(),
            tabs: Arc::new(RwLock::new(TabCollection::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // === Tab operations ===

    /// Open a tab around an already created engine view and make it active
    pub fn new_tab(
        &self,
        tab_id: String,
        incognito: bool,
        engine: Box<dyn EngineView>,
    ) -> TabSummary {
        let mut tab = Tab::open(
            tab_id,
            Profile::from_incognito(incognito),
            &self.history,
            engine,
            self.config.tab_settings(),
        );
        let batch = tab.take_pending();

        let summary = {
            let mut tabs = self.tabs.write();
            let summary = TabSummary::new(&tab, tabs.len(), true);
            let index = tabs.push(tab);
            tracing::info!(index, count = tabs.len(), incognito, "Added tab");
            summary
        };

        batch.run();
        summary
    }

    /// Close the tab at `index`. Returns false when the request was refused
    /// (only tab left, or no such index).
    pub fn close_tab(&self, index: usize) -> bool {
        let removed = self.tabs.write().remove(index);

        match removed {
            Some(tab) => {
                tab.close();
                true
            }
            None => {
                tracing::debug!(index, "Close tab refused");
                false
            }
        }
    }

    pub fn activate_tab(&self, index: usize) -> Result<TabSummary> {
        let mut tabs = self.tabs.write();
        let tab = tabs.activate(index)?;
        Ok(TabSummary::new(tab, index, true))
    }

    /// Double-click anywhere on the tab bar
    pub fn tab_bar_double_clicked(&self) -> TabRequest {
        TabRequest::NewTab { incognito: false }
    }

    pub fn tabs(&self) -> Vec<TabSummary> {
        let tabs = self.tabs.read();
        let active = tabs.active_index();
        tabs.iter()
            .enumerate()
            .map(|(index, tab)| TabSummary::new(tab, index, index == active))
            .collect()
    }

    pub fn active_tab(&self) -> Option<TabSummary> {
        let tabs = self.tabs.read();
        let index = tabs.active_index();
        tabs.active().map(|tab| TabSummary::new(tab, index, true))
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.read().len()
    }

    pub fn tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.read().position(tab_id)
    }

    fn with_tab<F, T>(&self, tab_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tab) -> T,
    {
        let (value, batch) = {
            let mut tabs = self.tabs.write();
            let tab = tabs.get_mut_by_id(tab_id)?;
            let value = f(tab);
            (value, tab.take_pending())
        };

        batch.run();
        Ok(value)
    }

    fn summary(&self, tab_id: &str) -> Result<TabSummary> {
        let tabs = self.tabs.read();
        let index = tabs
            .position(tab_id)
            .ok_or_else(|| zypox_tabs::TabError::NotFound(tab_id.to_string()))?;
        let active = index == tabs.active_index();
        let tab = tabs.get_by_id(tab_id)?;
        Ok(TabSummary::new(tab, index, active))
    }

    // === Navigation ===

    pub fn navigate(&self, tab_id: &str, input: &str) -> Result<TabSummary> {
        self.with_tab(tab_id, |tab| tab.navigate_to_input(input))?;
        self.summary(tab_id)
    }

    pub fn go_back(&self, tab_id: &str) -> Result<()> {
        self.with_tab(tab_id, |tab| tab.back())
    }

    pub fn go_forward(&self, tab_id: &str) -> Result<()> {
        self.with_tab(tab_id, |tab| tab.forward())
    }

    pub fn reload(&self, tab_id: &str) -> Result<()> {
        self.with_tab(tab_id, |tab| tab.reload())
    }

    pub fn go_home(&self, tab_id: &str) -> Result<TabSummary> {
        self.with_tab(tab_id, |tab| tab.set_homepage())?;
        self.summary(tab_id)
    }

    pub fn menu_action(&self, tab_id: &str, action: MenuAction) -> Result<MenuOutcome> {
        let outcome = self.with_tab(tab_id, |tab| tab.handle_menu(action))?;
        tracing::debug!(tab_id = %tab_id, action = ?action, "Menu action");
        Ok(outcome)
    }

    pub fn bridge_call(&self, tab_id: &str, call: &BridgeCall) -> Result<()> {
        self.with_tab(tab_id, |tab| tab.handle_bridge_call(call))
    }

    // === Engine notifications ===

    pub fn on_url_changed(&self, tab_id: &str, url: &str) -> Result<()> {
        self.with_tab(tab_id, |tab| tab.on_url_changed(url))
    }

    pub fn on_load_finished(&self, tab_id: &str, url: &str) -> Result<()> {
        self.with_tab(tab_id, |tab| {
            tab.on_url_changed(url);
            tab.on_load_finished(url);
        })
    }

    /// Whether `url` is the live homepage of `tab_id`
    pub fn is_homepage(&self, tab_id: &str, url: &str) -> bool {
        self.tabs
            .read()
            .get_by_id(tab_id)
            .is_ok_and(|tab| tab.homepage_document(url).is_some())
    }

    /// Generated homepage served at `location`
    pub fn homepage_document(&self, location: &str) -> Option<String> {
        self.tabs
            .read()
            .homepage_document(location)
            .map(str::to_string)
    }
}

impl Clone for Browser {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            history: self.history.clone(),
            tabs: Arc::clone(&self.tabs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use zypox_tabs::{new_tab_id, Notice, TabError};

    #[derive(Clone, Default)]
    struct FakeEngine {
        loads: Arc<Mutex<Vec<String>>>,
        closed: Arc<Mutex<bool>>,
    }

    impl FakeEngine {
        fn last_load(&self) -> Option<String> {
            self.loads.lock().last().cloned()
        }
    }

    impl EngineView for FakeEngine {
        fn load(&self, url: &str) -> zypox_tabs::Result<()> {
            self.loads.lock().push(url.to_string());
            Ok(())
        }

        fn back(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn forward(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn reload(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn set_zoom(&self, _factor: f64) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn close(&self) -> zypox_tabs::Result<()> {
            *self.closed.lock() = true;
            Ok(())
        }
    }

    fn open(browser: &Browser, incognito: bool) -> (String, FakeEngine) {
        let engine = FakeEngine::default();
        let id = new_tab_id();
        browser.new_tab(id.clone(), incognito, Box::new(engine.clone()));
        (id, engine)
    }

    #[test]
    fn test_startup_scenario() {
        let browser = Browser::new(Config::default());
        let (id, engine) = open(&browser, false);

        let tabs = browser.tabs();
        assert_eq!(tabs.len(), 1);
        assert!(tabs[0].active);
        assert!(tabs[0].address.is_empty());
        assert!(engine
            .last_load()
            .unwrap()
            .starts_with(&browser.config().homepage_base));

        browser.navigate(&id, "openai.com").unwrap();
        assert_eq!(engine.last_load().unwrap(), "https://openai.com");

        browser.navigate(&id, "how to bake bread").unwrap();
        assert_eq!(
            engine.last_load().unwrap(),
            "https://www.google.com/search?q=how+to+bake+bread"
        );
    }

    #[test]
    fn test_incognito_scenario() {
        let browser = Browser::new(Config::default());
        let (normal, _) = open(&browser, false);
        browser
            .on_load_finished(&normal, "https://example.com/")
            .unwrap();
        assert_eq!(browser.history().len(), 1);

        let (private, engine) = open(&browser, true);
        browser.navigate(&private, "https://secret.example/").unwrap();
        assert_eq!(engine.last_load().unwrap(), "https://secret.example/");
        browser
            .on_url_changed(&private, "https://secret.example/")
            .unwrap();
        browser
            .on_load_finished(&private, "https://secret.example/")
            .unwrap();

        assert_eq!(
            browser.menu_action(&private, MenuAction::History).unwrap(),
            MenuOutcome::Notice(Notice::history_unavailable())
        );
        assert_eq!(browser.history().len(), 1);
    }

    #[test]
    fn test_history_shared_across_normal_tabs() {
        let browser = Browser::new(Config::default());
        let (first, _) = open(&browser, false);
        let (second, _) = open(&browser, false);

        browser.on_load_finished(&first, "https://a.example/").unwrap();
        browser.on_load_finished(&second, "https://b.example/").unwrap();
        browser.on_load_finished(&second, "https://b.example/").unwrap();

        match browser.menu_action(&first, MenuAction::History).unwrap() {
            MenuOutcome::History(dialog) => assert_eq!(dialog.entries.len(), 3),
            other => panic!("Expected history dialog, got {:?}", other),
        }
    }

    #[test]
    fn test_close_never_drops_below_one_tab() {
        let browser = Browser::new(Config::default());
        let (_, first_engine) = open(&browser, false);

        assert!(!browser.close_tab(0));
        assert_eq!(browser.tab_count(), 1);
        assert!(!*first_engine.closed.lock());

        let (second, _) = open(&browser, true);
        assert!(browser.close_tab(0));
        assert!(*first_engine.closed.lock());
        assert_eq!(browser.tab_count(), 1);
        assert_eq!(browser.active_tab().unwrap().id, second);

        assert!(!browser.close_tab(0));
        assert!(!browser.close_tab(3));
        assert_eq!(browser.tab_count(), 1);
    }

    #[test]
    fn test_new_tab_becomes_active() {
        let browser = Browser::new(Config::default());
        let (first, _) = open(&browser, false);
        let (second, _) = open(&browser, true);

        let active = browser.active_tab().unwrap();
        assert_eq!(active.id, second);
        assert_eq!(active.label, "Incognito");

        let summary = browser.activate_tab(0).unwrap();
        assert_eq!(summary.id, first);
        assert_eq!(browser.tab_index(&second), Some(1));
        assert!(browser.activate_tab(9).is_err());
    }

    #[test]
    fn test_menu_and_tab_bar_request_new_tabs() {
        let browser = Browser::new(Config::default());
        let (id, _) = open(&browser, false);

        assert_eq!(
            browser.menu_action(&id, MenuAction::NewIncognitoTab).unwrap(),
            MenuOutcome::Request(TabRequest::NewTab { incognito: true })
        );
        assert_eq!(
            browser.tab_bar_double_clicked(),
            TabRequest::NewTab { incognito: false }
        );
    }

    #[test]
    fn test_address_bar_tracks_engine() {
        let browser = Browser::new(Config::default());
        let (id, _) = open(&browser, false);

        browser.on_url_changed(&id, "https://example.com/").unwrap();
        assert_eq!(browser.tabs()[0].address, "https://example.com/");

        let summary = browser.go_home(&id).unwrap();
        assert!(summary.address.is_empty());
    }

    #[test]
    fn test_homepage_document_and_bridge() {
        let browser = Browser::new(Config::default());
        let (id, engine) = open(&browser, false);
        let location = engine.last_load().unwrap();

        let document = browser.homepage_document(&location).unwrap();
        assert!(document.contains("performSearch"));
        assert!(browser.is_homepage(&id, &location));
        assert!(!browser.is_homepage(&id, "https://example.com/"));

        let (other, _) = open(&browser, false);
        assert!(!browser.is_homepage(&other, &location));

        browser
            .bridge_call(
                &id,
                &BridgeCall::PerformSearch {
                    query: "tauri webview".to_string(),
                },
            )
            .unwrap();
        assert_eq!(
            engine.last_load().unwrap(),
            "https://www.google.com/search?q=tauri+webview"
        );
    }

    #[test]
    fn test_unknown_tab() {
        let browser = Browser::new(Config::default());
        let result = browser.on_load_finished("missing", "https://example.com/");
        assert!(matches!(
            result,
            Err(crate::CoreError::Tab(TabError::NotFound(_)))
        ));
    }

    /// Reports page loads from inside `load`, the way an engine on the main
    /// thread may
    #[derive(Clone, Default)]
    struct ReentrantEngine {
        browser: Arc<Mutex<Option<(Browser, String)>>>,
        lock_free: Arc<Mutex<Vec<bool>>>,
    }

    impl EngineView for ReentrantEngine {
        fn load(&self, url: &str) -> zypox_tabs::Result<()> {
            let Some((browser, tab_id)) = self.browser.lock().clone() else {
                return Ok(());
            };
            let free = browser.tabs.try_write().is_some();
            self.lock_free.lock().push(free);
            if free {
                browser.on_url_changed(&tab_id, url).unwrap();
            }
            Ok(())
        }

        fn back(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn forward(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn reload(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn set_zoom(&self, _factor: f64) -> zypox_tabs::Result<()> {
            Ok(())
        }

        fn close(&self) -> zypox_tabs::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_engine_runs_outside_lock() {
        let browser = Browser::new(Config::default());
        let engine = ReentrantEngine::default();
        let id = new_tab_id();
        browser.new_tab(id.clone(), false, Box::new(engine.clone()));
        *engine.browser.lock() = Some((browser.clone(), id.clone()));

        let summary = browser.navigate(&id, "example.com").unwrap();
        assert_eq!(summary.address, "https://example.com");

        browser
            .bridge_call(
                &id,
                &BridgeCall::PerformSearch {
                    query: "rust".to_string(),
                },
            )
            .unwrap();
        browser.go_home(&id).unwrap();

        assert_eq!(*engine.lock_free.lock(), vec![true, true, true]);
        assert!(browser.tabs()[0].address.is_empty());
    }
}
