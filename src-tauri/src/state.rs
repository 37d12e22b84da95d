//! Application state management
use zypox_core::{Browser, Config, Result};

/// Application state shared with every command
pub struct AppState {
    browser: Browser,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            browser: Browser::new(Config::default()),
        }
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        f(&self.browser)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
