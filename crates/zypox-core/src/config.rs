//! Browser configuration
//!
//! Built-in defaults only. Nothing is read from or written to disk.

use serde::{Deserialize, Serialize};
use zypox_navigation::{InputResolver, SearchEngine};
use zypox_tabs::TabSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint search queries are appended to
    pub search_endpoint: String,
    /// Location prefix the homepage scheme handler answers on
    pub homepage_base: String,
    /// Zoom change per menu action
    pub zoom_step: f64,
    /// Lowest zoom factor reachable by zooming out
    pub min_zoom: f64,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Config {
    /// Scheme serving generated homepages
    pub const HOMEPAGE_SCHEME: &'static str = "zypox";

    pub fn new() -> Self {
        Self {
            search_endpoint: "https://www.google.com/search?q=".to_string(),
            homepage_base: Self::default_homepage_base(),
            zoom_step: 0.1,
            min_zoom: 0.1,
            window: WindowConfig::default(),
        }
    }

    /// Custom schemes are exposed as `http://<scheme>.localhost` on Windows
    fn default_homepage_base() -> String {
        if cfg!(windows) {
            format!("http://{}.localhost/home/", Self::HOMEPAGE_SCHEME)
        } else {
            format!("{}://localhost/home/", Self::HOMEPAGE_SCHEME)
        }
    }

    pub fn tab_settings(&self) -> TabSettings {
        TabSettings {
            resolver: InputResolver::with_search_engine(SearchEngine::new(
                self.search_endpoint.clone(),
            )),
            homepage_base: self.homepage_base.clone(),
            zoom_step: self.zoom_step,
            min_zoom: self.min_zoom,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Zypox Browser".to_string(),
            x: 100.0,
            y: 100.0,
            width: 1200.0,
            height: 800.0,
            min_width: 640.0,
            min_height: 480.0,
        }
    }
}
