//! Zypox Core
//!
//! Window-level coordination: the tab collection, the shared history and
//! routing of engine notifications, bridge calls and menu actions to tabs.
//! Rust owns all state; the webviews only render.

mod browser;
mod config;
mod error;

pub use browser::{Browser, TabSummary};
pub use config::{Config, WindowConfig};
pub use error::CoreError;

// Re-export core components
pub use zypox_navigation::{
    is_web_address, parse_address, History, InputResolution, InputResolver, NavigationError,
    SearchEngine,
};
pub use zypox_tabs::{
    new_tab_id, BridgeCall, EngineView, HistoryDialog, MenuAction, MenuItem, MenuOutcome, Notice,
    Profile, TabError, TabRequest, TabSettings, BRIDGE_COMMAND, SETTINGS_MENU,
};
pub use zypox_tabs::Result as TabResult;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
