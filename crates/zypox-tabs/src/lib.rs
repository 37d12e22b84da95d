//! Zypox Tab Management
//!
//! A tab owns one engine view plus the chrome state around it: address bar
//! text, zoom factor, generated homepage and settings menu. Normal tabs
//! append finished web loads to the shared history; incognito tabs never
//! see it.

mod bridge;
mod collection;
mod dialog;
mod engine;
mod error;
mod homepage;
mod menu;
mod profile;
mod tab;

pub use bridge::{BridgeCall, BRIDGE_COMMAND};
pub use collection::TabCollection;
pub use dialog::{HistoryDialog, Notice};
pub use engine::{EngineBatch, EngineCommand, EngineView};
pub use error::TabError;
pub use homepage::HomepageResource;
pub use menu::{MenuAction, MenuItem, MenuOutcome, TabRequest, SETTINGS_MENU};
pub use profile::Profile;
pub use tab::{new_tab_id, Tab, TabSettings};

pub type Result<T> = std::result::Result<T, TabError>;

#[cfg(test)]
pub(crate) mod testing;
