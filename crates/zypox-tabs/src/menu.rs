//! Settings menu
//!
//! The "⋮" menu attached to every tab. Actions the tab cannot satisfy on its
//! own (opening tabs) come back as a [`TabRequest`] for the window.

use serde::{Deserialize, Serialize};

use crate::dialog::{HistoryDialog, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    NewTab,
    NewIncognitoTab,
    ZoomIn,
    ZoomOut,
    History,
    Help,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::NewTab => "New Tab",
            MenuAction::NewIncognitoTab => "New Incognito Tab",
            MenuAction::ZoomIn => "Zoom +",
            MenuAction::ZoomOut => "Zoom -",
            MenuAction::History => "History",
            MenuAction::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "action", rename_all = "snake_case")]
pub enum MenuItem {
    Action(MenuAction),
    Separator,
}

pub const SETTINGS_MENU: &[MenuItem] = &[
    MenuItem::Action(MenuAction::NewTab),
    MenuItem::Action(MenuAction::NewIncognitoTab),
    MenuItem::Separator,
    MenuItem::Action(MenuAction::ZoomIn),
    MenuItem::Action(MenuAction::ZoomOut),
    MenuItem::Separator,
    MenuItem::Action(MenuAction::History),
    MenuItem::Separator,
    MenuItem::Action(MenuAction::Help),
];

/// Work a tab hands up to the window that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabRequest {
    NewTab { incognito: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MenuOutcome {
    /// Handled entirely inside the tab
    Done,
    Request(TabRequest),
    Notice(Notice),
    History(HistoryDialog),
}
