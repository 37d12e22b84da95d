//! Settings menu commands

use serde::Serialize;
use tauri::{AppHandle, Manager, Window};
use zypox_core::{MenuAction, MenuItem, MenuOutcome, SETTINGS_MENU};

use super::tabs::{fulfil_request, notify_tabs_updated, CommandResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntryInfo {
    Action { action: MenuAction, label: String },
    Separator,
}

impl From<&MenuItem> for MenuEntryInfo {
    fn from(item: &MenuItem) -> Self {
        match item {
            MenuItem::Action(action) => MenuEntryInfo::Action {
                action: *action,
                label: action.label().to_string(),
            },
            MenuItem::Separator => MenuEntryInfo::Separator,
        }
    }
}

#[tauri::command]
pub fn get_settings_menu() -> CommandResult<Vec<MenuEntryInfo>> {
    CommandResult::ok(SETTINGS_MENU.iter().map(MenuEntryInfo::from).collect())
}

/// Run a settings menu action for a tab.
///
/// Notices and the history dialog are returned for the chrome to display;
/// new-tab requests are fulfilled here.
#[tauri::command]
pub async fn menu_action(
    app: AppHandle,
    window: Window,
    tab_id: String,
    action: MenuAction,
) -> CommandResult<MenuOutcome> {
    let outcome = match app.try_state::<AppState>() {
        Some(state) => match state.with_browser(|browser| browser.menu_action(&tab_id, action)) {
            Ok(outcome) => outcome,
            Err(e) => return CommandResult::err(e.to_string()),
        },
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match outcome {
        MenuOutcome::Request(request) => {
            if let Err(e) = fulfil_request(&app, &window, request) {
                return CommandResult::err(e);
            }
        }
        MenuOutcome::Done => notify_tabs_updated(&app, window.label()),
        MenuOutcome::Notice(_) | MenuOutcome::History(_) => {}
    }

    CommandResult::ok(outcome)
}
