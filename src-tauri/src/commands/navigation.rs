//! Navigation and address bar commands

use tauri::{AppHandle, State, Window};

use super::tabs::{notify_tabs_updated, CommandResult, TabInfo};
use crate::state::AppState;

/// Address bar submission (Enter)
#[tauri::command]
pub fn navigate_input(
    state: State<AppState>,
    tab_id: String,
    input: String,
) -> CommandResult<TabInfo> {
    match state.with_browser(|browser| browser.navigate(&tab_id, &input)) {
        Ok(tab) => CommandResult::ok(tab.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn go_back(state: State<AppState>, tab_id: String) -> CommandResult<()> {
    match state.with_browser(|browser| browser.go_back(&tab_id)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn go_forward(state: State<AppState>, tab_id: String) -> CommandResult<()> {
    match state.with_browser(|browser| browser.go_forward(&tab_id)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reload(state: State<AppState>, tab_id: String) -> CommandResult<()> {
    match state.with_browser(|browser| browser.reload(&tab_id)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Regenerate and show the tab's homepage
#[tauri::command]
pub fn go_home(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    tab_id: String,
) -> CommandResult<TabInfo> {
    match state.with_browser(|browser| browser.go_home(&tab_id)) {
        Ok(tab) => {
            notify_tabs_updated(&app, window.label());
            CommandResult::ok(tab.into())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
