//! Tab management commands
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Manager, State, Window};
use zypox_core::{new_tab_id, TabRequest, TabSummary};

use super::webview;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub index: usize,
    pub label: String,
    pub incognito: bool,
    pub address: String,
    pub zoom: f64,
    pub active: bool,
}

impl From<TabSummary> for TabInfo {
    fn from(tab: TabSummary) -> Self {
        Self {
            id: tab.id,
            index: tab.index,
            label: tab.label,
            incognito: tab.incognito,
            address: tab.address,
            zoom: tab.zoom,
            active: tab.active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Tell the chrome to redraw tabs and the address bar
pub fn notify_tabs_updated(app: &AppHandle, window_label: &str) {
    let _ = app.emit_to(
        super::ui_webview_label(window_label).as_str(),
        "tabs-updated",
        (),
    );
}

/// Open a tab in `window`: build its webview first, then hand it to the core
pub fn open_tab(app: &AppHandle, window: &Window, incognito: bool) -> Result<TabSummary, String> {
    let state = app
        .try_state::<AppState>()
        .ok_or_else(|| "AppState not found".to_string())?;

    let tab_id = new_tab_id();
    let engine = webview::create_content_webview(app, window, &tab_id, incognito)?;

    let summary = state
        .with_browser(|browser| Ok(browser.new_tab(tab_id, incognito, Box::new(engine))))
        .map_err(|e| e.to_string())?;

    webview::show_only(app, &summary.id);
    notify_tabs_updated(app, window.label());

    Ok(summary)
}

/// Carry out a request a tab handed up to the window
pub fn fulfil_request(
    app: &AppHandle,
    window: &Window,
    request: TabRequest,
) -> Result<TabSummary, String> {
    match request {
        TabRequest::NewTab { incognito } => open_tab(app, window, incognito),
    }
}

#[tauri::command]
pub async fn new_tab(app: AppHandle, window: Window, incognito: bool) -> CommandResult<TabInfo> {
    match open_tab(&app, &window, incognito) {
        Ok(tab) => CommandResult::ok(tab.into()),
        Err(e) => CommandResult::err(e),
    }
}

#[tauri::command]
pub async fn tab_bar_double_clicked(app: AppHandle, window: Window) -> CommandResult<TabInfo> {
    let request = match app.try_state::<AppState>() {
        Some(state) => match state.with_browser(|browser| Ok(browser.tab_bar_double_clicked())) {
            Ok(request) => request,
            Err(e) => return CommandResult::err(e.to_string()),
        },
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match fulfil_request(&app, &window, request) {
        Ok(tab) => CommandResult::ok(tab.into()),
        Err(e) => CommandResult::err(e),
    }
}

/// Close the tab at `index`. Closing the only tab is silently refused.
#[tauri::command]
pub fn close_tab(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    index: usize,
) -> CommandResult<bool> {
    match state.with_browser(|browser| Ok(browser.close_tab(index))) {
        Ok(closed) => {
            if closed {
                webview::show_active(&app);
                notify_tabs_updated(&app, window.label());
            }
            CommandResult::ok(closed)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn activate_tab(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    index: usize,
) -> CommandResult<TabInfo> {
    match state.with_browser(|browser| browser.activate_tab(index)) {
        Ok(tab) => {
            webview::show_only(&app, &tab.id);
            notify_tabs_updated(&app, window.label());
            CommandResult::ok(tab.into())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_tabs(state: State<AppState>) -> CommandResult<Vec<TabInfo>> {
    match state.with_browser(|browser| Ok(browser.tabs())) {
        Ok(tabs) => CommandResult::ok(tabs.into_iter().map(TabInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_active_tab(state: State<AppState>) -> CommandResult<Option<TabInfo>> {
    match state.with_browser(|browser| Ok(browser.active_tab())) {
        Ok(tab) => CommandResult::ok(tab.map(TabInfo::from)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
