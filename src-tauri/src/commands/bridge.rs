//! Scripting bridge endpoint
//!
//! Invoked by script inside a tab's generated homepage. Calls from any
//! other page are rejected.

use tauri::{AppHandle, State, Webview};
use zypox_core::BridgeCall;

use super::tabs::{notify_tabs_updated, CommandResult};
use super::webview::WebviewManager;
use crate::state::AppState;

#[tauri::command]
pub fn bridge_call(
    app: AppHandle,
    webview: Webview,
    state: State<AppState>,
    manager: State<WebviewManager>,
    call: BridgeCall,
) -> CommandResult<()> {
    let Some(tab_id) = manager.tab_for_label(webview.label()) else {
        return CommandResult::err(format!("No tab for webview: {}", webview.label()));
    };

    let page = match webview.url() {
        Ok(url) => url.to_string(),
        Err(e) => return CommandResult::err(format!("Unknown page: {}", e)),
    };

    let from_homepage = state
        .with_browser(|browser| Ok(browser.is_homepage(&tab_id, &page)))
        .unwrap_or(false);
    if !from_homepage {
        tracing::warn!(tab_id = %tab_id, page = %page, "Rejected bridge call from foreign page");
        return CommandResult::err("Bridge is only available to the homepage".to_string());
    }

    match state.with_browser(|browser| browser.bridge_call(&tab_id, &call)) {
        Ok(()) => {
            notify_tabs_updated(&app, webview.window().label());
            CommandResult::ok(())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
