//! WebView management
//!
//! Each tab gets its own child webview within the main window. The child
//! webview is the tab's engine view; its page-load events are routed back
//! into the core as "URL changed" / "load finished" notifications.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, State, Webview, WebviewUrl, Window,
};
use zypox_core::{parse_address, EngineView, TabError, TabResult};

use super::tabs::CommandResult;
use crate::state::AppState;

/// Manages webviews for tabs
pub struct WebviewManager {
    /// Map of tab_id -> webview label
    webviews: Arc<RwLock<HashMap<String, String>>>,
    /// Current bounds for content area
    bounds: Arc<RwLock<ContentBounds>>,
}

#[derive(Clone, Copy)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 84.0, // tab bar + navigation bar
            width: 1200.0,
            height: 716.0,
        }
    }
}

impl WebviewManager {
    pub fn new() -> Self {
        Self {
            webviews: Arc::new(RwLock::new(HashMap::new())),
            bounds: Arc::new(RwLock::new(ContentBounds::default())),
        }
    }

    pub fn get_webview_label(&self, tab_id: &str) -> Option<String> {
        self.webviews.read().get(tab_id).cloned()
    }

    pub fn tab_for_label(&self, label: &str) -> Option<String> {
        self.webviews
            .read()
            .iter()
            .find(|(_, value)| value.as_str() == label)
            .map(|(tab_id, _)| tab_id.clone())
    }

    pub fn register_webview(&self, tab_id: String, label: String) {
        self.webviews.write().insert(tab_id, label);
    }

    pub fn unregister_webview(&self, tab_id: &str) -> Option<String> {
        self.webviews.write().remove(tab_id)
    }

    pub fn get_all_labels(&self) -> Vec<String> {
        self.webviews.read().values().cloned().collect()
    }

    pub fn get_bounds(&self) -> ContentBounds {
        *self.bounds.read()
    }

    pub fn set_bounds(&self, bounds: ContentBounds) {
        *self.bounds.write() = bounds;
    }
}

impl Default for WebviewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A tab's child webview seen through the engine view seam
pub struct TauriEngine {
    app: AppHandle,
    label: String,
}

impl TauriEngine {
    fn webview(&self) -> TabResult<Webview> {
        self.app
            .get_webview(&self.label)
            .ok_or_else(|| TabError::Engine(format!("Webview not found: {}", self.label)))
    }
}

/// Script sending the page to `url` as typed
fn location_script(url: &str) -> TabResult<String> {
    let literal = serde_json::to_string(url)
        .map_err(|e| TabError::Engine(format!("Unencodable address: {}", e)))?;
    Ok(format!("window.location.href = {};", literal))
}

fn engine_error(operation: &str, e: tauri::Error) -> TabError {
    TabError::Engine(format!("{} failed: {}", operation, e))
}

impl EngineView for TauriEngine {
    fn load(&self, url: &str) -> TabResult<()> {
        let webview = self.webview()?;
        match parse_address(url) {
            Ok(parsed) => webview
                .navigate(parsed)
                .map_err(|e| engine_error("Navigation", e)),
            // Let the engine reject it and show its own error page
            Err(e) => {
                tracing::debug!(
                    label = %self.label,
                    error = %e,
                    "Handing unparsed address to engine"
                );
                let script = location_script(url)?;
                webview
                    .eval(&script)
                    .map_err(|e| engine_error("Navigation", e))
            }
        }
    }

    fn back(&self) -> TabResult<()> {
        self.webview()?
            .eval("history.back()")
            .map_err(|e| engine_error("Back navigation", e))
    }

    fn forward(&self) -> TabResult<()> {
        self.webview()?
            .eval("history.forward()")
            .map_err(|e| engine_error("Forward navigation", e))
    }

    fn reload(&self) -> TabResult<()> {
        self.webview()?
            .reload()
            .map_err(|e| engine_error("Reload", e))
    }

    fn set_zoom(&self, factor: f64) -> TabResult<()> {
        self.webview()?
            .set_zoom(factor)
            .map_err(|e| engine_error("Zoom", e))
    }

    fn close(&self) -> TabResult<()> {
        let webview = self.webview()?;
        if let Some(manager) = self.app.try_state::<WebviewManager>() {
            if let Some(tab_id) = manager.tab_for_label(&self.label) {
                manager.unregister_webview(&tab_id);
            }
        }
        webview.close().map_err(|e| engine_error("Close", e))?;
        tracing::info!(label = %self.label, "Closed webview");
        Ok(())
    }
}

/// Create the hidden child webview backing a new tab.
///
/// Must not be called while the browser state is locked: page-load events
/// fire on the main thread and take that lock.
pub fn create_content_webview(
    app: &AppHandle,
    window: &Window,
    tab_id: &str,
    incognito: bool,
) -> Result<TauriEngine, String> {
    let manager = app
        .try_state::<WebviewManager>()
        .ok_or_else(|| "WebviewManager not found".to_string())?;

    let window_label = window.label().to_string();
    let webview_label = format!("content-{}-{}", window_label, tab_id);
    let ui_label = super::ui_webview_label(&window_label);

    let blank: url::Url = "about:blank"
        .parse()
        .map_err(|e| format!("Invalid about:blank URL: {}", e))?;

    let app_handle_for_load = app.clone();
    let tab_id_for_load = tab_id.to_string();

    let webview_builder = WebviewBuilder::new(&webview_label, WebviewUrl::External(blank))
        .auto_resize()
        .incognito(incognito)
        .on_page_load(move |_webview, payload| {
            let url = payload.url().to_string();
            if let Some(state) = app_handle_for_load.try_state::<AppState>() {
                let result = state.with_browser(|browser| match payload.event() {
                    PageLoadEvent::Started => browser.on_url_changed(&tab_id_for_load, &url),
                    PageLoadEvent::Finished => browser.on_load_finished(&tab_id_for_load, &url),
                });

                // Events for a tab not yet registered (or already closed)
                if let Err(e) = result {
                    tracing::debug!(
                        tab_id = %tab_id_for_load,
                        url = %url,
                        error = %e,
                        "Dropped page load event"
                    );
                }
            }

            let _ = app_handle_for_load.emit_to(ui_label.as_str(), "tabs-updated", ());
        });

    let bounds = manager.get_bounds();
    let webview = window
        .add_child(
            webview_builder,
            LogicalPosition::new(bounds.x, bounds.y),
            LogicalSize::new(bounds.width, bounds.height),
        )
        .map_err(|e| {
            tracing::error!(
                label = %webview_label,
                tab_id = %tab_id,
                error = %e,
                "Failed to create child webview"
            );
            format!("Failed to create webview: {}", e)
        })?;

    // Start hidden
    let _ = webview.hide();

    manager.register_webview(tab_id.to_string(), webview_label.clone());

    tracing::info!(label = %webview_label, tab_id = %tab_id, incognito, "Created child webview");

    Ok(TauriEngine {
        app: app.clone(),
        label: webview_label,
    })
}

/// Show the active tab's webview and hide every other content webview
pub fn show_only(app: &AppHandle, tab_id: &str) {
    let Some(manager) = app.try_state::<WebviewManager>() else {
        return;
    };

    let active_label = manager.get_webview_label(tab_id);
    for label in manager.get_all_labels() {
        if Some(&label) == active_label.as_ref() {
            continue;
        }
        if let Some(webview) = app.get_webview(&label) {
            let _ = webview.hide();
        }
    }

    if let Some(webview) = active_label.and_then(|label| app.get_webview(&label)) {
        let _ = webview.show();
    }
}

/// Show whichever tab is active
pub fn show_active(app: &AppHandle) {
    let active = app
        .try_state::<AppState>()
        .and_then(|state| state.with_browser(|browser| Ok(browser.active_tab())).ok())
        .flatten();

    if let Some(tab) = active {
        show_only(app, &tab.id);
    }
}

/// Update all webview positions when the window resizes
#[tauri::command]
pub async fn set_content_bounds(
    app: AppHandle,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> CommandResult<()> {
    let manager = match app.try_state::<WebviewManager>() {
        Some(m) => m,
        None => return CommandResult::err("WebviewManager not found".to_string()),
    };

    manager.set_bounds(ContentBounds {
        x,
        y,
        width,
        height,
    });

    // Position is relative to the parent window
    let position = LogicalPosition::new(x, y);
    let size = LogicalSize::new(width, height);

    for label in manager.get_all_labels() {
        if let Some(webview) = app.get_webview(&label) {
            let _ = webview.set_position(position);
            let _ = webview.set_size(size);
        }
    }

    CommandResult::ok(())
}

/// Hide page content while the chrome shows a modal over it
#[tauri::command]
pub fn hide_content(app: AppHandle, manager: State<'_, WebviewManager>) -> CommandResult<()> {
    for label in manager.get_all_labels() {
        if let Some(webview) = app.get_webview(&label) {
            let _ = webview.hide();
        }
    }
    CommandResult::ok(())
}

#[tauri::command]
pub fn show_content(app: AppHandle) -> CommandResult<()> {
    show_active(&app);
    CommandResult::ok(())
}
